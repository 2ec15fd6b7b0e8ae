pub mod fields;
pub mod level;
pub mod record;
pub mod format;
pub mod hook;
pub mod udp;
pub mod noop_hook;
pub mod layer;

pub mod init;
pub mod env;
