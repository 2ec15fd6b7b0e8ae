//! Environment variable names used by this crate for convenient
//! configuration from services.
//!
//! These are purely helpers; the hook types remain decoupled from
//! environment access.

use crate::fields::Fields;
use crate::udp::{HookError, UdpHook, DEFAULT_ENDPOINT};

/// Tenant credential sent as the `token` field.
pub const SHIPPER_TOKEN_ENV: &str = "SHIPPER_TOKEN";

/// Application identifier sent as the `appname` field.
pub const SHIPPER_APPNAME_ENV: &str = "SHIPPER_APPNAME";

/// Optional collector endpoint override, `host:port`.
pub const SHIPPER_ENDPOINT_ENV: &str = "SHIPPER_ENDPOINT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Error type returned when building a hook from the environment.
#[derive(thiserror::Error, Debug)]
pub enum EnvHookError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error(transparent)]
    Hook(#[from] HookError),
}

/// Build a [`UdpHook`] from `SHIPPER_TOKEN`, `SHIPPER_APPNAME` and
/// `SHIPPER_ENDPOINT`. The token is required; the app name defaults to
/// `"unknown"` and the endpoint to [`DEFAULT_ENDPOINT`].
pub fn hook_from_env() -> Result<UdpHook, EnvHookError> {
    let token = std::env::var(SHIPPER_TOKEN_ENV)
        .map_err(|_| EnvHookError::Missing(SHIPPER_TOKEN_ENV))?;
    let app_name = env_or(SHIPPER_APPNAME_ENV, "unknown");
    let endpoint = env_or(SHIPPER_ENDPOINT_ENV, DEFAULT_ENDPOINT);

    Ok(UdpHook::with_endpoint(
        &endpoint,
        &token,
        &app_name,
        Fields::new(),
    )?)
}
