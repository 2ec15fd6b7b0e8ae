use std::net::UdpSocket;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use tracing_udp_shipper::fields::Fields;
use tracing_udp_shipper::init::{init_shipper_with_config, LayerConfig};
use tracing_udp_shipper::udp::UdpHook;

/// Ships a few events to a loopback "collector" and prints the
/// datagrams it received.
fn main() {
    let collector = UdpSocket::bind("127.0.0.1:0").expect("bind collector");
    collector
        .set_read_timeout(Some(Duration::from_secs(1)))
        .expect("set timeout");
    let endpoint = collector.local_addr().expect("local addr").to_string();

    let mut extra = Fields::new();
    extra.insert("env".to_string(), serde_json::json!("demo"));
    let hook = UdpHook::with_endpoint(&endpoint, "tok123", "myapp", extra).expect("create hook");

    init_shipper_with_config(
        Arc::new(hook),
        LayerConfig {
            enable_stdout: false,
        },
    );

    info!(user = "alice", "service started");
    warn!(disk_free_mb = 420u64, "disk space low");
    error!("upstream unreachable");

    let mut buf = [0u8; 64 * 1024];
    for _ in 0..3 {
        match collector.recv_from(&mut buf) {
            Ok((len, _)) => {
                println!("collector got: {}", String::from_utf8_lossy(&buf[..len]));
            }
            Err(e) => {
                println!("collector recv failed: {}", e);
                break;
            }
        }
    }
}
