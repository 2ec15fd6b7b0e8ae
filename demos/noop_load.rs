use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use tracing_udp_shipper::init::{init_shipper_with_config, LayerConfig};
use tracing_udp_shipper::noop_hook::NoopHook;

/// Measures the overhead of the synchronous layer with a hook that
/// drops everything.
fn main() {
    init_shipper_with_config(
        Arc::new(NoopHook),
        LayerConfig {
            enable_stdout: false,
        },
    );

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        error!(iteration = i, "load test error");
    }

    let elapsed = start.elapsed();
    println!(
        "noop hook: sent {} events in {:?} (~{:.0} ev/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
