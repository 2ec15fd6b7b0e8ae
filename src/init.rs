use crate::hook::LogHook;
use crate::layer::ShipperLayer;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration for installing the shipping layer.
///
/// **Fields**
/// - `enable_stdout`: if `true`, a `tracing_subscriber::fmt` layer is
///   stacked on top of the shipper so events are also printed to the
///   console.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    pub enable_stdout: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        LayerConfig {
            enable_stdout: true,
        }
    }
}

/// Install a global `tracing` subscriber forwarding events to `hook`.
///
/// **Parameters**
/// - `hook`: implementation of [`LogHook`] that receives every record.
/// - `config`: [`LayerConfig`] controlling the optional console copy.
///
/// **Effects**
///
/// Installs a [`Registry`] combined with [`ShipperLayer`] as the global
/// default subscriber, so all `tracing` events in the process are
/// observed by the layer. Panics if a global subscriber is already set.
pub fn init_shipper_with_config(hook: Arc<dyn LogHook>, config: LayerConfig) {
    let layer = ShipperLayer::new(hook);

    if config.enable_stdout {
        let fmt_layer = tracing_subscriber::fmt::layer();
        let subscriber = Registry::default().with(layer).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber).expect("set global subscriber");
    } else {
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::set_global_default(subscriber).expect("set global subscriber");
    }
}

/// Install the shipping layer with [`LayerConfig::default`]. This is
/// the recommended entrypoint for typical services.
pub fn init_shipper(hook: Arc<dyn LogHook>) {
    init_shipper_with_config(hook, LayerConfig::default());
}
