use crate::fields::Fields;
use crate::hook::LogHook;
use crate::level::Severity;
use crate::record::LogRecord;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that observes events and forwards them to
/// a [`LogHook`] synchronously on the emitting thread.
///
/// There is no channel and no background task between the event and the
/// hook: `on_event` builds a [`LogRecord`] and calls `fire` before
/// returning. A failed fire drops the record and bumps `failed_events`;
/// the layer does not retry and produces no log output of its own.
pub struct ShipperLayer {
    hook: Arc<dyn LogHook>,
    /// Total events seen by the layer (before filtering by level).
    pub total_events: Arc<AtomicU64>,
    /// Records accepted by the hook.
    pub shipped_events: Arc<AtomicU64>,
    /// Records the hook returned an error for.
    pub failed_events: Arc<AtomicU64>,
}

impl ShipperLayer {
    pub fn new(hook: Arc<dyn LogHook>) -> Self {
        ShipperLayer {
            hook,
            total_events: Arc::new(AtomicU64::new(0)),
            shipped_events: Arc::new(AtomicU64::new(0)),
            failed_events: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<S> Layer<S> for ShipperLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        let severity = Severity::from(*event.metadata().level());
        if !self.hook.levels().contains(&severity) {
            return;
        }

        let mut fields = Fields::new();
        let mut message: Option<String> = None;
        let mut visitor = FieldVisitor {
            fields: &mut fields,
            message: &mut message,
        };
        event.record(&mut visitor);

        // An explicit `target = ...` event field wins over metadata.
        fields
            .entry("target".to_string())
            .or_insert_with(|| {
                serde_json::Value::String(event.metadata().target().to_string())
            });

        let mut record = LogRecord {
            timestamp: Utc::now(),
            level: severity,
            fields,
            message,
        };

        match self.hook.fire(&mut record) {
            Ok(()) => {
                self.shipped_events.fetch_add(1, Ordering::Relaxed);
            }
            Err(_) => {
                self.failed_events.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

pub struct FieldVisitor<'a> {
    pub fields: &'a mut Fields,
    pub message: &'a mut Option<String>,
}

impl<'a> Visit for FieldVisitor<'a> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    #[derive(Default)]
    struct CaptureHook {
        records: Mutex<Vec<LogRecord>>,
        fail: bool,
    }

    impl LogHook for CaptureHook {
        fn levels(&self) -> &[Severity] {
            &Severity::ALL
        }

        fn fire(&self, record: &mut LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.records.lock().unwrap().push(record.clone());
            if self.fail {
                return Err("capture hook configured to fail".into());
            }
            Ok(())
        }
    }

    #[test]
    fn event_fields_and_message_reach_the_hook() {
        let hook = Arc::new(CaptureHook::default());
        let layer = ShipperLayer::new(hook.clone());
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(user = "bob", attempts = 3u64, "login failed");
        });

        let records = hook.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, Severity::Error);
        assert_eq!(record.message.as_deref(), Some("login failed"));
        assert_eq!(record.fields["user"], serde_json::json!("bob"));
        assert_eq!(record.fields["attempts"], serde_json::json!(3));
        assert!(record.fields.contains_key("target"));
    }

    #[test]
    fn counters_track_shipped_and_failed() {
        let hook = Arc::new(CaptureHook {
            records: Mutex::new(Vec::new()),
            fail: true,
        });
        let layer = ShipperLayer::new(hook.clone());
        let total = Arc::clone(&layer.total_events);
        let shipped = Arc::clone(&layer.shipped_events);
        let failed = Arc::clone(&layer.failed_events);
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("first");
            tracing::info!("second");
        });

        assert_eq!(total.load(Ordering::Relaxed), 2);
        assert_eq!(shipped.load(Ordering::Relaxed), 0);
        assert_eq!(failed.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn each_event_gets_a_fresh_record() {
        let hook = Arc::new(CaptureHook::default());
        let layer = ShipperLayer::new(hook.clone());
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(request_id = 1u64, "first");
            tracing::info!("second");
        });

        let records = hook.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].fields.contains_key("request_id"));
        assert!(!records[1].fields.contains_key("request_id"));
    }
}
