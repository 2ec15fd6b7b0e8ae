use crate::record::LogRecord;
use chrono::SecondsFormat;
use serde_json::{Map, Value};

/// Renders a [`LogRecord`] into the byte payload written to the wire.
///
/// Implementations must be stateless with respect to individual calls:
/// the hook shares one formatter instance across every record it sends.
/// The default is [`JsonFormatter`].
pub trait Formatter: Send + Sync {
    /// Produce the wire encoding of a single record.
    ///
    /// **Returns**
    /// - `Ok(bytes)` ready to be written to the transport as-is.
    /// - `Err(..)` if the record could not be serialized. The hook
    ///   surfaces this to its caller and drops the record.
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>, FormatError>;
}

/// Error type returned when rendering a record fails.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Keys the JSON encoding claims for itself. Record fields with these
/// names are preserved under a `fields.` prefix instead of shadowing
/// the wire schema.
const RESERVED_KEYS: [&str; 3] = ["message", "level", "time"];

/// Default formatter producing one JSON object per record in the
/// collector's ingestion schema: the message under a `message` key, the
/// severity under `level` as its integer code, the timestamp under
/// `time` as RFC 3339 UTC, and every record field at the top level.
/// Keys are emitted sorted, so output for a given record is byte-stable.
///
/// Stateless; hooks hold it boxed behind [`Formatter`] and may swap it
/// for a custom implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<Vec<u8>, FormatError> {
        let mut object = Map::new();

        for (key, value) in &record.fields {
            if RESERVED_KEYS.contains(&key.as_str()) {
                object.insert(format!("fields.{key}"), value.clone());
            } else {
                object.insert(key.clone(), value.clone());
            }
        }

        // A record without a message is legal; the payload simply has
        // no `message` key while level and time are still encoded.
        if let Some(message) = &record.message {
            object.insert("message".to_string(), Value::String(message.clone()));
        }
        object.insert("level".to_string(), Value::from(record.level.code()));
        object.insert(
            "time".to_string(),
            Value::String(
                record
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        );

        Ok(serde_json::to_vec(&Value::Object(object))?)
    }
}
