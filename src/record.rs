use crate::fields::Fields;
use crate::level::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Severity,
    pub fields: Fields,
    pub message: Option<String>,
}

impl LogRecord {
    /// Record with the given severity and message, stamped now.
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        LogRecord {
            timestamp: Utc::now(),
            level,
            fields: Fields::new(),
            message: Some(message.into()),
        }
    }
}
