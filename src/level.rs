use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from most to least severe.
///
/// The discriminants are the integer codes the collector expects on the
/// wire (`panic = 0` .. `debug = 5`). This table is a contract with the
/// remote ingestion schema and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Debug = 5,
}

impl Severity {
    /// All six severities in severity order. A hook that subscribes to
    /// everything returns a reference to this.
    pub const ALL: [Severity; 6] = [
        Severity::Panic,
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Integer wire code for this severity.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name, matching what text formatters emit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severities are serialized as their integer wire code, never as text.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity: '{0}'")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "panic" => Ok(Severity::Panic),
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// `tracing` has no panic/fatal levels, so events can only map to
/// `error` through `debug`; TRACE is folded into `debug`.
impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            Severity::Error
        } else if level == tracing::Level::WARN {
            Severity::Warning
        } else if level == tracing::Level::INFO {
            Severity::Info
        } else {
            Severity::Debug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_match_collector_table() {
        let expected = [
            (Severity::Panic, 0),
            (Severity::Fatal, 1),
            (Severity::Error, 2),
            (Severity::Warning, 3),
            (Severity::Info, 4),
            (Severity::Debug, 5),
        ];
        for (severity, code) in expected {
            assert_eq!(severity.code(), code);
        }
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Severity::Panic).unwrap(), "0");
    }

    #[test]
    fn parses_names_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
        }
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn tracing_levels_map_into_severities() {
        assert_eq!(Severity::from(tracing::Level::ERROR), Severity::Error);
        assert_eq!(Severity::from(tracing::Level::WARN), Severity::Warning);
        assert_eq!(Severity::from(tracing::Level::INFO), Severity::Info);
        assert_eq!(Severity::from(tracing::Level::DEBUG), Severity::Debug);
        assert_eq!(Severity::from(tracing::Level::TRACE), Severity::Debug);
    }
}
