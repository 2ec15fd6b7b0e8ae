use crate::hook::LogHook;
use crate::level::Severity;
use crate::record::LogRecord;
use std::error::Error;

/// A hook that simply drops all records.
///
/// Useful for measuring the overhead of the layer itself without any
/// network I/O, and for unit tests that don't care about delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl LogHook for NoopHook {
    fn levels(&self) -> &[Severity] {
        &Severity::ALL
    }

    fn fire(&self, _record: &mut LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
