use crate::level::Severity;
use crate::record::LogRecord;
use std::error::Error;

/// Destination for [`LogRecord`]s produced by the shipping layer.
///
/// Implementations are responsible for transporting records to a
/// concrete collector (UDP endpoint, stdout, a test capture, etc). The
/// layer calls `fire` synchronously on whatever thread emitted the log
/// event; there is no queue or background task between them.
pub trait LogHook: Send + Sync {
    /// Severity levels this hook wants to receive. The layer drops
    /// events whose mapped severity is not in this set before building
    /// a record.
    fn levels(&self) -> &[Severity];

    /// Handle a single record.
    ///
    /// **Parameters**
    /// - `record`: record built by the layer for this call. The hook
    ///   may mutate it in place (the UDP hook folds its static fields
    ///   into `record.fields` before rendering).
    ///
    /// **Returns**
    /// - `Ok(())` if the record was handed to the transport.
    /// - `Err(..)` if rendering or transmission failed. The record is
    ///   dropped; the hook never retries, never buffers, and has no
    ///   secondary channel to log its own errors. The caller decides
    ///   whether to count, report, or ignore the failure.
    fn fire(&self, record: &mut LogRecord) -> Result<(), Box<dyn Error + Send + Sync>>;
}
