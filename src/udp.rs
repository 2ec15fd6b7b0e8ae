use crate::fields::{merge_missing, Fields};
use crate::format::{FormatError, Formatter, JsonFormatter};
use crate::hook::LogHook;
use crate::level::Severity;
use crate::record::LogRecord;
use serde_json::Value;
use std::error::Error;
use std::io;
use std::net::UdpSocket;

/// Collector endpoint dialed by [`UdpHook::new`].
pub const DEFAULT_ENDPOINT: &str = "listener.logz.io:5050";

/// Static field carrying the tenant credential.
pub const TOKEN_KEY: &str = "token";

/// Static field carrying the application identifier.
pub const APPNAME_KEY: &str = "appname";

/// Error type for constructing a [`UdpHook`] or firing a record at it.
#[derive(thiserror::Error, Debug)]
pub enum HookError {
    #[error("failed to open collector socket: {0}")]
    Socket(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("datagram truncated: wrote {written} of {len} bytes")]
    Truncated { written: usize, len: usize },
}

/// UDP implementation of [`LogHook`].
///
/// Owns one outbound connectionless socket connected at construction
/// time, one [`Formatter`], and the static field set stamped onto every
/// record (`token`, `appname`, plus caller-supplied extras). Delivery
/// is fire-and-forget: one datagram per record, no acknowledgement, no
/// retry.
///
/// The hook is read-only after construction. Both setters take
/// `&mut self`, so once the hook is shared behind an `Arc` with the
/// layer, the static set and formatter can no longer change; do any
/// [`merge_fields`](UdpHook::merge_fields) /
/// [`set_formatter`](UdpHook::set_formatter) calls during single-threaded
/// setup.
pub struct UdpHook {
    socket: UdpSocket,
    formatter: Box<dyn Formatter>,
    fields: Fields,
}

impl UdpHook {
    /// Construct a hook dialing [`DEFAULT_ENDPOINT`].
    ///
    /// **Parameters**
    /// - `token`: tenant credential, stored under the `token` field.
    /// - `app_name`: application identifier, stored under `appname`.
    /// - `extra`: additional static fields. Keys colliding with the
    ///   pre-seeded `token`/`appname` are ignored (first writer wins).
    ///
    /// **Returns**
    /// - `Err(HookError::Socket)` if the local socket could not be
    ///   opened or the endpoint could not be resolved. A connectionless
    ///   dial does not probe remote reachability, so this typically
    ///   only fails on local resource or configuration errors.
    pub fn new(token: &str, app_name: &str, extra: Fields) -> Result<Self, HookError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token, app_name, extra)
    }

    /// Same as [`UdpHook::new`] against an explicit `host:port`
    /// endpoint (self-hosted collectors, tests against loopback).
    pub fn with_endpoint(
        endpoint: &str,
        token: &str,
        app_name: &str,
        extra: Fields,
    ) -> Result<Self, HookError> {
        let mut fields = Fields::new();
        fields.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        fields.insert(APPNAME_KEY.to_string(), Value::String(app_name.to_string()));
        merge_missing(&mut fields, &extra);

        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(endpoint)?;

        Ok(UdpHook {
            socket,
            formatter: Box::new(JsonFormatter),
            fields,
        })
    }

    /// Replace the default [`JsonFormatter`].
    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    /// Merge additional static fields in after construction. Keys
    /// already present are kept unchanged.
    pub fn merge_fields(&mut self, extra: &Fields) {
        merge_missing(&mut self.fields, extra);
    }

    /// The static field set stamped onto every record.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl LogHook for UdpHook {
    // Always subscribed to everything; there is no selective-level
    // configuration on this hook.
    fn levels(&self) -> &[Severity] {
        &Severity::ALL
    }

    fn fire(&self, record: &mut LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        // Record fields win over static fields on collision.
        merge_missing(&mut record.fields, &self.fields);

        let payload = self.formatter.format(record).map_err(HookError::Format)?;

        let written = self.socket.send(&payload).map_err(HookError::Socket)?;
        if written != payload.len() {
            return Err(HookError::Truncated {
                written,
                len: payload.len(),
            }
            .into());
        }
        Ok(())
    }
}
