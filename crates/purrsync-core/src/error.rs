// ── Core error types ──
//
// User-facing errors from purrsync-core. The `From<purrsync_api::Error>`
// impls translate transport-layer failures into domain variants so
// consumers never handle reqwest errors directly.

use thiserror::Error;

/// The remote could not be reached, or no response could be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Network error: {message}")]
pub struct TransportFailure {
    pub message: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<purrsync_api::Error> for TransportFailure {
    fn from(err: purrsync_api::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_owned()
        } else if err.is_connect() {
            format!("cannot connect to server: {err}")
        } else {
            err.to_string()
        };
        Self { message }
    }
}

/// Failure of a local favourite store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Favourite store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Favourite store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Favourite store unavailable: {0}")]
    Unavailable(String),
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote errors ────────────────────────────────────────────────
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error("Request failed (HTTP {status}){}", reason_suffix(.message))]
    Remote {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response: {message}")]
    InvalidPayload { message: String },

    // ── Local errors ─────────────────────────────────────────────────
    #[error(transparent)]
    Persistence(#[from] StoreError),

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<purrsync_api::Error> for CoreError {
    fn from(err: purrsync_api::Error) -> Self {
        match err {
            purrsync_api::Error::InvalidApiKey { message } => CoreError::Config { message },
            purrsync_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            other => CoreError::Transport(TransportFailure::from(other)),
        }
    }
}

#[allow(clippy::ref_option)]
fn reason_suffix(message: &Option<String>) -> String {
    match message.as_deref().map(str::trim) {
        Some(msg) if !msg.is_empty() => format!(": {msg}"),
        _ => String::new(),
    }
}
