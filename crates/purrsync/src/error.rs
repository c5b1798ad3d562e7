//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use purrsync_config::ConfigError;
use purrsync_core::{CoreError, StoreError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Remote ───────────────────────────────────────────────────────
    #[error("Could not reach the cat API: {reason}")]
    #[diagnostic(
        code(purrsync::connection_failed),
        help("Check your network connection and `api.base_url` in the config file.")
    )]
    ConnectionFailed { reason: String },

    #[error("The cat API rejected the request (HTTP {status})")]
    #[diagnostic(
        code(purrsync::auth_failed),
        help(
            "Verify your API key.\n\
             Set it with PURRSYNC_API_KEY or `api.api_key` in the config file."
        )
    )]
    AuthFailed { status: u16 },

    #[error("{message}")]
    #[diagnostic(code(purrsync::request_failed))]
    RequestFailed { message: String },

    // ── Local ────────────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(purrsync::store),
        help("Check that the favourites file is readable and writable, or pass --store.")
    )]
    Store(#[from] StoreError),

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(purrsync::config),
        help("Inspect the effective configuration with: purrsync config show")
    )]
    Config(#[from] ConfigError),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(purrsync::validation))]
    Validation { field: String, reason: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(purrsync::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport(failure) => CliError::ConnectionFailed {
                reason: failure.message,
            },
            CoreError::Remote {
                status: status @ (401 | 403),
                ..
            } => CliError::AuthFailed { status },
            err @ (CoreError::Remote { .. } | CoreError::InvalidPayload { .. }) => {
                CliError::RequestFailed {
                    message: err.to_string(),
                }
            }
            CoreError::Persistence(e) => CliError::Store(e),
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

impl From<purrsync_api::Error> for CliError {
    fn from(err: purrsync_api::Error) -> Self {
        CoreError::from(err).into()
    }
}
