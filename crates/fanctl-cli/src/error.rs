//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use fanctl_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No controller address configured")]
    #[diagnostic(
        code(fanctl::no_controller),
        help(
            "Set the CONTROLLER_IP environment variable or pass --controller <ADDRESS>.\n\
             Example: CONTROLLER_IP=192.168.1.50 fanctl"
        )
    )]
    NoController,

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(fanctl::config))]
    Config { message: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(fanctl::connection_failed),
        help("Check that the controller gateway is running and reachable.\n{reason}")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller request timed out")]
    #[diagnostic(
        code(fanctl::timeout),
        help("Increase the timeout with --timeout or check gateway responsiveness.")
    )]
    Timeout,

    // ── Gateway ──────────────────────────────────────────────────────
    #[error("Gateway error: {message}")]
    #[diagnostic(code(fanctl::gateway))]
    Gateway { message: String },

    // ── Prompts ──────────────────────────────────────────────────────
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(fanctl::prompt))]
    Prompt { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    #[diagnostic(code(fanctl::internal))]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoController | Self::Config { .. } => exit_code::USAGE,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::Timeout => CliError::Timeout,
            CoreError::Gateway { message } => CliError::Gateway { message },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
