//! CLI error types and exit codes.

use adview_core::AdViewError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or other local errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Remote failure - the remote source rejected or failed a request
    pub const REMOTE_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content store error
    #[error("Store error: {0}")]
    Store(String),

    /// Drag session error
    #[error("Resize error: {0}")]
    Resize(String),

    /// Remote source error
    #[error("Remote error: {0}")]
    Remote(String),

    /// Preset not found
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    /// Invalid argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AdViewError> for CliError {
    fn from(err: AdViewError) -> Self {
        match err {
            AdViewError::Config(e) => Self::Config(e.to_string()),
            AdViewError::Store(e) => Self::Store(e.to_string()),
            AdViewError::Resize(e) => Self::Resize(e.to_string()),
            AdViewError::Remote(e) => Self::Remote(e.to_string()),
            AdViewError::Io(e) => Self::Io(e),
        }
    }
}

impl From<adview_core::ResizeError> for CliError {
    fn from(err: adview_core::ResizeError) -> Self {
        Self::Resize(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, store, resize, arguments, IO)
    /// - 2: Remote failure
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Remote(_) => exit_codes::REMOTE_FAILURE,
            Self::Config(_)
            | Self::Store(_)
            | Self::Resize(_)
            | Self::PresetNotFound(_)
            | Self::InvalidArgument(_)
            | Self::Json(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
