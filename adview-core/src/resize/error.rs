//! Error types for divider drag operations.

use super::engine::Divider;

/// Errors that can occur while driving a drag session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    /// A drag session is already running.
    #[error("a drag session is already active on the {0} divider")]
    SessionActive(Divider),

    /// A move or end event arrived without a running session.
    #[error("no drag session is active")]
    NoActiveSession,

    /// User resizing is turned off by configuration.
    #[error("resizing is disabled by configuration")]
    ResizeDisabled,
}

/// Result type for drag session operations
pub type ResizeResult<T> = Result<T, ResizeError>;
