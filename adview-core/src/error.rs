//! Error types for `AdView`
//!
//! Each subsystem has its own error enum; [`AdViewError`] aggregates them
//! for callers that cross subsystem boundaries.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::resize::{ResizeError, ResizeResult};

/// Errors raised while reading or validating an ad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for the expected schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A section has an unknown content type tag
    #[error("unknown content type '{kind}' in {region} section")]
    UnknownContentType {
        /// Section that carried the tag
        region: String,
        /// The tag as written
        kind: String,
    },

    /// The configuration parsed but violates a constraint
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's lock was poisoned by a panicking writer
    #[error("content store lock poisoned")]
    LockPoisoned,

    /// Weights must be finite and strictly positive
    #[error("rejected weights: {0}")]
    InvalidWeights(String),

    /// The store refused the update for another reason
    #[error("update rejected: {0}")]
    Rejected(String),
}

/// Result type for content store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a remote ad source
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The campaign identifier was empty or malformed
    #[error("invalid campaign id: '{0}'")]
    InvalidCampaign(String),

    /// The source could not deliver a response
    #[error("remote source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for remote source operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Top-level error type for `AdView`
#[derive(Debug, Error)]
pub enum AdViewError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Content store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Drag session error
    #[error(transparent)]
    Resize(#[from] ResizeError),

    /// Remote source error
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cross-subsystem operations
pub type AdViewResult<T> = Result<T, AdViewError>;
