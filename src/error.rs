//! Error types for the profile-finder crate.

use std::path::PathBuf;

/// Profile-finder error types.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Profile directory file does not exist.
    #[error("profile directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A profile is missing a required field.
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// A profile with the same identifier code is already registered.
    #[error("duplicate profile code: {code}")]
    DuplicateCode { code: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for profile-finder operations.
pub type FinderResult<T> = Result<T, FinderError>;
