//! Error types for draftindex.
//!
//! Library crates use [`DraftIndexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all draftindex operations.
#[derive(Debug, thiserror::Error)]
pub enum DraftIndexError {
    /// The target year directory is missing or is not a directory.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A single document could not be read or decoded.
    #[error("failed to read {}: {reason}", path.display())]
    FileRead { path: PathBuf, reason: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The index listing could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DraftIndexError>;

impl DraftIndexError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Report a missing or non-directory target.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Record a per-file read failure.
    pub fn file_read(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is the missing-target condition (exit status 2).
    pub fn is_directory_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound { .. })
    }
}
