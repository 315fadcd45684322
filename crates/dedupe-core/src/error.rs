//! Error types for `dedupe-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. The filter controller and
//! the size formatting helpers have no failure mode and never produce one.

use std::path::PathBuf;

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A form value could not be turned into a filter edit.
    #[error("invalid value for {field}: {value:?}")]
    InvalidInput {
        /// The form field the value was entered into.
        field: &'static str,
        /// The raw text as typed.
        value: String,
    },

    /// The storage service could not be reached or answered with an error status.
    #[error("service request failed: {0}")]
    Http(String),

    /// The storage service answered with a body that does not match the expected shape.
    #[error("unexpected service response: {0}")]
    Decode(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CoreError::Decode(e.to_string())
        } else {
            CoreError::Http(e.to_string())
        }
    }
}

/// Convenience alias used throughout `dedupe-core`.
pub type CoreResult<T> = Result<T, CoreError>;
