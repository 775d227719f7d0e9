//! Error types for the sanitizer.

use std::path::PathBuf;

/// Sanitizer errors.
///
/// Per-file variants leave the file on disk untouched, except [`SanitizeError::Write`],
/// which can leave a partially written file behind.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    /// The file could not be read (missing, unreadable, not UTF-8).
    #[error("read failed: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("invalid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The document root is a JSON value other than an object.
    #[error("expected a JSON object at the document root, found {found}")]
    NotAnObject { found: &'static str },

    /// The normalized document could not be rendered.
    #[error("render failed: {message}")]
    Render { message: String },

    /// Writing the normalized document back failed.
    #[error("write failed: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// The root directory of a run does not exist or is not a directory.
    #[error("root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// Traversal of the root directory itself failed.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl From<serde_json::Error> for SanitizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SanitizeError>;
