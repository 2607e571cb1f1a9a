//! Error types for the evidence pipeline
//!
//! Only conditions that abort a whole run are errors. A manifest entry that
//! cannot be read is recorded as an outcome, not raised.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, EvidenceError>;

/// Fatal pipeline errors.
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// The manifest file does not exist
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// The manifest exists but has no marker line introducing the path list
    #[error("manifest {} has no `{marker}` marker line", path.display())]
    ManifestFormat { path: PathBuf, marker: String },

    /// The signal vocabulary does not compile
    #[error("invalid signal pattern `{pattern}`: {source}")]
    InvalidSignalPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Any other I/O failure on the manifest or the report target
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EvidenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EvidenceError::Io {
            path: path.into(),
            source,
        }
    }
}
