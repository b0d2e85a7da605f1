//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading post records
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Malformed record {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Front-matter error: {0}")]
    FrontMatter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ContentError::MalformedRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
