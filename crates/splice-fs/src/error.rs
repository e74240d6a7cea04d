//! Error types for splice-fs

use std::path::PathBuf;

use crate::encoding::TextEncoding;

/// Result type for splice-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or committing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource unavailable at {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {path} as {encoding}: {message}")]
    EncodingMismatch {
        path: PathBuf,
        encoding: TextEncoding,
        message: String,
    },

    #[error("{path} was modified since it was read (expected {expected}, found {actual})")]
    ConcurrentModification {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Short, stable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable { .. } => "ResourceUnavailable",
            Self::EncodingMismatch { .. } => "EncodingMismatch",
            Self::ConcurrentModification { .. } => "ConcurrentModification",
            Self::LockFailed { .. } => "LockFailed",
        }
    }

    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(
        path: impl Into<PathBuf>,
        encoding: TextEncoding,
        message: impl Into<String>,
    ) -> Self {
        Self::EncodingMismatch {
            path: path.into(),
            encoding,
            message: message.into(),
        }
    }
}
