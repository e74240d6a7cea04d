//! Error types for splice-core

use std::path::PathBuf;

/// Result type for splice-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an edit or an edit plan
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Locating or splicing failed for the document at `path`
    #[error("{path}: {source}")]
    Content {
        path: PathBuf,
        #[source]
        source: splice_content::Error,
    },

    /// Edit parameters were rejected before touching any document
    #[error(transparent)]
    Request(#[from] splice_content::Error),

    /// Reading or committing the document failed
    #[error(transparent)]
    Fs(#[from] splice_fs::Error),

    /// Plan file could not be deserialized
    #[error("Failed to parse {format} plan at {path}: {message}")]
    PlanParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Plan file extension is not one of toml, json, yaml, yml
    #[error("Unsupported plan format: {extension:?}")]
    UnsupportedPlanFormat { extension: String },

    /// A plan entry is structurally valid but unusable
    #[error("Plan entry #{index} in {path} is invalid: {message}")]
    PlanInvalid {
        path: PathBuf,
        index: usize,
        message: String,
    },

    /// A plan entry failed; entries before it were committed
    #[error("Plan entry #{index} failed: {source}")]
    PlanStep {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn content(path: impl Into<PathBuf>, source: splice_content::Error) -> Self {
        Self::Content {
            path: path.into(),
            source,
        }
    }

    /// Short, stable name of the failure class for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Content { source, .. } | Self::Request(source) => source.kind(),
            Self::Fs(source) => source.kind(),
            Self::PlanParse { .. } | Self::UnsupportedPlanFormat { .. } | Self::PlanInvalid { .. } => {
                "InvalidPlan"
            }
            Self::PlanStep { source, .. } => source.kind(),
        }
    }
}
