//! Error types for splice-content

use crate::marker::MarkerRole;

/// Result type for splice-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a region could not be located or spliced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("The {role} marker must not be empty")]
    EmptyMarker { role: MarkerRole },

    #[error("The {role} marker {marker:?} was not found (searched from byte {searched_from})")]
    MarkerNotFound {
        role: MarkerRole,
        marker: String,
        searched_from: usize,
    },

    #[error("End offset {end} precedes start offset {start}")]
    InvalidMarkerOrder { start: usize, end: usize },

    #[error("Region {start}..{end} does not fit a text of {len} bytes")]
    RegionOutOfBounds { start: usize, end: usize, len: usize },
}

impl Error {
    /// Short, stable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyMarker { .. } => "EmptyMarker",
            Self::MarkerNotFound { .. } => "MarkerNotFound",
            Self::InvalidMarkerOrder { .. } | Self::RegionOutOfBounds { .. } => "InvalidMarkerOrder",
        }
    }
}
