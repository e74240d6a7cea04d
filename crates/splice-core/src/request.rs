//! Parameters for a single document edit

use std::path::{Path, PathBuf};

use splice_content::MarkerEdit;
use splice_fs::RobustnessConfig;

use crate::Result;

/// One region replacement against one stored document.
///
/// ```
/// use splice_core::EditRequest;
///
/// let request = EditRequest::new("src/modal.tsx", "{/* Grups Cuina */}", "{/* Responsable */}")
///     .unwrap()
///     .with_replacement("{/* Grups Cuina */}\n<NewBlock />\n");
/// assert_eq!(request.edit().start_marker().as_str(), "{/* Grups Cuina */}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    location: PathBuf,
    edit: MarkerEdit,
}

impl EditRequest {
    /// Create a request with an empty replacement.
    ///
    /// # Errors
    ///
    /// Fails if either marker is empty.
    pub fn new(
        location: impl Into<PathBuf>,
        start_marker: impl Into<String>,
        end_marker: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            location: location.into(),
            edit: MarkerEdit::new(start_marker, end_marker)?,
        })
    }

    /// Wrap an already-built edit.
    pub fn from_edit(location: impl Into<PathBuf>, edit: MarkerEdit) -> Self {
        Self {
            location: location.into(),
            edit,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.edit = self.edit.with_replacement(replacement);
        self
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn edit(&self) -> &MarkerEdit {
        &self.edit
    }
}

/// How the pipeline treats the document after splicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOptions {
    /// Stop after splicing; never write
    pub dry_run: bool,
    /// Refuse to commit if the document changed since it was read
    pub verify_unchanged: bool,
    pub robustness: RobustnessConfig,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            verify_unchanged: true,
            robustness: RobustnessConfig::default(),
        }
    }
}

impl EditOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }
}
