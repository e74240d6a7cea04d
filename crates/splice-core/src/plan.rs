//! Edit plans: several marker edits described in one file.
//!
//! Format is detected from the file extension:
//! - `.toml` -> TOML
//! - `.json` -> JSON
//! - `.yaml`, `.yml` -> YAML
//!
//! ```toml
//! [[edit]]
//! path = "src/QuadrantModal.tsx"
//! start = "{/* Grups Cuina */}"
//! end = "{/* Responsable */}"
//! replacement_file = "blocks/cuina.tsx"
//! ```
//!
//! Relative paths resolve against the directory holding the plan.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use splice_content::MarkerEdit;
use splice_fs::Document;

use crate::request::EditRequest;
use crate::{Error, Result};

/// One entry as written in a plan file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanEntry {
    /// Document to edit
    pub path: PathBuf,
    /// Start marker literal
    pub start: String,
    /// End marker literal
    pub end: String,
    /// Inline replacement text
    #[serde(default)]
    pub replacement: Option<String>,
    /// File whose full text is the replacement
    #[serde(default)]
    pub replacement_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    #[serde(default, rename = "edit")]
    edits: Vec<PlanEntry>,
}

/// A validated, ready-to-run sequence of edit requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    requests: Vec<EditRequest>,
}

impl EditPlan {
    /// Load and validate a plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = Document::load(path)?;
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parsed: PlanFile = match extension.as_str() {
            "toml" => toml::from_str(content.text()).map_err(|e| Error::PlanParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(content.text()).map_err(|e| Error::PlanParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::from_str(content.text()).map_err(|e| Error::PlanParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            _ => return Err(Error::UnsupportedPlanFormat { extension }),
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let requests = parsed
            .edits
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_request(path, i + 1, base_dir))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(path = %path.display(), entries = requests.len(), "Loaded edit plan");
        Ok(Self { requests })
    }

    pub fn requests(&self) -> &[EditRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl PlanEntry {
    fn into_request(self, plan_path: &Path, index: usize, base_dir: &Path) -> Result<EditRequest> {
        let invalid = |message: &str| Error::PlanInvalid {
            path: plan_path.to_path_buf(),
            index,
            message: message.to_string(),
        };

        let replacement = match (self.replacement, self.replacement_file) {
            (Some(text), None) => text,
            (None, Some(file)) => Document::load(base_dir.join(file))?.text().to_string(),
            (Some(_), Some(_)) => {
                return Err(invalid("set only one of `replacement` and `replacement_file`"));
            }
            (None, None) => return Err(invalid("missing `replacement` or `replacement_file`")),
        };

        let edit = MarkerEdit::new(self.start, self.end)
            .map_err(|e| invalid(&e.to_string()))?
            .with_replacement(replacement);
        Ok(EditRequest::from_edit(base_dir.join(&self.path), edit))
    }
}
