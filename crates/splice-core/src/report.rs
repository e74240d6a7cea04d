//! Reports returned by the edit pipeline

use std::path::PathBuf;

use serde::Serialize;
use splice_content::Region;

use crate::stage::Stage;

/// Outcome of a successful edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    /// Document that was edited
    pub location: PathBuf,
    /// Encoding the document was read and written in
    pub encoding: String,
    /// Replaced region, in byte offsets of the original text
    pub region: Region,
    /// 1-based line of the start marker
    pub start_line: usize,
    /// 1-based line of the end marker
    pub end_line: usize,
    /// Length of the original text in bytes
    pub original_len: usize,
    /// Length of the new text in bytes
    pub new_len: usize,
    /// Bytes committed to storage, `None` for dry runs
    pub bytes_written: Option<usize>,
    /// False when the replacement equalled the displaced text
    pub changed: bool,
    pub dry_run: bool,
    /// `Persisted`, or `Spliced` for dry runs
    pub stage: Stage,
}

/// Where an edit's region sits, without editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateReport {
    pub location: PathBuf,
    pub region: Region,
    pub start_line: usize,
    pub end_line: usize,
    /// Text currently inside the region (start marker included)
    pub current: String,
}

/// Outcome of a fully applied plan, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub edits: Vec<EditReport>,
}

impl PlanReport {
    /// Number of entries that changed their document.
    pub fn changed(&self) -> usize {
        self.edits.iter().filter(|r| r.changed).count()
    }
}
