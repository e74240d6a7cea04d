//! The read → locate → splice → write pipeline.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use splice_content::{line_of, replaced_span};
use splice_fs::Document;
use tracing::{debug, info, warn};

use crate::plan::EditPlan;
use crate::report::{EditReport, LocateReport, PlanReport};
use crate::request::{EditOptions, EditRequest};
use crate::stage::Stage;
use crate::{Error, Result};

/// Spliced text of documents a dry run has already edited, by location.
type Staged = HashMap<PathBuf, String>;

/// Applies [`EditRequest`]s to stored documents.
///
/// Each call is independent: the document is read once, edited in memory
/// and written back once. Any failure leaves the stored document exactly as
/// it was.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    options: EditOptions,
}

impl Editor {
    pub fn new(options: EditOptions) -> Self {
        Self { options }
    }

    /// Run one edit to completion.
    pub fn apply(&self, request: &EditRequest) -> Result<EditReport> {
        self.apply_staged(request, &mut Staged::new())
    }

    fn apply_staged(&self, request: &EditRequest, staged: &mut Staged) -> Result<EditReport> {
        let path = request.location();
        let mut stage = Stage::Unstarted;
        let result = self.run(request, &mut stage, staged);

        if let Err(e) = &result {
            warn!(
                path = %path.display(),
                reached = %stage,
                kind = e.kind(),
                "Edit failed, document left untouched"
            );
            advance(&mut stage, Stage::Failed, path);
        }
        result
    }

    fn run(
        &self,
        request: &EditRequest,
        stage: &mut Stage,
        staged: &mut Staged,
    ) -> Result<EditReport> {
        let path = request.location();

        let document = Document::load(path)?;
        advance(stage, Stage::Loaded, path);

        // A dry-run plan edits the text earlier entries would have written
        let text = staged.get(path).map_or(document.text(), String::as_str);
        let outcome = request
            .edit()
            .apply_to(text)
            .map_err(|e| Error::content(path, e))?;
        let region = outcome.region;
        advance(stage, Stage::Located, path);
        advance(stage, Stage::Spliced, path);

        let start_line = line_of(text, region.start());
        let end_line = line_of(text, region.end());
        let original_len = text.len();

        let bytes_written = if self.options.dry_run {
            None
        } else {
            let written = document.commit(
                &outcome.text,
                self.options.verify_unchanged,
                self.options.robustness,
            )?;
            advance(stage, Stage::Persisted, path);
            Some(written)
        };

        info!(
            path = %path.display(),
            start = region.start(),
            end = region.end(),
            changed = outcome.changed,
            dry_run = self.options.dry_run,
            "Edit applied"
        );

        let new_len = outcome.text.len();
        if self.options.dry_run {
            staged.insert(path.to_path_buf(), outcome.text);
        }

        Ok(EditReport {
            location: path.to_path_buf(),
            encoding: document.encoding().to_string(),
            region,
            start_line,
            end_line,
            original_len,
            new_len,
            bytes_written,
            changed: outcome.changed,
            dry_run: self.options.dry_run,
            stage: *stage,
        })
    }

    /// Report where a request's region is without editing anything.
    pub fn locate(&self, request: &EditRequest) -> Result<LocateReport> {
        let path = request.location();
        let document = Document::load(path)?;
        let text = document.text();
        let region = request
            .edit()
            .locate(text)
            .map_err(|e| Error::content(path, e))?;

        Ok(LocateReport {
            location: path.to_path_buf(),
            region,
            start_line: line_of(text, region.start()),
            end_line: line_of(text, region.end()),
            current: replaced_span(text, region).to_string(),
        })
    }

    /// Apply every entry of a plan in order.
    ///
    /// Stops at the first failing entry. Entries are committed one by one, so
    /// those before the failure stay applied. In a dry run nothing is
    /// written, but each entry sees the output of the entries before it on
    /// the same document.
    pub fn apply_plan(&self, plan: &EditPlan) -> Result<PlanReport> {
        let mut report = PlanReport::default();
        let mut staged = Staged::new();
        for (index, request) in plan.requests().iter().enumerate() {
            let edit = self
                .apply_staged(request, &mut staged)
                .map_err(|e| Error::PlanStep {
                    index: index + 1,
                    source: Box::new(e),
                })?;
            report.edits.push(edit);
        }
        debug!(entries = report.edits.len(), changed = report.changed(), "Plan applied");
        Ok(report)
    }
}

fn advance(stage: &mut Stage, to: Stage, path: &Path) {
    debug_assert!(!stage.is_terminal());
    debug_assert!(to == Stage::Failed || stage.next() == Some(to));
    debug!(path = %path.display(), from = %stage, to = %to, "Stage transition");
    *stage = to;
}
