//! Marker edits: locate a region and splice replacement text into it.

use serde::Serialize;

use crate::locate::{Region, locate};
use crate::marker::Marker;
use crate::splice::{replaced_span, splice};
use crate::Result;

/// A reusable, parameterised region replacement.
///
/// The same edit can be applied to any number of texts. When the replacement
/// begins with a copy of the start marker (and does not itself contain the
/// end marker) re-applying the edit to its own output is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerEdit {
    start: Marker,
    end: Marker,
    replacement: String,
}

/// The in-memory result of applying a [`MarkerEdit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    /// Full text after the splice
    pub text: String,
    /// Region that was replaced, in offsets of the original text
    pub region: Region,
    /// Text the replacement displaced
    pub replaced: String,
    /// False when the replacement equals the displaced text
    pub changed: bool,
}

impl MarkerEdit {
    /// Create an edit with an empty replacement.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMarker`](crate::Error::EmptyMarker) if either marker is
    /// the empty string.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        Ok(Self {
            start: Marker::start(start)?,
            end: Marker::end(end)?,
            replacement: String::new(),
        })
    }

    /// Set the text inserted in place of the region.
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    pub fn start_marker(&self) -> &Marker {
        &self.start
    }

    pub fn end_marker(&self) -> &Marker {
        &self.end
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Locate the region this edit targets without changing anything.
    pub fn locate(&self, text: &str) -> Result<Region> {
        locate(text, &self.start, &self.end)
    }

    /// Apply the edit to `text`.
    ///
    /// `text` itself is never modified; on error nothing is produced.
    pub fn apply_to(&self, text: &str) -> Result<EditOutcome> {
        let region = self.locate(text)?;
        region.validate(text)?;

        let replaced = replaced_span(text, region);
        let changed = replaced != self.replacement;
        let new_text = splice(text, region, &self.replacement);

        tracing::debug!(
            start = region.start(),
            end = region.end(),
            removed = region.len(),
            inserted = self.replacement.len(),
            changed,
            "Spliced region"
        );

        Ok(EditOutcome {
            replaced: replaced.to_string(),
            text: new_text,
            region,
            changed,
        })
    }
}
