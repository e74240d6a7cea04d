//! Region location between a start and an end marker.
//!
//! The first occurrence of the start marker wins. The end marker is searched
//! strictly after the start marker's last byte, so the two never overlap even
//! when they are the same literal.

use std::ops::Range;

use serde::Serialize;

use crate::marker::Marker;
use crate::{Error, Result};

/// Byte offsets of a located region.
///
/// `start` is where the start marker begins and `end` is where the end
/// marker begins. Text in `start..end` is displaced by a splice; the end
/// marker and everything after it is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    start: usize,
    end: usize,
}

impl Region {
    /// Build a region from raw offsets, refusing inverted ones.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidMarkerOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the end marker begins where the start marker does, making
    /// a splice a pure insertion.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check that the region can be cut out of `text`.
    ///
    /// Both offsets must lie inside the text, in order, on `char` boundaries.
    pub fn validate(&self, text: &str) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvalidMarkerOrder {
                start: self.start,
                end: self.end,
            });
        }
        let fits = self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end);
        if fits {
            Ok(())
        } else {
            Err(Error::RegionOutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            })
        }
    }
}

/// Find the first occurrence of `marker` at or after byte `from`.
pub fn find_marker(text: &str, marker: &Marker, from: usize) -> Result<usize> {
    text.get(from..)
        .and_then(|rest| rest.find(marker.as_str()))
        .map(|pos| from + pos)
        .ok_or_else(|| Error::MarkerNotFound {
            role: marker.role(),
            marker: marker.as_str().to_string(),
            searched_from: from,
        })
}

/// Locate the region delimited by `start` and `end` in `text`.
///
/// # Errors
///
/// [`Error::MarkerNotFound`] when the start marker is absent, or when no end
/// marker follows it. An end marker that only appears before the start
/// marker does not count.
pub fn locate(text: &str, start: &Marker, end: &Marker) -> Result<Region> {
    let s = find_marker(text, start, 0)?;
    let e = find_marker(text, end, s + start.len())?;

    tracing::trace!(start = s, end = e, "Located region");
    Region::new(s, e)
}

/// 1-based line number containing byte `offset`.
pub fn line_of(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
