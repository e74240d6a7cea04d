//! Marker location and region splicing for splice
//!
//! Everything here is pure: functions take text and return new text, and
//! nothing touches storage. Markers are literal substrings; the first start
//! marker wins and the end marker is searched after it.
//!
//! ```
//! use splice_content::MarkerEdit;
//!
//! let edit = MarkerEdit::new("x", "x").unwrap().with_replacement("Y");
//! assert_eq!(edit.apply_to("AxBxC").unwrap().text, "AYxC");
//! ```

pub mod edit;
pub mod error;
pub mod locate;
pub mod marker;
pub mod splice;

pub use edit::{EditOutcome, MarkerEdit};
pub use error::{Error, Result};
pub use locate::{Region, find_marker, line_of, locate};
pub use marker::{Marker, MarkerRole};
pub use splice::{replaced_span, splice};
