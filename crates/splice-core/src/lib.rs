//! Edit pipeline for splice
//!
//! Composes document persistence ([`splice_fs`]) with marker location and
//! splicing ([`splice_content`]) into one stateless operation, and runs
//! sequences of such operations from plan files.

pub mod editor;
pub mod error;
pub mod plan;
pub mod report;
pub mod request;
pub mod stage;

pub use editor::Editor;
pub use error::{Error, Result};
pub use plan::{EditPlan, PlanEntry};
pub use report::{EditReport, LocateReport, PlanReport};
pub use request::{EditOptions, EditRequest};
pub use stage::Stage;
