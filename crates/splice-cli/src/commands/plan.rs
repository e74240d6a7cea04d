//! Plan command implementation
//!
//! Applies every edit in a plan file, in order, stopping at the first failure.

use std::path::Path;

use colored::Colorize;
use splice_core::{EditPlan, Editor};

use super::apply::print_report;
use crate::cli::WriteArgs;
use crate::error::Result;

/// Run the plan command
pub fn run_plan(file: &Path, write: &WriteArgs) -> Result<()> {
    let plan = EditPlan::load(file)?;
    let report = Editor::new(write.options()).apply_plan(&plan)?;

    if write.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.edits.is_empty() {
        println!("{} Plan {} has no edits.", "OK".green().bold(), file.display());
        return Ok(());
    }

    for edit in &report.edits {
        print_report(edit);
    }
    println!();
    println!(
        "{} {} of {} edits changed a document",
        "Done".green().bold(),
        report.changed(),
        report.edits.len()
    );
    Ok(())
}
