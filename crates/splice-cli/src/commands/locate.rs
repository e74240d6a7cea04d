//! Locate command implementation

use std::path::Path;

use colored::Colorize;
use splice_core::{EditRequest, Editor};

use crate::cli::MarkerArgs;
use crate::error::Result;

/// Run the locate command
///
/// Reports the region's offsets and lines, and prints its current text.
pub fn run_locate(path: &Path, markers: &MarkerArgs, json: bool) -> Result<()> {
    let request = EditRequest::new(path, markers.start.as_str(), markers.end.as_str())?;
    let located = Editor::default().locate(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&located)?);
        return Ok(());
    }

    println!(
        "{} {} lines {}-{}, bytes {}..{}",
        "Region".blue().bold(),
        located.location.display().to_string().cyan(),
        located.start_line,
        located.end_line,
        located.region.start(),
        located.region.end()
    );
    print!("{}", located.current);
    if !located.current.ends_with('\n') {
        println!();
    }
    Ok(())
}
