//! Apply command implementation
//!
//! Replaces one marker-delimited region in one file.

use std::io::{IsTerminal, Read};
use std::path::Path;

use colored::Colorize;
use splice_core::{EditReport, EditRequest, Editor};
use splice_fs::{Document, TextEncoding};

use crate::cli::{MarkerArgs, WriteArgs};
use crate::error::{CliError, Result};

/// Run the apply command
pub fn run_apply(
    path: &Path,
    markers: &MarkerArgs,
    with: Option<&str>,
    with_file: Option<&Path>,
    write: &WriteArgs,
) -> Result<()> {
    let replacement = read_replacement(with, with_file)?;
    let request = EditRequest::new(path, markers.start.as_str(), markers.end.as_str())?
        .with_replacement(replacement);

    let report = Editor::new(write.options()).apply(&request)?;

    if write.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Resolve the replacement from `--with`, `--with-file`, or stdin.
fn read_replacement(with: Option<&str>, with_file: Option<&Path>) -> Result<String> {
    if let Some(text) = with {
        return Ok(text.to_string());
    }
    if let Some(file) = with_file {
        return Ok(Document::load(file)?.text().to_string());
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::user(
            "No replacement given: pass --with, --with-file, or pipe text on stdin",
        ));
    }
    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    // Same decoding as --with-file, so bad input is an encoding error
    let text = TextEncoding::detect(&bytes).decode(Path::new("<stdin>"), &bytes)?;
    Ok(text)
}

/// Print a one-line human-readable summary of an edit
pub(crate) fn print_report(report: &EditReport) {
    let location = report.location.display().to_string();
    let span = format!(
        "lines {}-{}, bytes {}..{}",
        report.start_line,
        report.end_line,
        report.region.start(),
        report.region.end()
    );

    if report.dry_run {
        println!(
            "{} {} ({}) {} -> {} bytes",
            "Would edit".yellow().bold(),
            location.cyan(),
            span,
            report.original_len,
            report.new_len
        );
    } else if !report.changed {
        println!(
            "{} {} ({}) already up to date",
            "OK".green().bold(),
            location.cyan(),
            span
        );
    } else {
        println!(
            "{} {} ({}) {} bytes written",
            "Edited".green().bold(),
            location.cyan(),
            span,
            report.bytes_written.unwrap_or_default()
        );
    }
}
