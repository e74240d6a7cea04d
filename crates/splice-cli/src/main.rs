//! Splice CLI
//!
//! Replaces the text between two markers in a file, or runs a plan of such
//! edits. Exits 0 on success and 1 on any failure, with the failure class
//! and message on stderr.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = execute_command(cli.command) {
        eprintln!("{}[{}]: {}", "error".red().bold(), e.kind(), e);
        std::process::exit(1);
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply {
            path,
            markers,
            with,
            with_file,
            write,
        } => commands::run_apply(
            &path,
            &markers,
            with.as_deref(),
            with_file.as_deref(),
            &write,
        ),
        Commands::Plan { file, write } => commands::run_plan(&file, &write),
        Commands::Locate {
            path,
            markers,
            json,
        } => commands::run_locate(&path, &markers, json),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
