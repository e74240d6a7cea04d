//! CLI argument parsing using clap derive

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use splice_core::EditOptions;
use splice_fs::RobustnessConfig;

/// Splice - Replace the text between two markers in a file
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace the region between two markers in one file
    ///
    /// The region starts at the first START marker and runs up to, but not
    /// including, the first END marker after it. The start marker is
    /// replaced along with the region, so repeat it at the head of the
    /// replacement to keep the edit re-runnable.
    ///
    /// Examples:
    ///   splice apply src/Modal.tsx --start '{/* Cuina */}' --end '{/* Footer */}' --with-file block.tsx
    ///   cat block.tsx | splice apply src/Modal.tsx --start '{/* Cuina */}' --end '{/* Footer */}'
    Apply {
        /// File to edit
        path: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Replacement text
        #[arg(
            long = "with",
            value_name = "TEXT",
            conflicts_with = "with_file",
            allow_hyphen_values = true
        )]
        with: Option<String>,

        /// Read the replacement text from a file (stdin if neither is given)
        #[arg(long, value_name = "FILE")]
        with_file: Option<PathBuf>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Apply every edit listed in a TOML, JSON or YAML plan file
    Plan {
        /// Plan file
        file: PathBuf,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Show where the region between two markers is, without editing
    Locate {
        /// File to inspect
        path: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// The marker pair delimiting a region
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MarkerArgs {
    /// Literal text where the region begins
    #[arg(short, long, value_name = "START")]
    pub start: String,

    /// Literal text where the region ends (kept in the output)
    #[arg(short, long, value_name = "END")]
    pub end: String,
}

/// Flags shared by commands that write
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct WriteArgs {
    /// Preview the edit without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Commit even if the file changed since it was read
    #[arg(long)]
    pub no_verify: bool,

    /// Milliseconds to wait for the file lock
    #[arg(long, value_name = "MS", default_value_t = 5000, env = "SPLICE_LOCK_TIMEOUT_MS")]
    pub lock_timeout_ms: u64,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

impl WriteArgs {
    pub fn options(&self) -> EditOptions {
        EditOptions {
            dry_run: self.dry_run,
            verify_unchanged: !self.no_verify,
            robustness: RobustnessConfig {
                lock_timeout: Duration::from_millis(self.lock_timeout_ms),
                ..RobustnessConfig::default()
            },
        }
    }
}
