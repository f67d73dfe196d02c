//! Command line definition.

use std::path::PathBuf;

use clap::Parser;

/// `asciify [--dry-run] <root_directory>`
///
/// The root argument stays optional at the clap level so the missing-argument
/// case can exit with code 1 (clap's own error path exits with 2).
#[derive(Parser)]
#[command(name = "asciify")]
#[command(about = "Replace non-ASCII characters in source files with ASCII-safe equivalents.")]
pub(crate) struct Cli {
    /// Directory tree to sweep.
    pub(crate) root: Option<PathBuf>,

    /// Show what would change without modifying files.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Verbose output: include unified diffs (also enables debug-level tracing).
    #[arg(long, short = 'v')]
    pub(crate) verbose: bool,
}
