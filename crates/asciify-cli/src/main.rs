//! asciify CLI: sweep a directory tree and replace non-ASCII characters
//! with ASCII-safe equivalents.
//!
//! Logging: set `RUST_LOG=asciify_edit=debug` (or `info`, `warn`) to see
//! sweep logs on stderr; stdout carries only the report.

mod cli;
mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use asciify_edit::{AsciiSweeper, SweepConfig};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "asciify_edit=debug,asciify_cli=debug"
        } else {
            "asciify_edit=info,asciify_cli=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(root) = cli.root else {
        eprintln!("Usage: asciify [--dry-run] <root_directory>");
        eprintln!("  --dry-run  Show what would change without modifying files");
        std::process::exit(1);
    };

    if !root.is_dir() {
        eprintln!("Error: {} is not a directory", root.display());
        std::process::exit(1);
    }

    let config = SweepConfig {
        dry_run: cli.dry_run,
        ..Default::default()
    };

    let stats = AsciiSweeper::sweep(&root, &config)?;
    tracing::debug!(
        files_scanned = stats.files_scanned,
        files_fixed = stats.files_fixed,
        "sweep complete"
    );
    print!("{}", report::render(&root, &stats, cli.dry_run, cli.verbose));

    Ok(())
}
