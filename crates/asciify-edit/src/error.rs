//! Error types for the sweep.
//!
//! Library crates use `thiserror` for explicit error enums.

use asciify_io::IoError;
use thiserror::Error;

/// Hard failures of a directory sweep.
///
/// Skippable read failures (binary, undecodable, unreadable files) never
/// surface here; they resolve to [`FileOutcome::Skipped`](crate::FileOutcome).
#[derive(Error, Debug)]
pub enum SweepError {
    /// Non-skippable read failure.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Writing the transformed content back failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path of the file being rewritten.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
