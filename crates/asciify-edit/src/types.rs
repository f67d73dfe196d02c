//! Core types for the replacement pipeline.
//!
//! Defines the data structures used throughout the sweep.

use serde::Serialize;

/// Result of running the transform pipeline over one document.
///
/// Contains the transformed content and metadata about the changes made.
#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    /// Content after all replacement steps.
    pub modified: String,
    /// Whether the content differs from the input.
    pub changed: bool,
    /// Per-line change records (positional diff against the input).
    pub changes: Vec<LineChange>,
    /// Unified diff showing changes.
    pub diff: String,
}

/// One changed line, recorded after the full pipeline has run.
#[derive(Debug, Clone, Serialize)]
pub struct LineChange {
    /// Line number (1-indexed).
    pub line: usize,
    /// Resulting line content.
    pub content: String,
}

/// Outcome of processing a single file.
#[derive(Debug)]
pub enum FileOutcome {
    /// File could not be read as text (binary, undecodable, unreadable);
    /// left alone, still counted as scanned.
    Skipped,
    /// File contained none of the targeted characters; not rewritten.
    Clean,
    /// File had replacements (written back unless dry-run).
    Fixed(FileReport),
}

/// Changes made (or pending, in dry-run) for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the fixed file. [`AsciiSweeper::sweep`](crate::AsciiSweeper)
    /// records it relative to the sweep root; a direct
    /// [`fix_file`](crate::AsciiSweeper::fix_file) call records the path as
    /// given.
    pub path: String,
    /// Per-line change records.
    pub changes: Vec<LineChange>,
    /// Unified diff preview.
    pub diff: String,
}

/// Configuration for a directory sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// File extensions to process (without the dot).
    pub extensions: Vec<String>,
    /// Directory names pruned anywhere in the tree.
    pub skip_dirs: Vec<String>,
    /// Whether to preview only (true) or write changes back (false).
    pub dry_run: bool,
    /// Maximum file size in bytes (default 1MB).
    pub max_file_size: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["ts".to_string(), "tsx".to_string(), "ps1".to_string()],
            skip_dirs: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "dist".to_string(),
                ".netlify".to_string(),
                ".next".to_string(),
            ],
            dry_run: true, // Default to preview for safety
            max_file_size: 1_048_576,
        }
    }
}

/// Statistics for a directory sweep.
#[derive(Debug, Default, Serialize)]
pub struct SweepStats {
    /// Number of files matching the extension filter.
    pub files_scanned: usize,
    /// Number of files with replacements.
    pub files_fixed: usize,
    /// Reports for the fixed files, in traversal order.
    pub reports: Vec<FileReport>,
}
