#![allow(clippy::doc_markdown)]

//! asciify-edit - Ordered non-ASCII replacement for source trees
//!
//! The logical core of asciify: a pure transform pipeline over document text,
//! plus a sequential directory sweep that applies it file by file.
//!
//! # Features
//!
//! - **Ordered rule tables**: flags -> emoji -> escape exceptions -> flatten
//! - **Escape preservation**: legal symbols and language names survive as
//!   `\uXXXX` escape text instead of being flattened
//! - **Diff preview**: per-line change records and a unified diff, computed
//!   even in dry-run
//! - **Safe sweep**: binary/undecodable/unreadable files are skipped, never
//!   rewritten
//!
//! # Architecture
//!
//! ```text
//! asciify-edit/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # SweepError enum (thiserror)
//! ├── types.rs      # TransformResult, FileReport, SweepConfig, SweepStats
//! ├── rules.rs      # Ordered replacement tables
//! ├── diff.rs       # Unified diff + positional line changes
//! ├── transform.rs  # AsciiSweeper::transform pipeline
//! └── sweep.rs      # Directory sweep (walkdir)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use asciify_edit::{AsciiSweeper, SweepConfig};
//!
//! // Pure transform
//! let result = AsciiSweeper::transform("Step 1 \u{2192} Step 2");
//! assert_eq!(result.modified, "Step 1 -> Step 2");
//!
//! // Whole-tree dry run
//! let stats = AsciiSweeper::sweep(
//!     "/project".as_ref(),
//!     &SweepConfig { dry_run: true, ..Default::default() },
//! )?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod diff;
mod error;
pub mod rules;
mod sweep;
mod transform;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::SweepError;
pub use transform::AsciiSweeper;
pub use types::{FileOutcome, FileReport, LineChange, SweepConfig, SweepStats, TransformResult};

// Re-export diff utility for external use
pub use diff::generate_unified_diff;
