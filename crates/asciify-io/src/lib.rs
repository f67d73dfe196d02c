#![allow(clippy::doc_markdown)]

//! asciify-io - Safe text-file reading for the asciify cleanup pipeline
//!
//! # Features
//!
//! - **Safety**: Binary detection & size limits
//! - **Strict decoding**: undecodable files are reported, never lossy-decoded
//!
//! # Architecture
//!
//! ```text
//! asciify-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! └── sync.rs     # Synchronous read API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use asciify_io::{read_text_safe, IoError};
//!
//! let content = read_text_safe("src/app.ts", 1024 * 1024)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use sync::read_text_safe;

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
