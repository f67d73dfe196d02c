//! Error types for file I/O operations.
//!
//! Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for text-file reading.
///
/// The first four variants are the "skippable" failures: the sweep resolves
/// them by leaving the file alone rather than aborting the run.
#[derive(Error, Debug)]
pub enum IoError {
    /// File does not exist (may have vanished mid-walk).
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exceeds size limit.
    #[error("File too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains binary content (NUL bytes detected).
    #[error("Binary file detected")]
    BinaryFile,

    /// Content is not valid UTF-8.
    #[error("UTF-8 decoding error")]
    Encoding,

    /// Insufficient permission to read the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}

impl IoError {
    /// Whether the sweep should skip the file instead of aborting.
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::TooLarge(_, _)
                | Self::BinaryFile
                | Self::Encoding
                | Self::PermissionDenied(_)
        )
    }
}
