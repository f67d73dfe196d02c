//! Binary detection and decoding utilities.
//!
//! Quick binary detection using NUL byte scanning.

use memchr::memchr;

use crate::error::IoError;

/// Quick binary detection - checks first 8KB for NUL bytes.
///
/// Files containing NUL bytes in the first 8KB are considered binary.
/// This is a fast heuristic that works well for most text files.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = std::cmp::min(buffer.len(), 8192);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to String, strictly.
///
/// First checks for binary content, then attempts UTF-8 decoding. Decoding
/// is strict on purpose: a lossy fallback would inject U+FFFD, which the
/// replacement tables downstream would then rewrite, corrupting files that
/// were never text to begin with. Undecodable files are skipped instead.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected, and
/// `IoError::Encoding` when the bytes are not valid UTF-8.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|_| IoError::Encoding)
}
