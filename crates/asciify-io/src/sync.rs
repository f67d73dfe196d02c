//! Synchronous file I/O operations.

use std::fs as std_fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Errors
/// `IoError::NotFound` / `IoError::PermissionDenied` on open failures,
/// `IoError::TooLarge` past the size cap, and the decode errors from
/// [`decode_buffer`](crate::decode_buffer).
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path).map_err(|e| classify_open_error(&e, path))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path).map_err(|e| classify_open_error(&e, path))?;
    let mut buffer = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

fn classify_open_error(err: &std::io::Error, path: &Path) -> IoError {
    match err.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        ErrorKind::PermissionDenied => {
            IoError::PermissionDenied(path.to_string_lossy().to_string())
        }
        _ => IoError::System(std::io::Error::new(err.kind(), err.to_string())),
    }
}
