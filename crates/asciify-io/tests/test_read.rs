//! Tests for the synchronous read API against real files.

use std::fs;

use tempfile::TempDir;

use asciify_io::{IoError, read_text_safe};

#[test]
fn test_reads_utf8_with_non_ascii() {
    let dir = TempDir::new().expect("Create temp dir");
    let p = dir.path().join("unicode.ts");
    fs::write(&p, "const arrow = 'a \u{2192} b';\n").expect("Write file");

    let content = read_text_safe(&p, 1024 * 1024).expect("Should read");
    assert!(content.contains('\u{2192}'));
}

#[test]
fn test_skippable_classification() {
    let dir = TempDir::new().expect("Create temp dir");

    let binary = dir.path().join("blob.ts");
    fs::write(&binary, b"\x00\x01binary").expect("Write file");
    let err = read_text_safe(&binary, 1024).expect_err("Binary must fail");
    assert!(err.is_skippable());

    let err = read_text_safe(dir.path().join("missing.ts"), 1024).expect_err("Missing must fail");
    assert!(matches!(err, IoError::NotFound(_)));
    assert!(err.is_skippable());
}

#[test]
fn test_size_cap_counts_bytes_not_chars() {
    let dir = TempDir::new().expect("Create temp dir");
    let p = dir.path().join("big.ts");
    // 4 chars, 8 bytes
    fs::write(&p, "\u{00e9}\u{00e9}\u{00e9}\u{00e9}").expect("Write file");

    assert!(matches!(
        read_text_safe(&p, 7),
        Err(IoError::TooLarge(8, 7))
    ));
    assert!(read_text_safe(&p, 8).is_ok());
}
