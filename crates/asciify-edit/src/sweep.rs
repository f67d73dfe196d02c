//! Directory sweep.
//!
//! Walks a directory tree sequentially, runs the transform pipeline over
//! every file matching the extension allow-list, and writes changed files
//! back unless dry-run is set. Skippable read failures (binary, undecodable,
//! unreadable) leave the file alone; write failures abort the run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::AsciiSweeper;
use crate::error::SweepError;
use crate::types::{FileOutcome, FileReport, SweepConfig, SweepStats};

impl AsciiSweeper {
    /// Transform one file on disk.
    ///
    /// Reads the file, runs [`AsciiSweeper::transform`], and writes the
    /// result back when it differs and `config.dry_run` is false. The
    /// report carries `path` as given; [`AsciiSweeper::sweep`] relativizes
    /// it against the root afterwards.
    ///
    /// # Errors
    /// `SweepError::Write` when the rewrite fails, `SweepError::Io` for
    /// non-skippable read failures.
    pub fn fix_file(path: &Path, config: &SweepConfig) -> Result<FileOutcome, SweepError> {
        let content = match asciify_io::read_text_safe(path, config.max_file_size) {
            Ok(c) => c,
            Err(e) if e.is_skippable() => {
                debug!(path = %path.display(), reason = %e, "skipping file");
                return Ok(FileOutcome::Skipped);
            }
            Err(e) => return Err(SweepError::Io(e)),
        };

        let result = Self::transform(&content);
        if !result.changed {
            return Ok(FileOutcome::Clean);
        }

        if !config.dry_run {
            fs::write(path, &result.modified).map_err(|source| SweepError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }

        Ok(FileOutcome::Fixed(FileReport {
            path: path.display().to_string(),
            changes: result.changes,
            diff: result.diff,
        }))
    }

    /// Sweep a directory tree.
    ///
    /// Single-threaded traversal; directories named in `config.skip_dirs`
    /// are pruned anywhere in the tree, and only files whose extension is in
    /// `config.extensions` are processed. Report paths are relative to
    /// `root`.
    ///
    /// # Errors
    /// Propagates traversal failures and the hard errors of
    /// [`AsciiSweeper::fix_file`].
    pub fn sweep(root: &Path, config: &SweepConfig) -> Result<SweepStats, SweepError> {
        let mut stats = SweepStats::default();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir() && is_skipped_dir(entry.path(), root, config))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable or vanished directories are skipped like
                // unreadable files; only harder traversal failures abort.
                Err(e) if is_skippable_walk_error(&e) => {
                    debug!(path = ?e.path(), reason = %e, "skipping unreadable directory");
                    continue;
                }
                Err(e) => return Err(SweepError::Walk(e)),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !matches_extension(path, &config.extensions) {
                continue;
            }

            stats.files_scanned += 1;
            if let FileOutcome::Fixed(mut report) = Self::fix_file(path, config)? {
                report.path = path
                    .strip_prefix(root)
                    .unwrap_or(path)
                    .display()
                    .to_string();
                stats.files_fixed += 1;
                stats.reports.push(report);
            }
        }

        Ok(stats)
    }
}

/// Directory is pruned when its own name is in the skip set. The root is
/// never pruned, even if its name matches.
fn is_skipped_dir(path: &Path, root: &Path, config: &SweepConfig) -> bool {
    if path == root {
        return false;
    }
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| config.skip_dirs.iter().any(|skip| *skip == name))
}

/// Suffix match on the file name, so a dotfile named exactly `.ts` still
/// counts (`Path::extension` would report none for it).
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| {
            extensions
                .iter()
                .any(|allowed| name.ends_with(&format!(".{allowed}")))
        })
}

fn is_skippable_walk_error(err: &walkdir::Error) -> bool {
    err.io_error().is_some_and(|io| {
        matches!(io.kind(), ErrorKind::PermissionDenied | ErrorKind::NotFound)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_filter() {
        let exts = vec!["ts".to_string(), "tsx".to_string()];
        assert!(matches_extension(Path::new("a/b.ts"), &exts));
        assert!(matches_extension(Path::new("a/b.tsx"), &exts));
        assert!(!matches_extension(Path::new("a/b.rs"), &exts));
        assert!(!matches_extension(Path::new("a/ts"), &exts));
        // suffix match, not Path::extension: a dotfile named `.ts` counts
        assert!(matches_extension(Path::new("a/.ts"), &exts));
        assert!(!matches_extension(Path::new("a/b.mts"), &exts));
    }

    #[test]
    fn test_skip_dir_matches_name_anywhere() {
        let config = SweepConfig::default();
        let root = Path::new("/repo");
        assert!(is_skipped_dir(
            Path::new("/repo/src/node_modules"),
            root,
            &config
        ));
        assert!(!is_skipped_dir(Path::new("/repo/src/app"), root, &config));
    }

    #[test]
    fn test_root_never_pruned() {
        let config = SweepConfig::default();
        let root = Path::new("/tmp/dist");
        assert!(!is_skipped_dir(root, root, &config));
    }

    #[test]
    fn test_fix_file_reports_path_as_given() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("arrows.ts");
        fs::write(&path, "a \u{2192} b").expect("Write file");

        let outcome =
            AsciiSweeper::fix_file(&path, &SweepConfig::default()).expect("Should process");
        let FileOutcome::Fixed(report) = outcome else {
            panic!("expected a fix");
        };
        assert_eq!(report.path, path.display().to_string());
    }

    #[test]
    fn test_fix_file_clean() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("clean.ts");
        fs::write(&path, "const x = 1;\n").expect("Write file");

        let outcome =
            AsciiSweeper::fix_file(&path, &SweepConfig::default()).expect("Should process");
        assert!(matches!(outcome, FileOutcome::Clean));
    }

    #[test]
    fn test_fix_file_skips_binary() {
        let dir = TempDir::new().expect("Create temp dir");
        let path = dir.path().join("blob.ts");
        fs::write(&path, b"\x00\x01\x02 \xe2\x86\x92").expect("Write file");

        let outcome =
            AsciiSweeper::fix_file(&path, &SweepConfig::default()).expect("Should process");
        assert!(matches!(outcome, FileOutcome::Skipped));
    }
}
