//! Human-readable report rendering.
//!
//! Stdout carries only the report; tracing goes to stderr.

use std::fmt::Write as _;
use std::path::Path;

use asciify_edit::{FileReport, SweepStats};

const BANNER: &str = "============================================================";

/// Maximum preview length for a changed line, in chars.
const PREVIEW_CHARS: usize = 100;

/// Render the full run report.
pub(crate) fn render(root: &Path, stats: &SweepStats, dry_run: bool, verbose: bool) -> String {
    let mode = if dry_run { "DRY RUN" } else { "FIXING" };
    let mut out = String::new();

    let _ = writeln!(out, "\n{BANNER}");
    let _ = writeln!(out, "asciify Unicode Cleanup -- {mode}");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Root: {}\n", root.display());

    if stats.reports.is_empty() {
        let _ = writeln!(out, "No non-ASCII characters found. Codebase is clean!");
    } else {
        let mut reports: Vec<&FileReport> = stats.reports.iter().collect();
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        for report in reports {
            let _ = writeln!(
                out,
                "\n--- {} ({} changes) ---",
                report.path,
                report.changes.len()
            );
            for change in &report.changes {
                let _ = writeln!(out, "  L{}: {}", change.line, preview(&change.content));
            }
            if verbose && !report.diff.is_empty() {
                let _ = writeln!(out, "\n{}", report.diff.trim_end());
            }
        }
    }

    let verb = if dry_run { "Would fix" } else { "Fixed" };
    let _ = writeln!(out, "\n{BANNER}");
    let _ = writeln!(out, "Scanned: {} files", stats.files_scanned);
    let _ = writeln!(out, "{verb}: {} files", stats.files_fixed);
    let _ = writeln!(out, "{BANNER}");

    if dry_run && stats.files_fixed > 0 {
        let _ = writeln!(out, "\nRun without --dry-run to apply changes.");
    }

    out
}

/// Trimmed line content, truncated to [`PREVIEW_CHARS`].
fn preview(content: &str) -> String {
    content.trim().chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciify_edit::LineChange;

    fn sample_stats() -> SweepStats {
        SweepStats {
            files_scanned: 3,
            files_fixed: 2,
            reports: vec![
                FileReport {
                    path: "src/b.ts".to_string(),
                    changes: vec![LineChange {
                        line: 7,
                        content: "  const arrow = 'a -> b';".to_string(),
                    }],
                    diff: "-old\n+new\n".to_string(),
                },
                FileReport {
                    path: "src/a.ts".to_string(),
                    changes: vec![LineChange {
                        line: 2,
                        content: "// fixed".to_string(),
                    }],
                    diff: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_render_sorted_and_trimmed() {
        let out = render(Path::new("/repo"), &sample_stats(), true, false);

        assert!(out.contains("DRY RUN"));
        assert!(out.contains("Root: /repo"));
        let a = out.find("--- src/a.ts").expect("a.ts in report");
        let b = out.find("--- src/b.ts").expect("b.ts in report");
        assert!(a < b, "reports must be sorted by path");
        assert!(out.contains("L7: const arrow = 'a -> b';"));
        assert!(out.contains("Scanned: 3 files"));
        assert!(out.contains("Would fix: 2 files"));
        assert!(out.contains("Run without --dry-run"));
        assert!(!out.contains("+new"));
    }

    #[test]
    fn test_render_apply_mode() {
        let out = render(Path::new("/repo"), &sample_stats(), false, true);

        assert!(out.contains("FIXING"));
        assert!(out.contains("Fixed: 2 files"));
        assert!(!out.contains("Run without --dry-run"));
        assert!(out.contains("+new"), "verbose mode includes diffs");
    }

    #[test]
    fn test_render_clean_tree() {
        let stats = SweepStats {
            files_scanned: 5,
            files_fixed: 0,
            reports: Vec::new(),
        };
        let out = render(Path::new("/repo"), &stats, true, false);

        assert!(out.contains("Codebase is clean"));
        assert!(!out.contains("Run without --dry-run"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(250);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS);
        assert_eq!(preview("  padded  "), "padded");
    }
}
