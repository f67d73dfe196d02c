//! Diff generation utilities.
//!
//! Unified diff output via the `similar` crate, plus the positional
//! line-change extraction used for per-file reports.

use similar::{ChangeTag, TextDiff};

use crate::types::LineChange;

/// Generate a unified diff between two strings.
///
/// Uses the `similar` crate for line-by-line diffing with context.
///
/// # Returns
/// A string containing the unified diff with `+`, `-`, and ` ` prefixes.
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                output.push_str(sign);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    output
}

/// Positional line diff: pair up line N of the input with line N of the
/// output and record every position where they differ.
///
/// No replacement rule adds or removes newlines, so the two sequences have
/// equal length in practice; any trailing excess is ignored.
pub fn line_changes(original: &str, modified: &str) -> Vec<LineChange> {
    original
        .split('\n')
        .zip(modified.split('\n'))
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(idx, (_, after))| LineChange {
            line: idx + 1,
            content: after.to_string(),
        })
        .collect()
}
