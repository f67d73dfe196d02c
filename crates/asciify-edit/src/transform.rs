//! Core transform pipeline.
//!
//! A pure function from input text to transformed text plus a change list.
//! The steps run in a strict order; each scans for its literal keys and
//! substitutes every occurrence before the next step runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::diff::{generate_unified_diff, line_changes};
use crate::rules;
use crate::types::TransformResult;

/// Bullet token immediately after a list-item opening tag. The `<li>` marker
/// already renders a bullet, so the literal one is dropped.
static LI_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(<li[^>]*>)\s*\*\s*"));

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

/// AsciiSweeper - ordered non-ASCII replacement engine.
///
/// # Example
///
/// ```rust,ignore
/// use asciify_edit::AsciiSweeper;
///
/// let result = AsciiSweeper::transform("Step 1 \u{2192} Step 2");
/// assert_eq!(result.modified, "Step 1 -> Step 2");
/// assert!(result.changed);
/// ```
pub struct AsciiSweeper;

impl AsciiSweeper {
    /// Run the full replacement pipeline over one document.
    ///
    /// Pure and infallible: the input is never mutated, and transforming text
    /// already free of the targeted characters returns it unchanged.
    #[must_use]
    pub fn transform(content: &str) -> TransformResult {
        let mut text = content.to_string();

        // 1. Flag emojis first (multi-codepoint)
        for (needle, replacement) in rules::FLAG_STRIP {
            text = text.replace(needle, replacement);
        }

        // 2. Other emojis
        for (needle, replacement) in rules::EMOJI_TEXT {
            text = text.replace(needle, replacement);
        }

        // 3. Language names become escaped forms before flattening can see
        //    their accented letters
        for (needle, replacement) in rules::LANGUAGE_ESCAPES {
            text = text.replace(needle, replacement);
        }

        // 4. Copyright/registered/trademark keep rendering via escapes
        for (needle, replacement) in rules::SYMBOL_ESCAPES {
            text = text.replace(needle, replacement);
        }

        // 5. Everything else flattens to plain ASCII
        for (needle, replacement) in rules::ASCII_FLATTEN {
            text = text.replace(needle, replacement);
        }

        // 6. Middle dot used as UI separator
        text = text.replace(rules::MIDDLE_DOT, "|");

        // 7. Context-aware post-processing
        text = LI_BULLET_RE.replace_all(&text, "$1").into_owned();
        for (needle, replacement) in rules::ARTIFACT_CLEANUPS {
            text = text.replace(needle, replacement);
        }

        let changed = text != content;
        let (changes, diff) = if changed {
            (
                line_changes(content, &text),
                generate_unified_diff(content, &text),
            )
        } else {
            (Vec::new(), String::new())
        };

        TransformResult {
            modified: text,
            changed,
            changes,
            diff,
        }
    }
}
