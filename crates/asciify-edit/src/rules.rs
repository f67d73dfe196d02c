//! Replacement rule tables.
//!
//! Immutable ordered association lists, applied by the transform pipeline in
//! the order they are declared here. The ordering matters: the escape-form
//! tables must run before the generic flatten table so that the characters
//! they target survive as escapes instead of being flattened.
//!
//! The tables are exposed so downstream tests can validate every entry.

/// Flag emoji sequences (multi-codepoint regional indicator pairs), removed
/// outright. Must run first so the pairs are never split by later rules.
pub const FLAG_STRIP: &[(&str, &str)] = &[
    ("\u{1F1FA}\u{1F1F8}", ""), // US flag
    ("\u{1F1F2}\u{1F1FD}", ""), // Mexico flag
    ("\u{1F1EB}\u{1F1F7}", ""), // France flag
];

/// Emoji replaced with short ASCII tokens, or removed.
pub const EMOJI_TEXT: &[(&str, &str)] = &[
    ("\u{1F389}", ""),   // party popper -> remove
    ("\u{1F6A8}", "!!"), // siren -> !!
];

/// Accented language names preserved as Unicode escape sequences.
///
/// These render correctly at runtime while keeping the stored source ASCII.
/// They are exceptions: the accented letters must never reach the flatten
/// step.
pub const LANGUAGE_ESCAPES: &[(&str, &str)] = &[
    ("Espa\u{00F1}ol", "Espa\\u00F1ol"),
    ("Fran\u{00E7}ais", "Fran\\u00E7ais"),
];

/// Legal symbols in string literals, preserved as Unicode escape sequences.
pub const SYMBOL_ESCAPES: &[(&str, &str)] = &[
    ("\u{00A9}", "\\u00A9"), // copyright
    ("\u{00AE}", "\\u00AE"), // registered
    ("\u{2122}", "\\u2122"), // trademark
];

/// Remaining single characters flattened to plain ASCII approximations.
pub const ASCII_FLATTEN: &[(&str, &str)] = &[
    ("\u{2014}", "--"),  // em-dash
    ("\u{2013}", "-"),   // en-dash
    ("\u{2192}", "->"),  // right arrow
    ("\u{2190}", "<-"),  // left arrow
    ("\u{2022}", "*"),   // bullet
    ("\u{2713}", "[x]"), // check mark
    ("\u{2705}", "[OK]"), // white heavy check mark
    ("\u{2500}", "-"),   // box drawing horizontal
    ("\u{2514}", "+-"),  // box drawing corner
    ("\u{00D7}", "x"),   // multiplication sign
    ("\u{FFFD}", "--"),  // replacement char (corrupted em-dash)
];

/// Middle dot used as a UI separator becomes a pipe.
pub const MIDDLE_DOT: char = '\u{00B7}';

/// Fixed artifact strings left ragged by emoji removal, collapsed last.
///
/// The product-name entries fix quote spacing in the welcome banner; the
/// badge entry restores the separator the middle dot used to provide.
pub const ARTIFACT_CLEANUPS: &[(&str, &str)] = &[
    ("BibleLessonSpark! \"", "BibleLessonSpark!\""),
    ("BibleLessonSpark! '", "BibleLessonSpark!'"),
    ("! !", "!"),
    ("Public Beta * Free", "Public Beta | Free"),
];
