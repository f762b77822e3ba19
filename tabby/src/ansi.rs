//! Visible-width measurement of terminal text.
//!
//! Widths are counted in Unicode scalar values after removing ANSI escape
//! sequences, so a colored cell occupies exactly as many columns as its plain
//! text.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// SGR and erase-in-line sequences (`ESC [ ... m`, `ESC [ ... K`) and OSC-8
/// hyperlinks (`ESC ]8;; ... BEL`).
static ANSI_ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[mK]|\x1b\]8;;.*?\x07").expect("ANSI escape regex is valid")
});

/// Removes ANSI escape sequences from `text`, leaving every visible character
/// untouched.
///
/// Removal repeats until no sequence is left, so a sequence formed by the
/// text around a removed one is stripped as well. Borrows the input when
/// there is nothing to strip.
///
/// # Examples
///
/// ```rust
/// assert_eq!(tabby::strip_ansi("\x1b[0;31mred\x1b[0m"), "red");
/// assert_eq!(tabby::strip_ansi("plain"), "plain");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let Cow::Owned(mut stripped) = ANSI_ESCAPE_REGEX.replace_all(text, "") else {
        return Cow::Borrowed(text);
    };

    // Every pass removes at least one byte, so this terminates.
    while ANSI_ESCAPE_REGEX.is_match(&stripped) {
        let next = ANSI_ESCAPE_REGEX.replace_all(&stripped, "").into_owned();
        stripped = next;
    }
    Cow::Owned(stripped)
}

/// Returns the number of visible columns `text` occupies.
///
/// Each Unicode scalar value counts as one column; combining marks and wide
/// characters are not treated specially.
///
/// # Examples
///
/// ```rust
/// assert_eq!(tabby::visible_width("Bulba"), 5);
/// assert_eq!(tabby::visible_width("\x1b[0;31mAB\x1b[0mCD"), 4);
/// ```
#[must_use]
pub fn visible_width(text: &str) -> usize { strip_ansi(text).chars().count() }
