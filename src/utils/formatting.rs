//! Formatting utilities used for CLI outputs.

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex is valid"));

/// Pad `s` on the right to `width` terminal columns.
/// Color codes take no room; wide glyphs count double.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Strip ANSI color sequences, e.g. before measuring a colored cell.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }

    #[test]
    fn strip_removes_color_codes() {
        assert_eq!(strip_ansi("\x1b[90m--\x1b[0m"), "--");
    }
}
