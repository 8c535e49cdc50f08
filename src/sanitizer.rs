//! Input cleaning for wheel option labels.
//!
//! Rules:
//! - Trim surrounding whitespace (including the byte order mark).
//! - Remove every `<`, `>`, `{`, `}` and `;`.
//! - Keep at most 20 characters.

use crate::constants::{BLOCKED_CHARS, MAX_LABEL_LEN};

/// Clean raw user text so it can be used as an option label.
///
/// Truncation is a hard cut on characters and happens after stripping,
/// so the result is not trimmed a second time. Returns an empty string
/// when nothing usable remains.
pub fn sanitize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .chars()
        .filter(|c| !BLOCKED_CHARS.contains(c))
        .take(MAX_LABEL_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("   pizza \t\n"), "pizza");
    }

    #[test]
    fn test_trims_byte_order_mark() {
        assert_eq!(sanitize("\u{FEFF} pizza \u{FEFF}"), "pizza");
    }

    #[test]
    fn test_strips_blocked_chars_anywhere() {
        assert_eq!(sanitize(" <b>hi</b>; "), "bhi/b");
        assert_eq!(sanitize("a{b}c;d"), "abcd");
    }

    #[test]
    fn test_script_tag_is_stripped_then_truncated() {
        let clean = sanitize("  <script>alert(1)</script>  ");
        assert_eq!(clean, "scriptalert(1)/scrip");
        assert_eq!(clean.chars().count(), MAX_LABEL_LEN);
    }

    #[test]
    fn test_truncates_to_max_len() {
        assert_eq!(sanitize(&"a".repeat(30)).len(), 20);
    }

    #[test]
    fn test_truncation_is_not_retrimmed() {
        // The 20th character is a space, which survives the cut
        let input = format!("{} tail", "x".repeat(19));
        assert_eq!(sanitize(&input), format!("{} ", "x".repeat(19)));
    }

    #[test]
    fn test_truncates_on_char_boundaries() {
        let input = "é".repeat(25);
        let clean = sanitize(&input);
        assert_eq!(clean.chars().count(), 20);
    }

    #[test]
    fn test_empty_and_blocked_only() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("    "), "");
        assert_eq!(sanitize(" <>{};; "), "");
    }

    #[test]
    fn test_inner_whitespace_after_stripping_is_kept() {
        // Trimming happens before stripping
        assert_eq!(sanitize("; hello ;"), " hello ");
    }
}
