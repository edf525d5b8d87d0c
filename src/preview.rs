//! Preview formatting for generated source text.
//!
//! Pure functions — (text, length) → String. No I/O, no side effects.

/// Number of characters of the generated source shown in a preview.
pub const PREVIEW_LEN: usize = 200;

/// Confirmation line printed after the preview.
pub const CONFIRMATION: &str = "OK - first section works";

/// The first `len` characters of `text`.
///
/// Slices on character boundaries, not bytes; the generated source contains
/// multi-byte characters (`–`, `→`, `─`). If `len` is at or beyond the end
/// of the string the whole string is returned.
pub fn char_prefix(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Assemble the full preview output: the prefix on its own write, then the
/// confirmation line, each newline-terminated.
pub fn format_preview(source: &str) -> String {
    format!("{}\n{}\n", char_prefix(source, PREVIEW_LEN), CONFIRMATION)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_long_text_has_requested_length() {
        let text = "x".repeat(500);
        assert_eq!(char_prefix(&text, 200).chars().count(), 200);
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        // Three characters, seven bytes.
        let text = "a–→";
        assert_eq!(char_prefix(text, 2), "a–");
        assert_eq!(char_prefix(text, 3), "a–→");
    }

    #[test]
    fn prefix_beyond_end_yields_whole_string() {
        assert_eq!(char_prefix("short", 200), "short");
    }

    #[test]
    fn prefix_of_empty_string_is_empty() {
        assert_eq!(char_prefix("", 200), "");
    }

    #[test]
    fn prefix_of_zero_length_is_empty() {
        assert_eq!(char_prefix("anything", 0), "");
    }

    #[test]
    fn preview_ends_with_confirmation_line() {
        let out = format_preview("payload");
        assert!(out.ends_with("OK - first section works\n"));
    }

    #[test]
    fn preview_starts_with_prefix() {
        let text = "y".repeat(300);
        let out = format_preview(&text);
        assert!(out.starts_with(&"y".repeat(200)));
        assert!(!out.starts_with(&"y".repeat(201)));
    }

    #[test]
    fn preview_is_deterministic() {
        let text = "z".repeat(300);
        assert_eq!(format_preview(&text), format_preview(&text));
    }
}
