// ABOUTME: Display string helpers.
// ABOUTME: Truncates long messages with a literal "..." marker.

use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max_len` characters and appends `"..."`.
/// Text that already fits is returned unchanged.
pub fn shorten(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_len) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(shorten("foobar", 10), "foobar");
        assert_eq!(shorten("foobar", 6), "foobar");
        assert!(matches!(shorten("foobar", 6), Cow::Borrowed(_)));
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(shorten("foobar", 5), "fooba...");
        assert_eq!(shorten("foobar", 1), "f...");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(shorten("foobar", 0), "...");
        assert_eq!(shorten("", 0), "");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(shorten("héllo wörld", 5), "héllo...");
        assert_eq!(shorten("日本語", 3), "日本語");
        assert_eq!(shorten("日本語", 2), "日本...");
    }
}
