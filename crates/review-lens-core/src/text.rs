//! Text processing utilities.
//!
//! Provides word extraction and character-exact truncation for use by the
//! analysis modules.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens: maximal runs of ASCII letters, three or longer.
///
/// Digits, punctuation, and shorter runs act as token boundaries and are
/// discarded.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("valid regex"));

/// Extract lowercase word tokens from text.
///
/// The input is lowercased first, then scanned for maximal ASCII-letter
/// runs of length >= 3. Empty input yields an empty vector.
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes, so multi-byte text never
/// splits mid-character. Returns the input unchanged when it already fits.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "test"]);
    }

    #[test]
    fn short_runs_are_dropped() {
        assert_eq!(extract_words("an ox is by me"), Vec::<String>::new());
        assert_eq!(extract_words("cat ox dog"), vec!["cat", "dog"]);
    }

    #[test]
    fn digits_split_tokens() {
        // "mp3player" has a digit boundary: "player" survives, "mp" does not.
        assert_eq!(extract_words("mp3player"), vec!["player"]);
        assert_eq!(extract_words("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn lowercasing_applied() {
        assert_eq!(extract_words("GREAT Sound"), vec!["great", "sound"]);
    }

    #[test]
    fn empty_input() {
        assert!(extract_words("").is_empty());
        assert!(extract_words("12 34 !?").is_empty());
    }

    #[test]
    fn truncate_shorter_is_identity() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
