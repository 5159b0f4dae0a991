//! Curated word list for frequency analysis.
//!
//! A closed set of common short function words that carry no signal in
//! review text and are excluded before counting.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Stop words excluded from word-frequency counts.
///
/// The list is fixed: all entries are exactly three letters, matching the
/// minimum token length, plus the handful of longer function words that
/// dominate review text.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
        "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
        "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_common_function_words() {
        assert!(STOP_WORDS.contains("the"));
        assert!(STOP_WORDS.contains("and"));
        assert!(STOP_WORDS.contains("use"));
    }

    #[test]
    fn content_words_pass_through() {
        assert!(!STOP_WORDS.contains("guitar"));
        assert!(!STOP_WORDS.contains("sat"));
        assert!(!STOP_WORDS.contains("cat"));
    }
}
