//! Word-frequency counting over review text.

use std::collections::HashMap;

use crate::lexicon::STOP_WORDS;
use crate::text;

use super::reports::WordCount;

/// Count word frequencies across texts and return the `n` most frequent.
///
/// Texts are joined with single spaces, lowercased, and tokenized into
/// ASCII-letter runs of length >= 3; stop words are discarded before
/// counting. Ties in count resolve to first-encountered order: counts are
/// accumulated in insertion order and the final sort is stable.
///
/// Returns fewer than `n` entries when fewer distinct qualifying words
/// exist, and an empty vector for empty or all-stop-word input.
#[tracing::instrument(skip_all, fields(texts = texts.len(), n))]
pub fn top_words(texts: &[&str], n: usize) -> Vec<WordCount> {
    let joined = texts.join(" ");
    let words = text::extract_words(&joined);

    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for word in words {
        if STOP_WORDS.contains(word.as_str()) {
            continue;
        }
        if let Some(&i) = index.get(&word) {
            counts[i].count += 1;
        } else {
            index.insert(word.clone(), counts.len());
            counts.push(WordCount { word, count: 1 });
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
