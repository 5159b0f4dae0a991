//! Two-sentence extractive summary.
//!
//! The algorithm is a literal split-and-rejoin on the period character:
//! join the first three texts, split on `.`, keep the first two segments,
//! rejoin with `". "`. The doubled periods and spacing artifacts this
//! produces around existing sentence boundaries are part of the contract
//! and must not be smoothed over.

/// How many leading texts feed the summary.
const SUMMARY_SOURCE_TEXTS: usize = 3;

/// How many period-delimited segments the summary keeps.
const SUMMARY_SEGMENTS: usize = 2;

/// Build a short extractive summary from the leading texts.
///
/// Takes the first three texts (fewer if the slice is shorter), joins them
/// with single spaces, splits on the literal `.` character, rejoins the
/// first two segments with `". "`, and truncates to `max_chars` characters
/// plus a `"..."` marker when over budget. The result is trimmed of
/// leading and trailing whitespace.
///
/// Empty input yields an empty string. Fewer than two segments are used
/// as-is.
#[tracing::instrument(skip_all, fields(texts = texts.len(), max_chars))]
pub fn summarize(texts: &[&str], max_chars: usize) -> String {
    let joined = texts
        .iter()
        .take(SUMMARY_SOURCE_TEXTS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let summary = joined
        .split('.')
        .take(SUMMARY_SEGMENTS)
        .collect::<Vec<_>>()
        .join(". ");

    let summary = if summary.chars().count() > max_chars {
        let mut truncated: String = summary.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        summary
    };

    summary.trim().to_string()
}
