//! Per-product analysis.

use crate::dataset::{Dataset, Review};
use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

use super::reports::{ProductReport, ReviewSample, SentimentCounts};
use super::{summary, words, SAMPLE_EXCERPT_CHARS, SAMPLE_REVIEWS};

/// Analyze one product: sentiment split, frequent words, summary, ratings.
///
/// Reviews are matched by product id in original order. Two outcomes are
/// reported as typed errors rather than faults: a product id with no
/// matching reviews ([`AnalysisError::NoReviews`]), and one with reviews
/// but no aggregate row ([`AnalysisError::NoAggregate`]).
#[tracing::instrument(skip_all, fields(product_id, top_n))]
pub fn analyze_product(
    dataset: &Dataset,
    product_id: &str,
    top_n: usize,
    summary_max_chars: usize,
) -> AnalysisResult<ProductReport> {
    let matched: Vec<&Review> = dataset
        .reviews()
        .iter()
        .filter(|r| r.product_id == product_id)
        .collect();

    if matched.is_empty() {
        return Err(AnalysisError::NoReviews {
            product_id: product_id.to_string(),
        });
    }

    let rating = dataset
        .aggregate_for(product_id)
        .ok_or_else(|| AnalysisError::NoAggregate {
            product_id: product_id.to_string(),
        })?
        .clone();

    let sentiment_counts = SentimentCounts::tally(matched.iter().map(|r| r.sentiment));
    let texts: Vec<&str> = matched.iter().map(|r| r.text.as_str()).collect();

    let samples = matched
        .iter()
        .take(SAMPLE_REVIEWS)
        .map(|r| ReviewSample {
            reviewer: r.reviewer.clone(),
            rating: r.rating,
            sentiment: r.sentiment,
            excerpt: text::truncate_chars(&r.text, SAMPLE_EXCERPT_CHARS),
        })
        .collect();

    Ok(ProductReport {
        product_id: product_id.to_string(),
        review_count: matched.len(),
        sentiment_counts,
        sentiment_percentages: sentiment_counts.percentages(),
        top_words: words::top_words(&texts, top_n),
        summary: summary::summarize(&texts, summary_max_chars),
        rating,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DEFAULT_SUMMARY_MAX_CHARS, DEFAULT_TOP_WORDS};
    use crate::dataset::{ProductAggregate, Sentiment};

    fn review(product_id: &str, text: &str, sentiment: Sentiment) -> Review {
        Review {
            product_id: product_id.to_string(),
            text: text.to_string(),
            sentiment,
            reviewer: "Reviewer".to_string(),
            rating: 4,
            language: "en".to_string(),
        }
    }

    fn aggregate(product_id: &str) -> ProductAggregate {
        ProductAggregate {
            product_id: product_id.to_string(),
            avg_rating: 4.2,
            combined_rating: 4.1,
            avg_sentiment: 0.35,
            review_count: 3,
        }
    }

    fn fixture() -> Dataset {
        Dataset::new(
            vec![
                review("B001", "Great strings. Warm tone.", Sentiment::Positive),
                review("B002", "Broke after a week", Sentiment::Negative),
                review("B001", "Decent strings for the price", Sentiment::Neutral),
                review("B001", "Strings rust quickly", Sentiment::Negative),
            ],
            vec![aggregate("B001")],
        )
    }

    fn analyze(dataset: &Dataset, product_id: &str) -> AnalysisResult<ProductReport> {
        analyze_product(
            dataset,
            product_id,
            DEFAULT_TOP_WORDS,
            DEFAULT_SUMMARY_MAX_CHARS,
        )
    }

    #[test]
    fn unknown_product_reports_no_reviews() {
        let err = analyze(&fixture(), "B999").unwrap_err();
        assert!(matches!(err, AnalysisError::NoReviews { ref product_id } if product_id == "B999"));
    }

    #[test]
    fn missing_aggregate_reports_no_aggregate() {
        // B002 has a review but no aggregate row.
        let err = analyze(&fixture(), "B002").unwrap_err();
        assert!(matches!(err, AnalysisError::NoAggregate { ref product_id } if product_id == "B002"));
    }

    #[test]
    fn report_counts_and_rating_pass_through() {
        let report = analyze(&fixture(), "B001").unwrap();
        assert_eq!(report.review_count, 3);
        assert_eq!(report.sentiment_counts.positive, 1);
        assert_eq!(report.sentiment_counts.neutral, 1);
        assert_eq!(report.sentiment_counts.negative, 1);
        assert!((report.rating.avg_rating - 4.2).abs() < f64::EPSILON);
        assert_eq!(report.rating.review_count, 3);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let report = analyze(&fixture(), "B001").unwrap();
        let p = report.sentiment_percentages;
        assert!((p.positive + p.neutral + p.negative - 100.0).abs() < 0.01);
    }

    #[test]
    fn top_words_come_from_matched_reviews_only() {
        let report = analyze(&fixture(), "B001").unwrap();
        assert_eq!(report.top_words[0].word, "strings");
        assert_eq!(report.top_words[0].count, 3);
        // "broke" belongs to B002 and must not leak in.
        assert!(report.top_words.iter().all(|w| w.word != "broke"));
    }

    #[test]
    fn summary_uses_leading_matched_texts() {
        let report = analyze(&fixture(), "B001").unwrap();
        assert_eq!(report.summary, "Great strings.  Warm tone");
    }

    #[test]
    fn samples_preserve_order_and_truncate() {
        let long_text = format!("{} end.", "a".repeat(400));
        let dataset = Dataset::new(
            vec![
                review("B001", &long_text, Sentiment::Positive),
                review("B001", "short", Sentiment::Neutral),
                review("B001", "also short", Sentiment::Neutral),
                review("B001", "fourth is dropped", Sentiment::Negative),
            ],
            vec![aggregate("B001")],
        );
        let report = analyze(&dataset, "B001").unwrap();
        assert_eq!(report.samples.len(), 3);
        assert_eq!(report.samples[0].excerpt.chars().count(), 200);
        assert_eq!(report.samples[1].excerpt, "short");
        assert_eq!(report.samples[2].excerpt, "also short");
    }
}
