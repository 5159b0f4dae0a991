//! Report structs for product and dataset analysis.
//!
//! All structs derive `Serialize` and `Deserialize` for CLI JSON output
//! and downstream consumers.

use serde::{Deserialize, Serialize};

use crate::dataset::{ProductAggregate, Sentiment};

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word, lowercase.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Sentiment label occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Reviews labeled positive.
    pub positive: usize,
    /// Reviews labeled neutral.
    pub neutral: usize,
    /// Reviews labeled negative.
    pub negative: usize,
}

impl SentimentCounts {
    /// Tally labels over a sequence of reviews' sentiment labels.
    pub fn tally<I: IntoIterator<Item = Sentiment>>(labels: I) -> Self {
        let mut counts = Self::default();
        for label in labels {
            match label {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Neutral => counts.neutral += 1,
                Sentiment::Negative => counts.negative += 1,
            }
        }
        counts
    }

    /// Total number of labeled reviews.
    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Per-label shares of the total, as percentages.
    ///
    /// An empty tally yields all zeros rather than dividing by zero.
    pub fn percentages(&self) -> SentimentPercentages {
        let total = self.total();
        if total == 0 {
            return SentimentPercentages::default();
        }
        let pct = |count: usize| count as f64 / total as f64 * 100.0;
        SentimentPercentages {
            positive: pct(self.positive),
            neutral: pct(self.neutral),
            negative: pct(self.negative),
        }
    }
}

/// Sentiment label shares as percentages of the labeled total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    /// Share of positive reviews.
    pub positive: f64,
    /// Share of neutral reviews.
    pub neutral: f64,
    /// Share of negative reviews.
    pub negative: f64,
}

/// A sample review for display alongside a product report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSample {
    /// Display name of the reviewer.
    pub reviewer: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Precomputed sentiment label.
    pub sentiment: Sentiment,
    /// First 200 characters of the review text.
    pub excerpt: String,
}

/// Full analysis for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductReport {
    /// The product id the report describes.
    pub product_id: String,
    /// Number of reviews matched for the product.
    pub review_count: usize,
    /// Sentiment label counts over the matched reviews.
    pub sentiment_counts: SentimentCounts,
    /// Sentiment label shares over the matched reviews.
    pub sentiment_percentages: SentimentPercentages,
    /// Most frequent words across the matched review texts.
    pub top_words: Vec<WordCount>,
    /// Extractive summary of the leading review texts.
    pub summary: String,
    /// Upstream-computed rating aggregate, passed through unchanged.
    pub rating: ProductAggregate,
    /// Up to three sample reviews in original order.
    pub samples: Vec<ReviewSample>,
}

/// Corpus-wide statistics shown when no product is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOverview {
    /// Total number of reviews in the table.
    pub total_reviews: usize,
    /// Number of distinct product ids among the reviews.
    pub distinct_products: usize,
    /// Average reviews per product; 0.0 when the review table is empty.
    pub avg_reviews_per_product: f64,
    /// Number of distinct detected-language codes.
    pub distinct_languages: usize,
    /// Sentiment label counts across all reviews.
    pub sentiment_counts: SentimentCounts,
    /// Aggregate rows with the highest review counts, descending.
    pub top_products: Vec<ProductAggregate>,
}
