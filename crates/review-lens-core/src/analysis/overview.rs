//! Corpus-wide statistics.

use std::collections::HashSet;

use crate::dataset::{Dataset, ProductAggregate};

use super::reports::{DatasetOverview, SentimentCounts};

/// Summarize the whole dataset: totals, distinct counts, sentiment
/// distribution, and the products with the most reviews.
///
/// The top-products table holds at most `top_n` aggregate rows ordered
/// descending by review count; ties keep original table order (stable
/// sort). An empty review table produces zero counts and a 0.0
/// reviews-per-product average rather than a division fault.
#[tracing::instrument(skip_all, fields(top_n))]
pub fn dataset_overview(dataset: &Dataset, top_n: usize) -> DatasetOverview {
    let reviews = dataset.reviews();
    let total_reviews = reviews.len();

    let distinct_products = reviews
        .iter()
        .map(|r| r.product_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let distinct_languages = reviews
        .iter()
        .map(|r| r.language.as_str())
        .collect::<HashSet<_>>()
        .len();

    let avg_reviews_per_product = if distinct_products == 0 {
        0.0
    } else {
        total_reviews as f64 / distinct_products as f64
    };

    let mut top_products: Vec<ProductAggregate> = dataset.aggregates().to_vec();
    top_products.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    top_products.truncate(top_n);

    DatasetOverview {
        total_reviews,
        distinct_products,
        avg_reviews_per_product,
        distinct_languages,
        sentiment_counts: SentimentCounts::tally(reviews.iter().map(|r| r.sentiment)),
        top_products,
    }
}
