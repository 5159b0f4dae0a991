//! Product and dataset-wide analysis.
//!
//! Four pure operations over the loaded [`crate::Dataset`]:
//!
//! - [`words::top_words`] — word-frequency counting over review text
//! - [`summary::summarize`] — two-sentence extractive summary
//! - [`product::analyze_product`] — per-product report
//! - [`overview::dataset_overview`] — corpus-wide statistics
//!
//! Each operation is a pure function of its inputs; repeated calls over the
//! same snapshot return the same results.

pub mod overview;
pub mod product;
pub mod reports;
pub mod summary;
pub mod words;

pub use overview::dataset_overview;
pub use product::analyze_product;
pub use reports::{
    DatasetOverview, ProductReport, ReviewSample, SentimentCounts, SentimentPercentages, WordCount,
};
pub use summary::summarize;
pub use words::top_words;

/// Default number of words the frequency counter reports.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Default number of rows in the overview's top-products table.
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Default character budget for extractive summaries.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 200;

/// How many sample reviews a product report carries.
pub const SAMPLE_REVIEWS: usize = 3;

/// Character budget for sample review excerpts.
pub const SAMPLE_EXCERPT_CHARS: usize = 200;
