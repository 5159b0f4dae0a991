//! Core library for review-lens.
//!
//! This crate provides the data model, dataset loading, and the analysis
//! operations used by the `review-lens` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Product and dataset-wide analysis operations
//! - [`config`] - Configuration loading and management
//! - [`dataset`] - Review/aggregate records and the CSV loader
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use review_lens_core::{Dataset, analysis};
//!
//! let dataset = Dataset::load_csv_files(
//!     Utf8Path::new("final_reviews_with_analysis.csv"),
//!     Utf8Path::new("product_ratings_analysis.csv"),
//!     None,
//! )
//! .expect("failed to load dataset");
//!
//! let overview = analysis::dataset_overview(&dataset, 10);
//! println!("{} reviews across {} products", overview.total_reviews, overview.distinct_products);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod dataset;

pub mod error;

pub mod lexicon;

pub mod text;

pub use config::{Config, ConfigLoader, LogLevel};

pub use dataset::{Dataset, ProductAggregate, Review, Sentiment};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, DatasetError};

/// Default maximum input file size in bytes (64 MiB).
///
/// Applied to each CSV file before it is read into memory. Override via
/// `max_input_bytes` / `disable_input_limit` in [`Config`].
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;
