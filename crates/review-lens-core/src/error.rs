//! Error types for review-lens-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the review and aggregate tables.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {max} bytes)")]
    TooLarge {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// The file contains no data rows.
    #[error("{path} is empty")]
    Empty {
        /// Path of the file.
        path: Utf8PathBuf,
    },

    /// One or more required columns are absent from the header row.
    #[error("{path} is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Names of the absent columns.
        columns: Vec<String>,
    },

    /// The CSV structure or a row could not be parsed.
    #[error("invalid CSV in {path}")]
    Csv {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A cell held a value that does not fit the column's type.
    #[error("{path} line {line}: invalid {column} value {value:?}")]
    InvalidField {
        /// Path of the file.
        path: Utf8PathBuf,
        /// 1-indexed data row number.
        line: u64,
        /// Column name.
        column: String,
        /// The offending cell contents.
        value: String,
    },
}

/// Result type alias using [`DatasetError`].
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors that can occur during product analysis.
///
/// Both variants are expected, renderable outcomes rather than faults: a
/// product id can legitimately be absent from either table, and callers
/// branch on the variant to show the right message.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No reviews exist for the requested product id.
    #[error("no reviews found for product {product_id}")]
    NoReviews {
        /// The product id that was requested.
        product_id: String,
    },

    /// Reviews exist, but the aggregate table has no row for the product id.
    #[error("no aggregate ratings for product {product_id}")]
    NoAggregate {
        /// The product id that was requested.
        product_id: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
