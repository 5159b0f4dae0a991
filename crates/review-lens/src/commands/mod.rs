//! Command implementations.

use anyhow::Context;
use camino::Utf8PathBuf;
use review_lens_core::{Config, Dataset};

pub mod analyze;
pub mod info;
pub mod overview;
pub mod products;
pub mod summary;
pub mod words;

/// Resolved locations of the two data files after CLI overrides.
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Review table CSV.
    pub reviews: Utf8PathBuf,
    /// Aggregate ratings CSV.
    pub ratings: Utf8PathBuf,
}

impl DataPaths {
    /// Apply `--reviews` / `--ratings` overrides on top of the config paths.
    pub fn resolve(
        config: &Config,
        reviews_override: Option<Utf8PathBuf>,
        ratings_override: Option<Utf8PathBuf>,
    ) -> Self {
        Self {
            reviews: reviews_override.unwrap_or_else(|| config.reviews_path.clone()),
            ratings: ratings_override.unwrap_or_else(|| config.ratings_path.clone()),
        }
    }
}

/// Load the dataset snapshot every analysis command works from.
///
/// Combines the load and error-context steps that each command needs,
/// so failures name both files consistently.
pub fn load_dataset(paths: &DataPaths, max_bytes: Option<usize>) -> anyhow::Result<Dataset> {
    Dataset::load_csv_files(&paths.reviews, &paths.ratings, max_bytes).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            paths.reviews, paths.ratings
        )
    })
}
