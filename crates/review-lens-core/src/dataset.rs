//! Review and aggregate records, the in-memory dataset snapshot, and the
//! CSV loading boundary.
//!
//! The two tables are loaded once, validated against their required
//! columns, and held read-only for the rest of the session. Analysis
//! operations receive the [`Dataset`] by reference and assume well-formed
//! records; all schema checking happens here.

use std::collections::HashMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, DatasetResult};

/// Columns the review table must provide.
const REQUIRED_REVIEW_COLUMNS: &[&str] = &[
    "asin",
    "reviewText_english",
    "sentiment_label",
    "reviewerName",
    "overall",
    "detected_language",
];

/// Columns the aggregate table must provide, besides the leading index
/// column that carries the product id.
const REQUIRED_RATING_COLUMNS: &[&str] = &[
    "avg_rating",
    "combined_rating",
    "avg_sentiment",
    "review_count",
];

/// Precomputed sentiment label attached to each review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// The review reads favorably.
    Positive,
    /// The review is neither clearly favorable nor unfavorable.
    Neutral,
    /// The review reads unfavorably.
    Negative,
}

impl Sentiment {
    /// Returns the sentiment as its lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the review table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Opaque product identifier (ASIN); many reviews share one.
    pub product_id: String,
    /// Free review text, possibly empty.
    pub text: String,
    /// Precomputed sentiment label.
    pub sentiment: Sentiment,
    /// Display name of the reviewer.
    pub reviewer: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// ISO-like code of the detected review language.
    pub language: String,
}

/// One row of the aggregate table: upstream-computed per-product ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAggregate {
    /// Opaque product identifier (ASIN); unique within the table.
    pub product_id: String,
    /// Mean star rating, 0–5.
    pub avg_rating: f64,
    /// Blended rating computed upstream, 0–5.
    pub combined_rating: f64,
    /// Upstream-computed sentiment score.
    pub avg_sentiment: f64,
    /// Number of reviews behind the aggregate.
    pub review_count: u64,
}

/// Immutable snapshot of the two tables for one session.
///
/// Rows keep their file order; the aggregate lookup index keeps the first
/// row for a duplicated product id so lookups stay deterministic.
#[derive(Debug, Clone)]
pub struct Dataset {
    reviews: Vec<Review>,
    aggregates: Vec<ProductAggregate>,
    aggregate_index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a snapshot from already-validated records.
    pub fn new(reviews: Vec<Review>, aggregates: Vec<ProductAggregate>) -> Self {
        let mut aggregate_index = HashMap::with_capacity(aggregates.len());
        for (i, row) in aggregates.iter().enumerate() {
            aggregate_index.entry(row.product_id.clone()).or_insert(i);
        }
        Self {
            reviews,
            aggregates,
            aggregate_index,
        }
    }

    /// All reviews in file order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// All aggregate rows in file order.
    pub fn aggregates(&self) -> &[ProductAggregate] {
        &self.aggregates
    }

    /// Look up the aggregate row for a product id.
    pub fn aggregate_for(&self, product_id: &str) -> Option<&ProductAggregate> {
        self.aggregate_index
            .get(product_id)
            .map(|&i| &self.aggregates[i])
    }

    /// Load both tables from CSV files.
    ///
    /// Each file is size-checked against `max_bytes` before reading (pass
    /// `None` to skip the check), then validated against its required
    /// columns. Any structural problem is reported as a [`DatasetError`]
    /// naming the file and, where possible, the line and column.
    #[tracing::instrument(skip_all, fields(reviews = %reviews_path, ratings = %ratings_path))]
    pub fn load_csv_files(
        reviews_path: &Utf8Path,
        ratings_path: &Utf8Path,
        max_bytes: Option<usize>,
    ) -> DatasetResult<Self> {
        let reviews_content = read_input_file(reviews_path, max_bytes)?;
        let ratings_content = read_input_file(ratings_path, max_bytes)?;

        let reviews = parse_reviews(reviews_path, &reviews_content)?;
        let aggregates = parse_aggregates(ratings_path, &ratings_content)?;

        tracing::info!(
            reviews = reviews.len(),
            products = aggregates.len(),
            "dataset loaded"
        );
        Ok(Self::new(reviews, aggregates))
    }
}

/// Read a file and validate its size against the configured limit.
///
/// Checks size via metadata before reading into memory, and rejects files
/// with no content at all (a header-only table is valid and loads as zero
/// rows).
fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> DatasetResult<String> {
    let metadata = std::fs::metadata(path.as_std_path()).map_err(|source| DatasetError::Io {
        path: path.to_owned(),
        source,
    })?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            return Err(DatasetError::TooLarge {
                path: path.to_owned(),
                size,
                max,
            });
        }
    }

    let content =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?;
    if content.trim().is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_owned(),
        });
    }
    Ok(content)
}

/// Raw review row as it appears in the CSV.
#[derive(Debug, Deserialize)]
struct ReviewRow {
    asin: String,
    #[serde(rename = "reviewText_english")]
    review_text: Option<String>,
    sentiment_label: Sentiment,
    #[serde(rename = "reviewerName")]
    reviewer_name: Option<String>,
    overall: f64,
    detected_language: String,
}

fn parse_reviews(path: &Utf8Path, content: &str) -> DatasetResult<Vec<Review>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().map_err(|source| DatasetError::Csv {
        path: path.to_owned(),
        source,
    })?;
    check_columns(path, headers, REQUIRED_REVIEW_COLUMNS)?;

    let mut reviews = Vec::new();
    for result in reader.deserialize::<ReviewRow>() {
        let row = result.map_err(|source| DatasetError::Csv {
            path: path.to_owned(),
            source,
        })?;
        reviews.push(Review {
            product_id: row.asin,
            // Missing cells degrade to empty text rather than failing the load.
            text: row.review_text.unwrap_or_default(),
            sentiment: row.sentiment_label,
            reviewer: row.reviewer_name.unwrap_or_default(),
            rating: row.overall as u8,
            language: row.detected_language,
        });
    }
    Ok(reviews)
}

/// Column positions within the aggregate table.
struct RatingColumns {
    avg_rating: usize,
    combined_rating: usize,
    avg_sentiment: usize,
    review_count: usize,
}

impl RatingColumns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, Vec<String>> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        match (
            find("avg_rating"),
            find("combined_rating"),
            find("avg_sentiment"),
            find("review_count"),
        ) {
            (Some(avg_rating), Some(combined_rating), Some(avg_sentiment), Some(review_count)) => {
                Ok(Self {
                    avg_rating,
                    combined_rating,
                    avg_sentiment,
                    review_count,
                })
            }
            _ => Err(REQUIRED_RATING_COLUMNS
                .iter()
                .filter(|c| find(c).is_none())
                .map(|c| (*c).to_string())
                .collect()),
        }
    }
}

fn parse_aggregates(path: &Utf8Path, content: &str) -> DatasetResult<Vec<ProductAggregate>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Csv {
            path: path.to_owned(),
            source,
        })?
        .clone();
    let columns = RatingColumns::locate(&headers).map_err(|columns| {
        DatasetError::MissingColumns {
            path: path.to_owned(),
            columns,
        }
    })?;

    let mut aggregates = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_owned(),
            source,
        })?;
        let line = record.position().map_or(i as u64 + 2, |p| p.line());

        // Column 0 is the table's index: the product id, whatever its header.
        let product_id = record.get(0).unwrap_or_default().to_string();
        let review_count = parse_cell::<f64>(path, &record, columns.review_count, "review_count", line)?;
        aggregates.push(ProductAggregate {
            product_id,
            avg_rating: parse_cell(path, &record, columns.avg_rating, "avg_rating", line)?,
            combined_rating: parse_cell(path, &record, columns.combined_rating, "combined_rating", line)?,
            avg_sentiment: parse_cell(path, &record, columns.avg_sentiment, "avg_sentiment", line)?,
            review_count: review_count as u64,
        });
    }
    Ok(aggregates)
}

fn check_columns(
    path: &Utf8Path,
    headers: &csv::StringRecord,
    required: &[&str],
) -> DatasetResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|c| !headers.iter().any(|h| h == **c))
        .map(|c| (*c).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns {
            path: path.to_owned(),
            columns: missing,
        })
    }
}

fn parse_cell<T: std::str::FromStr>(
    path: &Utf8Path,
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> DatasetResult<T> {
    let raw = record.get(idx).unwrap_or_default();
    raw.trim().parse().map_err(|_| DatasetError::InvalidField {
        path: path.to_owned(),
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    const REVIEWS_CSV: &str = "\
asin,reviewText_english,sentiment_label,reviewerName,overall,detected_language
B001,Great guitar strings. Sound warm.,positive,Alice,5.0,en
B001,Strings broke fast,negative,Bob,2.0,en
B002,Decent capo,neutral,Carol,3.0,en
";

    const RATINGS_CSV: &str = "\
,avg_rating,combined_rating,avg_sentiment,review_count
B001,3.5,3.4,0.12,2.0
B002,3.0,3.1,0.02,1.0
";

    fn write_files(dir: &TempDir) -> (Utf8PathBuf, Utf8PathBuf) {
        let reviews = dir.path().join("reviews.csv");
        let ratings = dir.path().join("ratings.csv");
        fs::write(&reviews, REVIEWS_CSV).unwrap();
        fs::write(&ratings, RATINGS_CSV).unwrap();
        (
            Utf8PathBuf::try_from(reviews).unwrap(),
            Utf8PathBuf::try_from(ratings).unwrap(),
        )
    }

    #[test]
    fn loads_both_tables() {
        let dir = TempDir::new().unwrap();
        let (reviews, ratings) = write_files(&dir);
        let dataset = Dataset::load_csv_files(&reviews, &ratings, None).unwrap();

        assert_eq!(dataset.reviews().len(), 3);
        assert_eq!(dataset.aggregates().len(), 2);
        assert_eq!(dataset.reviews()[0].product_id, "B001");
        assert_eq!(dataset.reviews()[0].rating, 5);
        assert_eq!(dataset.reviews()[0].sentiment, Sentiment::Positive);
        assert_eq!(dataset.reviews()[2].language, "en");
    }

    #[test]
    fn aggregate_lookup() {
        let dir = TempDir::new().unwrap();
        let (reviews, ratings) = write_files(&dir);
        let dataset = Dataset::load_csv_files(&reviews, &ratings, None).unwrap();

        let agg = dataset.aggregate_for("B001").unwrap();
        assert_eq!(agg.review_count, 2);
        assert!((agg.avg_rating - 3.5).abs() < f64::EPSILON);
        assert!(dataset.aggregate_for("B999").is_none());
    }

    #[test]
    fn missing_review_text_becomes_empty() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(
            &reviews,
            "asin,reviewText_english,sentiment_label,reviewerName,overall,detected_language\n\
             B001,,neutral,Dave,3.0,en\n",
        )
        .unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(&ratings, RATINGS_CSV).unwrap();

        let dataset = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(dataset.reviews()[0].text, "");
    }

    #[test]
    fn missing_columns_are_named() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(&reviews, "asin,overall\nB001,5.0\n").unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(&ratings, RATINGS_CSV).unwrap();

        let err = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing required columns"));
        assert!(message.contains("reviewText_english"));
        assert!(message.contains("sentiment_label"));
    }

    #[test]
    fn empty_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(&reviews, "").unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(&ratings, RATINGS_CSV).unwrap();

        let err = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::Empty { .. }));
    }

    #[test]
    fn header_only_table_loads_as_zero_rows() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(
            &reviews,
            "asin,reviewText_english,sentiment_label,reviewerName,overall,detected_language\n",
        )
        .unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(&ratings, RATINGS_CSV).unwrap();

        let dataset = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap();
        assert!(dataset.reviews().is_empty());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (reviews, ratings) = write_files(&dir);
        let err = Dataset::load_csv_files(&reviews, &ratings, Some(10)).unwrap_err();
        assert!(matches!(err, DatasetError::TooLarge { .. }));
    }

    #[test]
    fn invalid_rating_cell_names_line_and_column() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(&reviews, REVIEWS_CSV).unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(
            &ratings,
            ",avg_rating,combined_rating,avg_sentiment,review_count\nB001,oops,3.4,0.1,2\n",
        )
        .unwrap();

        let err = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("avg_rating"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn invalid_sentiment_label_fails() {
        let dir = TempDir::new().unwrap();
        let reviews = dir.path().join("reviews.csv");
        fs::write(
            &reviews,
            "asin,reviewText_english,sentiment_label,reviewerName,overall,detected_language\n\
             B001,text,ecstatic,Eve,5.0,en\n",
        )
        .unwrap();
        let ratings = dir.path().join("ratings.csv");
        fs::write(&ratings, RATINGS_CSV).unwrap();

        let err = Dataset::load_csv_files(
            &Utf8PathBuf::try_from(reviews).unwrap(),
            &Utf8PathBuf::try_from(ratings).unwrap(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
    }

    #[test]
    fn duplicate_aggregate_id_first_wins() {
        let aggregates = vec![
            ProductAggregate {
                product_id: "B001".into(),
                avg_rating: 4.0,
                combined_rating: 4.0,
                avg_sentiment: 0.5,
                review_count: 10,
            },
            ProductAggregate {
                product_id: "B001".into(),
                avg_rating: 1.0,
                combined_rating: 1.0,
                avg_sentiment: -0.5,
                review_count: 1,
            },
        ];
        let dataset = Dataset::new(Vec::new(), aggregates);
        assert_eq!(dataset.aggregate_for("B001").unwrap().review_count, 10);
    }
}
