//! Analyze command — full per-product report.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use review_lens_core::Config;
use review_lens_core::analysis;

use super::DataPaths;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Product id (ASIN) to analyze.
    pub product_id: String,

    /// How many top words to report (defaults to config `top_words`).
    #[arg(long)]
    pub top: Option<usize>,

    /// Summary character budget (defaults to config `summary_max_chars`).
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Also print sample reviews.
    #[arg(long)]
    pub samples: bool,
}

/// Analyze one product and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(product_id = %args.product_id))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    paths: &DataPaths,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(product_id = %args.product_id, top = ?args.top, "executing analyze command");

    let dataset = super::load_dataset(paths, max_input)?;
    let top_n = args.top.unwrap_or(config.top_words);
    let max_chars = args.max_chars.unwrap_or(config.summary_max_chars);

    // NoReviews / NoAggregate surface here as clean errors with the
    // product id in the message.
    let report = analysis::analyze_product(&dataset, &args.product_id, top_n, max_chars)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("Product {}", report.product_id).bold());
    println!("\n  {} {}", "Reviews:".cyan(), report.review_count);

    if !report.top_words.is_empty() {
        let list: Vec<_> = report
            .top_words
            .iter()
            .map(|w| format!("\"{}\" ({})", w.word, w.count))
            .collect();
        println!("\n  {} {}", "Top words:".cyan(), list.join(", "));
    }

    let pct = report.sentiment_percentages;
    println!(
        "\n  {} {} / {} / {}",
        "Sentiment:".cyan(),
        format!("positive {:.1}%", pct.positive).green(),
        format!("neutral {:.1}%", pct.neutral),
        format!("negative {:.1}%", pct.negative).red(),
    );

    let rating = &report.rating;
    println!(
        "\n  {} {:.2}/5.0 average, {:.2}/5.0 combined, sentiment score {:.3}, {} reviews",
        "Rating:".cyan(),
        rating.avg_rating,
        rating.combined_rating,
        rating.avg_sentiment,
        rating.review_count,
    );

    if !report.summary.is_empty() {
        println!("\n  {} {}", "Summary:".cyan(), report.summary);
    }

    if args.samples {
        for sample in &report.samples {
            println!(
                "\n  {} {} — {} stars, {}",
                "Sample:".cyan(),
                sample.reviewer,
                sample.rating,
                sample.sentiment,
            );
            println!("    {}", sample.excerpt);
        }
    }

    Ok(())
}
