//! Overview command — dataset-wide statistics.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use review_lens_core::Config;
use review_lens_core::analysis;

use super::DataPaths;

/// Arguments for the `overview` subcommand.
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// How many top products to list (defaults to config `top_products`).
    #[arg(long)]
    pub top: Option<usize>,
}

/// Show dataset-wide statistics and the products with the most reviews.
#[instrument(name = "cmd_overview", skip_all)]
pub fn cmd_overview(
    args: OverviewArgs,
    global_json: bool,
    config: &Config,
    paths: &DataPaths,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = ?args.top, "executing overview command");

    let dataset = super::load_dataset(paths, max_input)?;
    let top_n = args.top.unwrap_or(config.top_products);
    let report = analysis::dataset_overview(&dataset, top_n);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Dataset overview".bold());
    println!("\n  {} {}", "Total reviews:".cyan(), report.total_reviews);
    println!("  {} {}", "Products:".cyan(), report.distinct_products);
    println!(
        "  {} {:.1}",
        "Avg reviews per product:".cyan(),
        report.avg_reviews_per_product
    );
    println!("  {} {}", "Languages:".cyan(), report.distinct_languages);

    let counts = report.sentiment_counts;
    println!(
        "\n  {} {} / {} / {}",
        "Sentiment:".cyan(),
        format!("{} positive", counts.positive).green(),
        format!("{} neutral", counts.neutral),
        format!("{} negative", counts.negative).red(),
    );

    if !report.top_products.is_empty() {
        println!("\n  {}", "Top products by review count:".cyan());
        for product in &report.top_products {
            println!(
                "    {} — {} reviews, avg {:.2}, combined {:.2}",
                product.product_id.bold(),
                product.review_count,
                product.avg_rating,
                product.combined_rating,
            );
        }
    }

    Ok(())
}
