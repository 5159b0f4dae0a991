//! Summary command — extractive review summary.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use review_lens_core::Config;
use review_lens_core::analysis;

use super::DataPaths;

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Product id (ASIN) to summarize. Omit for the whole corpus.
    pub product_id: Option<String>,

    /// Character budget (defaults to config `summary_max_chars`).
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Print a short extractive summary for one product or the whole corpus.
#[instrument(name = "cmd_summary", skip_all)]
pub fn cmd_summary(
    args: SummaryArgs,
    global_json: bool,
    config: &Config,
    paths: &DataPaths,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(product_id = ?args.product_id, "executing summary command");

    let dataset = super::load_dataset(paths, max_input)?;
    let max_chars = args.max_chars.unwrap_or(config.summary_max_chars);

    let texts: Vec<&str> = dataset
        .reviews()
        .iter()
        .filter(|r| {
            args.product_id
                .as_deref()
                .is_none_or(|id| r.product_id == id)
        })
        .map(|r| r.text.as_str())
        .collect();

    if let Some(ref product_id) = args.product_id
        && texts.is_empty()
    {
        bail!("no reviews found for product {product_id}");
    }

    let summary = analysis::summarize(&texts, max_chars);

    if global_json {
        let payload = serde_json::json!({
            "product_id": args.product_id,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match args.product_id {
        Some(ref id) => println!("{}", format!("Summary for {id}").bold()),
        None => println!("{}", "Summary across all reviews".bold()),
    }
    if summary.is_empty() {
        println!("\n  no review text available");
    } else {
        println!("\n  {summary}");
    }

    Ok(())
}
