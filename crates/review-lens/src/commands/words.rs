//! Words command — word-frequency counts.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use review_lens_core::Config;
use review_lens_core::analysis;

use super::DataPaths;

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Product id (ASIN) to count words for. Omit for the whole corpus.
    pub product_id: Option<String>,

    /// How many words to report (defaults to config `top_words`).
    #[arg(long)]
    pub top: Option<usize>,
}

/// Print the most frequent words for one product or the whole corpus.
#[instrument(name = "cmd_words", skip_all)]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    config: &Config,
    paths: &DataPaths,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(product_id = ?args.product_id, top = ?args.top, "executing words command");

    let dataset = super::load_dataset(paths, max_input)?;
    let top_n = args.top.unwrap_or(config.top_words);

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

    let counts = analysis::top_words(&texts, top_n);

    if global_json {
        let payload = serde_json::json!({
            "product_id": args.product_id,
            "top_words": counts,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match args.product_id {
        Some(ref id) => println!("{}", format!("Top words for {id}").bold()),
        None => println!("{}", "Top words across all reviews".bold()),
    }
    if counts.is_empty() {
        println!("\n  no qualifying words");
        return Ok(());
    }
    for entry in &counts {
        println!("  {} ({} times)", entry.word.cyan(), entry.count);
    }

    Ok(())
}
