//! Products command — product ids with review counts.

use std::collections::HashMap;

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::DataPaths;

/// Arguments for the `products` subcommand.
#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// Maximum number of products to list.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// A product id with its review count.
#[derive(Debug, Serialize)]
struct ProductEntry {
    product_id: String,
    review_count: usize,
}

/// List product ids in order of first appearance with review counts.
#[instrument(name = "cmd_products", skip_all)]
pub fn cmd_products(
    args: ProductsArgs,
    global_json: bool,
    paths: &DataPaths,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(limit = ?args.limit, "executing products command");

    let dataset = super::load_dataset(paths, max_input)?;

    let mut entries: Vec<ProductEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for review in dataset.reviews() {
        if let Some(&i) = index.get(&review.product_id) {
            entries[i].review_count += 1;
        } else {
            index.insert(review.product_id.clone(), entries.len());
            entries.push(ProductEntry {
                product_id: review.product_id.clone(),
                review_count: 1,
            });
        }
    }
    let total = entries.len();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", format!("{total} products").bold());
    for entry in &entries {
        println!(
            "  {} ({} reviews)",
            entry.product_id.cyan(),
            entry.review_count
        );
    }

    Ok(())
}
