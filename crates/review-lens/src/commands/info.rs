//! Info command — package and configuration details.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use review_lens_core::Config;
use review_lens_core::config::ConfigSources;

use super::DataPaths;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Show package name, version, config sources, and resolved data paths.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    paths: &DataPaths,
) -> anyhow::Result<()> {
    if global_json {
        let payload = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "config_file": sources.primary_file(),
            "user_config_dir": review_lens_core::config::user_config_dir(),
            "log_level": config.log_level.as_str(),
            "reviews_path": paths.reviews,
            "ratings_path": paths.ratings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{} {}",
        env!("CARGO_PKG_NAME").bold(),
        env!("CARGO_PKG_VERSION")
    );
    match sources.primary_file() {
        Some(file) => println!("  {} {file}", "Config:".cyan()),
        None => println!("  {} defaults (no config file found)", "Config:".cyan()),
    }
    println!("  {} {}", "Log level:".cyan(), config.log_level.as_str());
    println!("  {} {}", "Reviews:".cyan(), paths.reviews);
    println!("  {} {}", "Ratings:".cyan(), paths.ratings);

    Ok(())
}
