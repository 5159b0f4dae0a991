//! Library interface for the `review-lens` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                 Log filter (e.g., debug, review-lens=trace)
    REVIEW_LENS_LOG_PATH     Explicit log file path
    REVIEW_LENS_LOG_DIR      Log directory
    REVIEW_LENS_REVIEWS_PATH Review table CSV path
    REVIEW_LENS_RATINGS_PATH Aggregate table CSV path
";

/// Command-line interface definition for review-lens.
#[derive(Parser)]
#[command(name = "review-lens")]
#[command(about = "Descriptive analytics over product review datasets", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Path to the review table CSV (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub reviews: Option<Utf8PathBuf>,

    /// Path to the aggregate ratings CSV (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub ratings: Option<Utf8PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Show dataset-wide statistics and top products
    Overview(commands::overview::OverviewArgs),

    /// Analyze one product: sentiment, words, ratings, summary
    Analyze(commands::analyze::AnalyzeArgs),

    /// Show the most frequent words for a product or the whole corpus
    Words(commands::words::WordsArgs),

    /// Show an extractive summary for a product or the whole corpus
    Summary(commands::summary::SummaryArgs),

    /// List product ids with their review counts
    Products(commands::products::ProductsArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
