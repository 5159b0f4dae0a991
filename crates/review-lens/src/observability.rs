//! Logging and tracing initialization.
//!
//! Diagnostics go to stderr (and optionally to a JSONL file via
//! `tracing-appender`); stdout is reserved for command output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log output should go, resolved from env vars and config.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`REVIEW_LENS_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Directory for daily JSONL log files (`REVIEW_LENS_LOG_DIR` or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log destinations: env vars win over the config file value.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("REVIEW_LENS_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("REVIEW_LENS_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` takes precedence when set; otherwise the level derives from
/// `--quiet` / `--verbose` flags, falling back to the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the tracing subscriber.
///
/// Installs a compact stderr layer, plus a JSONL file layer when a log
/// destination is configured. The returned guard must be held for the
/// process lifetime so buffered log lines flush on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let file_appender = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            Some(tracing_appender::rolling::never(dir, name))
        }
        (None, Some(dir)) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            Some(tracing_appender::rolling::daily(dir, "review-lens.jsonl"))
        }
        (None, None) => None,
    };

    if let Some(appender) = file_appender {
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = fmt::layer().json().with_writer(writer);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        Ok(None)
    }
}
