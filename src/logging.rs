use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "finpulse.log";
const DEFAULT_FILTER: &str = "finpulse=info";

/// Send tracing output to a log file. The TUI owns the terminal, so nothing is
/// written to stderr. Returns the path of the log file.
pub(crate) fn init() -> Result<PathBuf> {
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let log_path = log_dir.join(LOG_FILE);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env("FINPULSE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(log_path)
}

fn log_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("FINPULSE_LOG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = directories::ProjectDirs::from("com", "finpulse", "FinPulse")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
