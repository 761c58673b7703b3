//! File logging
//!
//! The terminal is owned by the UI, so log output goes to a file in the
//! platform data directory. The filter is read from `PRIZEWHEEL_LOG`
//! (for example `PRIZEWHEEL_LOG=prizewheel=debug`) and defaults to `info`.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PRIZEWHEEL_LOG";
const LOG_FILE: &str = "prizewheel.log";

/// Directory the log file is written to
pub fn log_dir() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("", "", "prizewheel") {
        dirs.data_local_dir().to_path_buf()
    } else {
        std::env::temp_dir().join("prizewheel")
    }
}

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
