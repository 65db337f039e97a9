//! Tracing setup.
//!
//! Log output goes to a file, never to the terminal: stdout and stderr belong
//! to the alternate screen for the whole run, and a stray write would shred
//! the interface. The writer is non-blocking so a slow disk cannot stall the
//! render loop; the returned guard must stay alive until exit or buffered
//! lines are lost.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Filter applied when neither the config, the CLI, nor `RUST_LOG` set one.
pub const DEFAULT_FILTER: &str = "termfolio=info";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to open log file: {0}")]
    Open(std::io::Error),

    #[error("Could not determine state directory for logs")]
    NoStateDir,

    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Resolve the log file path.
///
/// An explicit `[log] file` wins; otherwise logs land in the platform state
/// directory under a per-day name (`termfolio/termfolio.2026-08-23.log`), so
/// old sessions age out by date instead of growing one unbounded file.
pub fn log_path(config: &LogConfig) -> Result<PathBuf, LoggingError> {
    if let Some(path) = &config.file {
        return Ok(path.clone());
    }

    let base = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(LoggingError::NoStateDir)?;
    let name = format!("termfolio.{}.log", chrono::Local::now().format("%Y-%m-%d"));
    Ok(base.join("termfolio").join(name))
}

/// Install the global subscriber writing to the resolved log file.
///
/// Filter precedence: `--log-filter` flag, then `[log] filter` from the
/// config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn init(config: &LogConfig, cli_filter: Option<&str>) -> Result<WorkerGuard, LoggingError> {
    let path = log_path(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(LoggingError::CreateDir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(LoggingError::Open)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = match cli_filter.or(config.filter.as_deref()) {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| LoggingError::Filter(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}
