//! File logging for Bugterm.
//!
//! The terminal belongs to the UI (or to the user's editor) for the whole run,
//! so log records never go to stdout or stderr. When enabled they are written
//! to a log file through a `fern` dispatch behind the `log` facade.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Default log file location under the XDG data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

pub fn level_filter(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", level))
}

/// Build the dispatch writing to `path` without installing it
pub fn dispatch(level: LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger from config.
///
/// Returns the log file path when logging is enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = level_filter(&config.level)?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };

    dispatch(level, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(Some(path))
}
