//! File logging setup.
//!
//! The crate logs through the `log` facade; [`init`] installs a `fern`
//! dispatcher that writes timestamped lines to the configured log file.

use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

static LOG_FILE: OnceCell<PathBuf> = OnceCell::new();

/// Install the global logger according to the configuration.
///
/// Returns the log file in use, or `None` when logging is disabled. Calling
/// this again after a successful install returns the first log file and leaves
/// the logger untouched.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = LOG_FILE.get_or_try_init(|| -> Result<PathBuf> {
        let path = match &config.file {
            Some(path) => path.clone(),
            None => get_log_file_path()?,
        };
        let level = config.level_filter()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            // sqlx logs every statement at info
            .level_for("sqlx", log::LevelFilter::Warn)
            .chain(file)
            .apply()
            .context("A global logger is already installed")?;

        Ok(path)
    })?;

    Ok(Some(path.clone()))
}

/// Get the default log file path inside the user's data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Returns `true` once [`init`] has installed the file logger.
pub fn is_initialized() -> bool {
    LOG_FILE.get().is_some()
}
