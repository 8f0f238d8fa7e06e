//! Logging system initialization
//!
//! Writes `tracing` output to `%APPDATA%\MouseJiggler\app.log`. Each launch
//! starts a fresh file; earlier sessions are shifted to `app.log.1`,
//! `app.log.2`, ... and the oldest beyond [`MAX_LOG_FILES`] is dropped.

use crate::config::ConfigManager;
use crate::error::{JigglerError, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of previous sessions kept next to the current log
pub const MAX_LOG_FILES: u8 = 5;

const LOG_PREFIX: &str = "app";
const LOG_SUFFIX: &str = "log";

/// Initialize the logging system
///
/// Log level defaults to INFO and can be overridden with `RUST_LOG`.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::get_app_dir();
    std::fs::create_dir_all(&log_dir)?;

    rotate_session_logs(&log_dir, &format!("{LOG_PREFIX}.{LOG_SUFFIX}"), MAX_LOG_FILES)?;

    // Rotation is handled per session above, not by the appender
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(&log_dir)
        .map_err(|e| JigglerError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| JigglerError::ConfigError(Box::new(e)))?;

    tracing::info!("Logging to {}", log_dir.display());
    Ok(())
}

/// Shift `name`, `name.1`, ... up by one inside `dir`, keeping at most `keep` old sessions
fn rotate_session_logs(dir: &Path, name: &str, keep: u8) -> Result<()> {
    let current = dir.join(name);
    if !current.exists() {
        return Ok(());
    }

    let numbered = |i: u8| dir.join(format!("{name}.{i}"));

    let oldest = numbered(keep);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }
    for i in (1..keep).rev() {
        let from = numbered(i);
        if from.exists() {
            std::fs::rename(&from, numbered(i + 1))?;
        }
    }
    std::fs::rename(&current, numbered(1))?;
    Ok(())
}
