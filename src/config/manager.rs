//! Settings file management
//!
//! Loads and saves `%APPDATA%\MouseJiggler\settings.json`. Saves are atomic:
//! the JSON is written to a temporary file in the same directory and then
//! persisted over the real one.

use crate::config::models::JigglerSettings;
use crate::error::{JigglerError, Result, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory name under `%APPDATA%`
pub const APP_DIR_NAME: &str = "MouseJiggler";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Settings file manager
pub struct ConfigManager;

impl ConfigManager {
    /// Per-user application directory: `%APPDATA%\MouseJiggler`
    ///
    /// Falls back to the working directory when `APPDATA` is not set.
    pub fn get_app_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    }

    /// Default settings path: `%APPDATA%\MouseJiggler\settings.json`
    pub fn get_config_path() -> PathBuf {
        Self::get_app_dir().join(SETTINGS_FILE_NAME)
    }

    /// Load settings from `path`
    ///
    /// A missing or unparsable file yields default settings; only IO failures
    /// other than "not found" are returned as errors.
    pub fn load_from(path: &Path) -> Result<JigglerSettings> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Settings file not found at {}, using defaults", path.display());
                return Ok(JigglerSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                info!("Settings loaded from {}", path.display());
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to parse settings, using defaults: {}", e);
                Ok(JigglerSettings::default())
            }
        }
    }

    /// Atomically write settings to `path`, creating the parent directory if needed
    pub fn save_to(path: &Path, settings: &JigglerSettings) -> Result<()> {
        let dir = path.parent().ok_or_else(|| {
            JigglerError::ConfigError(StringError::new(format!(
                "Settings path has no parent directory: {}",
                path.display()
            )))
        })?;
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(settings)?;
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path).map_err(|e| JigglerError::IoError(e.error))?;

        debug!("Settings saved to {}", path.display());
        Ok(())
    }
}
