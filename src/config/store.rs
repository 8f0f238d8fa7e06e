//! Settings persistence collaborator
//!
//! The controller never touches the filesystem directly; it hands a fresh
//! [`JigglerSettings`] snapshot to a [`SettingsStore`] after every change.

use crate::config::manager::ConfigManager;
use crate::config::models::JigglerSettings;
use crate::error::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Where settings are read from at startup and written to after each change
pub trait SettingsStore {
    /// Read the persisted settings (defaults if nothing is stored yet)
    fn load(&self) -> Result<JigglerSettings>;

    /// Replace the persisted settings
    fn save(&mut self, settings: &JigglerSettings) -> Result<()>;
}

/// JSON settings file on disk
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location
    pub fn default_location() -> Self {
        Self::new(ConfigManager::get_config_path())
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<JigglerSettings> {
        ConfigManager::load_from(&self.path)
    }

    fn save(&mut self, settings: &JigglerSettings) -> Result<()> {
        ConfigManager::save_to(&self.path, settings)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    current: JigglerSettings,
    saves: Vec<JigglerSettings>,
}

/// In-process settings store
///
/// Clones share the same state, so a caller can keep one handle and give the
/// other to the controller to observe what gets persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySettingsStore {
    /// Store pre-populated with `settings`
    pub fn with_settings(settings: JigglerSettings) -> Self {
        let store = Self::default();
        store.state.borrow_mut().current = settings;
        store
    }

    /// Latest saved (or initial) settings
    pub fn current(&self) -> JigglerSettings {
        self.state.borrow().current
    }

    /// Every snapshot saved so far, oldest first
    pub fn saves(&self) -> Vec<JigglerSettings> {
        self.state.borrow().saves.clone()
    }

    /// Number of saves performed
    pub fn save_count(&self) -> usize {
        self.state.borrow().saves.len()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<JigglerSettings> {
        Ok(self.current())
    }

    fn save(&mut self, settings: &JigglerSettings) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.current = *settings;
        state.saves.push(*settings);
        Ok(())
    }
}
