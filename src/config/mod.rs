//! Configuration management module
//!
//! Handles the persisted settings record and the store the controller writes
//! it through. Settings live in `%APPDATA%\MouseJiggler\settings.json`.

pub mod manager;
pub mod models;
pub mod store;

pub use manager::ConfigManager;
pub use models::JigglerSettings;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
