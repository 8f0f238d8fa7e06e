//! Mouse Jiggler - keeps the computer from going idle
//!
//! Injects a tiny pointer movement at a configurable interval so the screensaver
//! and lock screen never kick in. `JiggleController` owns the jiggle state machine
//! and drives three injected collaborators: a `TickTimer`, a `PointerNudger` and a
//! `SettingsStore`. The Slint window and tray icon live in the binary and only
//! forward events to the controller and apply its notifications.
//!
//! # Platforms
//!
//! Pointer injection, the tray icon and the single-instance mutex are Windows
//! features. Elsewhere they fall back to logging stubs.

// Module declarations
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod jiggle;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{JigglerError, Result};
