//! Jiggle controller module
//!
//! The controller is the whole application core: a two-state machine
//! (Disarmed/Armed) plus the Zen, minimize-on-startup and period settings.
//!
//! # Event Flow
//!
//! ```text
//! Window callbacks ─┐
//! Tray commands ────┼─> JiggleController ─> Notification ─> GUI shell (window, tray)
//! Timer ticks ──────┘          │
//!                              ├─> PointerNudger (each tick)
//!                              ├─> TickTimer (arm/disarm, interval)
//!                              └─> SettingsStore (each persisted change)
//! ```
//!
//! All of it runs on the UI thread, so the controller holds no locks. Ticks
//! and UI events are serialized by the event loop.

pub mod jiggle_controller;
pub mod notification;
pub mod options;

pub use jiggle_controller::{Collaborators, JiggleController, NOT_JIGGLING_TEXT};
pub use notification::{Notification, TrayCommand, TrayMenuState};
pub use options::StartupOptions;
