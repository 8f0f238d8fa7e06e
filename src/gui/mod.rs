//! GUI module
//!
//! Provides the Slint main window, the system tray icon and the Slint-backed
//! jiggle timer, and connects them to the jiggle controller.

pub mod gui_controller;
pub mod timer;
pub mod tray;

pub use gui_controller::GuiController;
