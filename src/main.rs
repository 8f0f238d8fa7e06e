//! Mouse Jiggler - virtually jiggles the mouse, keeping the computer from going idle
//!
//! Parses the command line, enforces a single instance, loads the saved
//! settings and hands control to the GUI event loop.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use clap::Parser;
use gui::GuiController;
use mousejiggler::{
    cli::Cli,
    config::{FileSettingsStore, SettingsStore},
    controller::StartupOptions,
    error::get_user_friendly_error,
    utils,
};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
fn main() -> Result<()> {
    // Parse first so --help and --version never touch the log directory
    let cli = Cli::parse();

    utils::init_logging().context("Failed to initialize logging system")?;
    info!("Mouse Jiggler v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("Command line: {:?}", cli);

    // Only one instance may jiggle at a time
    let _single_instance_guard = match utils::SingleInstanceGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            error!("Single instance check failed: {}", e);
            show_error_and_exit(&get_user_friendly_error(&e));
            return Err(e.into());
        }
    };
    info!("Single instance check passed");

    let settings_store = FileSettingsStore::default_location();
    let settings = settings_store
        .load()
        .context("Failed to load saved settings")?;
    info!(
        "Settings loaded from {}: {:?}",
        settings_store.path().display(),
        settings
    );

    let options = StartupOptions::resolve(&cli, &settings);
    info!("Startup options: {:?}", options);

    let gui_controller = match GuiController::new(options, Box::new(settings_store)) {
        Ok(gui_controller) => gui_controller,
        Err(e) => {
            error!("Failed to create GUI: {}", e);
            show_error_and_exit(&format!(
                "Failed to start Mouse Jiggler:\n\n{}",
                get_user_friendly_error(&e)
            ));
            return Err(anyhow::Error::from(e).context("Failed to create GUI controller"));
        }
    };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Mouse Jiggler shutting down");
    Ok(())
}

/// Shows an error dialog and exits the application.
#[cfg(windows)]
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Mouse Jiggler - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}

/// Shows an error dialog and exits the application (non-Windows fallback).
#[cfg(not(windows))]
fn show_error_and_exit(message: &str) {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
