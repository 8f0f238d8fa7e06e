//! System tray integration
//!
//! Uses the `tray-icon` crate for the notification-area icon and its context
//! menu: "Open", "Start Jiggling", "Stop Jiggling", a separator and "Exit".
//! Only one of Start/Stop is in the menu at a time; the hidden entry is removed
//! and re-inserted at its slot when the controller changes the menu state.
//!
//! The icon starts hidden and only appears while the window is minimized to
//! the tray. Menu clicks and icon double-clicks are polled from the UI thread
//! and translated into [`TrayCommand`]s.

use mousejiggler::controller::{TrayCommand, TrayMenuState};
use mousejiggler::error::Result;

#[cfg(windows)]
use mousejiggler::error::JigglerError;
#[cfg(windows)]
use tracing::{debug, info, warn};
#[cfg(windows)]
use tray_icon::{
    Icon, TrayIconBuilder, TrayIconEvent,
    menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem},
};

/// Position of the Start/Stop entry, right after "Open"
#[cfg(windows)]
const TOGGLE_SLOT: usize = 1;

/// Notification-area icon with the jiggler's context menu
#[cfg(windows)]
pub struct TrayIcon {
    tray: tray_icon::TrayIcon,
    menu: Menu,
    open_item: MenuItem,
    start_item: MenuItem,
    stop_item: MenuItem,
    exit_item: MenuItem,
}

#[cfg(windows)]
impl TrayIcon {
    /// Build the hidden tray icon with the menu matching `menu_state`
    pub fn new(menu_state: TrayMenuState) -> Result<Self> {
        info!("Creating system tray icon");

        let menu = Menu::new();
        let open_item = MenuItem::new("Open", true, None);
        let start_item = MenuItem::new("Start Jiggling", true, None);
        let stop_item = MenuItem::new("Stop Jiggling", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        menu.append(&open_item).map_err(tray_error)?;
        menu.append(&PredefinedMenuItem::separator())
            .map_err(tray_error)?;
        menu.append(&exit_item).map_err(tray_error)?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu.clone()))
            .with_icon(Self::create_icon()?)
            .with_tooltip("Mouse Jiggler")
            .build()
            .map_err(tray_error)?;
        tray.set_visible(false).map_err(tray_error)?;

        let mut tray_icon = Self {
            tray,
            menu,
            open_item,
            start_item,
            stop_item,
            exit_item,
        };
        tray_icon.set_menu_state(menu_state);
        Ok(tray_icon)
    }

    /// Whether a real tray icon is available on this platform
    pub fn is_supported() -> bool {
        true
    }

    /// Show or hide the icon
    pub fn set_visible(&mut self, visible: bool) {
        if let Err(e) = self.tray.set_visible(visible) {
            warn!("Failed to change tray icon visibility: {e}");
        }
    }

    /// Replace the hover text
    pub fn set_tooltip(&mut self, text: &str) {
        if let Err(e) = self.tray.set_tooltip(Some(text)) {
            warn!("Failed to update tray tooltip: {e}");
        }
    }

    /// Put exactly the visible Start/Stop entries at their slot
    pub fn set_menu_state(&mut self, state: TrayMenuState) {
        // Removing an entry that is not in the menu fails harmlessly
        for item in [&self.start_item, &self.stop_item] {
            if let Err(e) = self.menu.remove(item) {
                debug!("Tray menu entry not removed: {e}");
            }
        }

        let mut slot = TOGGLE_SLOT;
        for (visible, item) in [
            (state.start_visible, &self.start_item),
            (state.stop_visible, &self.stop_item),
        ] {
            if visible {
                if let Err(e) = self.menu.insert(item, slot) {
                    warn!("Failed to insert tray menu entry: {e}");
                }
                slot += 1;
            }
        }
        debug!("Tray menu updated: {state:?}");
    }

    /// Next pending command from the menu or the icon, if any
    pub fn poll_command(&self) -> Option<TrayCommand> {
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            let id = event.id();
            let command = if id == self.open_item.id() {
                Some(TrayCommand::Open)
            } else if id == self.start_item.id() {
                Some(TrayCommand::StartJiggling)
            } else if id == self.stop_item.id() {
                Some(TrayCommand::StopJiggling)
            } else if id == self.exit_item.id() {
                Some(TrayCommand::Exit)
            } else {
                None
            };
            if command.is_some() {
                return command;
            }
        }

        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            if matches!(event, TrayIconEvent::DoubleClick { .. }) {
                return Some(TrayCommand::Open);
            }
        }

        None
    }

    /// Generate the 32x32 icon: a white pointer arrow on a blue disc
    #[expect(
        clippy::cast_precision_loss,
        reason = "Icon coordinates are below 32 and exact in f32"
    )]
    fn create_icon() -> Result<Icon> {
        const ICON_SIZE: u32 = 32;
        let size = ICON_SIZE as usize;
        let mut rgba = vec![0u8; size * size * 4];

        let centre = (size as f32 - 1.0) / 2.0;
        for y in 0..size {
            for x in 0..size {
                let idx = (y * size + x) * 4;
                let dx = x as f32 - centre;
                let dy = y as f32 - centre;
                if dx * dx + dy * dy > centre * centre {
                    continue;
                }

                // Arrow: a right triangle from (10, 7) widening downwards, plus a short tail
                let (ax, ay) = (x.saturating_sub(10), y.saturating_sub(7));
                let in_head = x >= 10 && y >= 7 && y < 21 && ax <= ay;
                let in_tail = (14..17).contains(&x) && (19..26).contains(&y);
                let (r, g, b) = if in_head || in_tail {
                    (255, 255, 255)
                } else {
                    (30, 110, 200)
                };
                rgba[idx..idx + 4].copy_from_slice(&[r, g, b, 255]);
            }
        }

        Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(tray_error)
    }
}

#[cfg(windows)]
fn tray_error(e: impl std::error::Error + Send + Sync + 'static) -> JigglerError {
    JigglerError::TrayError(Box::new(e))
}

/// Stand-in for platforms without tray support
#[cfg(not(windows))]
pub struct TrayIcon;

#[cfg(not(windows))]
impl TrayIcon {
    /// Create the stub (never fails)
    pub fn new(_menu_state: TrayMenuState) -> Result<Self> {
        tracing::info!("System tray not available on this platform; trayify will minimize");
        Ok(Self)
    }

    /// No real tray icon here
    pub fn is_supported() -> bool {
        false
    }

    /// No-op
    pub fn set_visible(&mut self, _visible: bool) {}

    /// No-op
    pub fn set_tooltip(&mut self, text: &str) {
        tracing::debug!("Tray tooltip (not shown): {text}");
    }

    /// No-op
    pub fn set_menu_state(&mut self, _state: TrayMenuState) {}

    /// Never yields commands
    pub fn poll_command(&self) -> Option<TrayCommand> {
        None
    }
}
