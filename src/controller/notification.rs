//! Change notifications and tray vocabulary shared by the controller and the GUI shell

/// Named change published by the controller after each state mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Timer armed (`true`) or disarmed
    JigglingChanged(bool),
    /// Zen jiggling toggled
    ZenJiggleChanged(bool),
    /// Minimize-on-startup preference toggled
    MinimizeOnStartupChanged(bool),
    /// A new period was accepted
    JigglePeriodChanged {
        /// New period in seconds
        seconds: f64,
        /// Text for the period label, e.g. `"2.5 s"`
        label: String,
    },
    /// Start/Stop tray entries changed visibility
    TrayMenuChanged(TrayMenuState),
    /// Tray tooltip text changed
    TrayTooltipChanged(String),
    /// Main window should hide and the tray icon appear
    MinimizedToTray,
    /// Main window should reappear and the tray icon hide
    RestoredFromTray,
}

/// Visibility of the two mutually exclusive tray entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrayMenuState {
    /// "Start Jiggling" shown
    pub start_visible: bool,
    /// "Stop Jiggling" shown
    pub stop_visible: bool,
}

impl TrayMenuState {
    /// Menu state matching the jiggling flag: Start while disarmed, Stop while armed
    pub fn for_jiggling(jiggling: bool) -> Self {
        Self {
            start_visible: !jiggling,
            stop_visible: jiggling,
        }
    }
}

/// Commands coming from the tray icon and its context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Restore the main window (menu "Open" or icon double-click)
    Open,
    /// Arm the jiggle timer
    StartJiggling,
    /// Disarm the jiggle timer
    StopJiggling,
    /// Quit immediately
    Exit,
}
