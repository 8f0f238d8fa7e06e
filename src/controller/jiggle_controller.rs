//! Jiggle controller implementation
//!
//! Owns the jiggle state machine (Disarmed/Armed), the Zen and
//! minimize-on-startup preferences and the period, and drives the injected
//! timer, pointer and settings store. Everything runs on the UI thread.

use crate::config::{JigglerSettings, SettingsStore};
use crate::controller::notification::{Notification, TrayCommand, TrayMenuState};
use crate::controller::options::StartupOptions;
use crate::jiggle::{JIGGLE_DISTANCE, JigglePeriod, PointerNudger, TickTimer, ZEN_DISTANCE};
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

/// Tray tooltip while the timer is disarmed
pub const NOT_JIGGLING_TEXT: &str = "Not jiggling the mouse.";

/// External collaborators the controller drives
pub struct Collaborators {
    /// Receives a settings snapshot after every persisted change
    pub settings_store: Box<dyn SettingsStore>,
    /// Moves the system pointer on each tick
    pub pointer: Box<dyn PointerNudger>,
    /// Fires [`JiggleController::tick`] while armed
    pub timer: Box<dyn TickTimer>,
}

type Subscriber = Box<dyn Fn(&Notification)>;

/// The jiggle state machine
pub struct JiggleController {
    jiggle_on_startup: bool,
    minimize_on_startup: bool,
    zen_jiggle: bool,
    period: JigglePeriod,
    jiggling: bool,
    /// Direction of the next visible jiggle (`true` = positive)
    zig: bool,
    /// One-shot latch, cleared by the first `on_shown`
    first_shown: bool,
    minimized_to_tray: bool,
    settings_store: Box<dyn SettingsStore>,
    pointer: Box<dyn PointerNudger>,
    timer: Box<dyn TickTimer>,
    subscribers: Vec<Subscriber>,
}

impl JiggleController {
    /// Create a disarmed controller and persist the effective settings once
    pub fn new(options: StartupOptions, collaborators: Collaborators) -> Self {
        let Collaborators {
            settings_store,
            pointer,
            mut timer,
        } = collaborators;

        timer.set_interval(options.jiggle_period.timer_interval());
        timer.set_enabled(false);

        let mut controller = Self {
            jiggle_on_startup: options.jiggle_on_startup,
            minimize_on_startup: options.minimize_on_startup,
            zen_jiggle: options.zen_jiggle,
            period: options.jiggle_period,
            jiggling: false,
            zig: true,
            first_shown: true,
            minimized_to_tray: false,
            settings_store,
            pointer,
            timer,
            subscribers: Vec::new(),
        };

        info!(
            "Jiggle controller created: period {} s, zen {}, minimize on startup {}, jiggle on startup {}",
            controller.period,
            controller.zen_jiggle,
            controller.minimize_on_startup,
            controller.jiggle_on_startup
        );
        controller.persist();
        controller
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, subscriber: impl Fn(&Notification) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Whether the timer is armed
    pub fn is_jiggling(&self) -> bool {
        self.jiggling
    }

    /// Whether Zen jiggling is enabled
    pub fn zen_jiggle(&self) -> bool {
        self.zen_jiggle
    }

    /// Whether the window minimizes to the tray on first display
    pub fn minimize_on_startup(&self) -> bool {
        self.minimize_on_startup
    }

    /// Current period
    pub fn period(&self) -> JigglePeriod {
        self.period
    }

    /// Direction of the next visible jiggle (`true` = `+4`)
    pub fn zig(&self) -> bool {
        self.zig
    }

    /// Whether the window is currently hidden in the tray
    pub fn is_minimized_to_tray(&self) -> bool {
        self.minimized_to_tray
    }

    /// Whether the first-display latch has been consumed
    pub fn has_been_shown(&self) -> bool {
        !self.first_shown
    }

    /// Visibility of the Start/Stop tray entries
    pub fn tray_menu(&self) -> TrayMenuState {
        TrayMenuState::for_jiggling(self.jiggling)
    }

    /// Period label text, e.g. `"1 s"`
    pub fn period_label(&self) -> String {
        format!("{} s", self.period)
    }

    /// Tray tooltip describing the current state
    pub fn tray_tooltip(&self) -> String {
        if self.jiggling {
            let with = if self.zen_jiggle { "with" } else { "without" };
            format!("Jiggling mouse every {} s, {with} Zen.", self.period)
        } else {
            NOT_JIGGLING_TEXT.to_string()
        }
    }

    /// Settings snapshot as it is persisted
    pub fn settings(&self) -> JigglerSettings {
        JigglerSettings {
            minimize_on_startup: self.minimize_on_startup,
            zen_jiggle: self.zen_jiggle,
            jiggle_period: self.period.persisted_millis(),
        }
    }

    /// Handle the main window being displayed
    ///
    /// Only the first call does anything: it arms the timer if jiggling was
    /// requested at startup and minimizes to the tray if configured.
    pub fn on_shown(&mut self) {
        if !self.first_shown {
            return;
        }
        self.first_shown = false;
        debug!("First display of the main window");

        if self.jiggle_on_startup {
            self.set_jiggling(true);
        }
        if self.minimize_on_startup {
            info!("Minimizing to tray on startup");
            self.minimize_to_tray();
        }
    }

    /// Arm or disarm the jiggle timer
    pub fn set_jiggling(&mut self, enabled: bool) {
        if self.jiggling == enabled {
            return;
        }
        self.jiggling = enabled;
        self.timer.set_enabled(enabled);
        info!("Jiggling {}", if enabled { "started" } else { "stopped" });

        self.notify(&Notification::JigglingChanged(enabled));
        self.notify(&Notification::TrayMenuChanged(self.tray_menu()));
        self.refresh_tray_tooltip();
    }

    /// Enable or disable Zen jiggling (touch the pointer without moving it)
    pub fn set_zen_jiggle(&mut self, enabled: bool) {
        if self.zen_jiggle == enabled {
            return;
        }
        self.zen_jiggle = enabled;
        info!("Zen jiggle {}", if enabled { "enabled" } else { "disabled" });

        self.persist();
        self.notify(&Notification::ZenJiggleChanged(enabled));
        self.refresh_tray_tooltip();
    }

    /// Change the minimize-on-startup preference (persisted only)
    pub fn set_minimize_on_startup(&mut self, enabled: bool) {
        if self.minimize_on_startup == enabled {
            return;
        }
        self.minimize_on_startup = enabled;
        info!("Minimize on startup set to {enabled}");

        self.persist();
        self.notify(&Notification::MinimizeOnStartupChanged(enabled));
    }

    /// Set the period in seconds; returns `false` and changes nothing if invalid
    pub fn set_period(&mut self, seconds: f64) -> bool {
        match JigglePeriod::new(seconds) {
            Some(period) => {
                self.apply_period(period);
                true
            }
            None => {
                debug!("Ignoring invalid jiggle period {seconds}");
                false
            }
        }
    }

    /// Set the period from free text; returns `false` and changes nothing if invalid
    pub fn set_period_text(&mut self, text: &str) -> bool {
        match JigglePeriod::parse(text) {
            Some(period) => {
                self.apply_period(period);
                true
            }
            None => {
                debug!("Ignoring invalid jiggle period text {text:?}");
                false
            }
        }
    }

    fn apply_period(&mut self, period: JigglePeriod) {
        self.period = period;
        self.persist();
        self.timer.set_interval(period.timer_interval());
        debug!("Jiggle period set to {period} s");

        self.notify(&Notification::JigglePeriodChanged {
            seconds: period.as_secs_f64(),
            label: self.period_label(),
        });
        self.refresh_tray_tooltip();
    }

    /// Timer callback: nudge the pointer once
    pub fn tick(&mut self) {
        if !self.jiggling {
            debug!("Tick while disarmed ignored");
            return;
        }

        let delta = if self.zen_jiggle {
            ZEN_DISTANCE
        } else if self.zig {
            JIGGLE_DISTANCE
        } else {
            -JIGGLE_DISTANCE
        };
        self.pointer.nudge(delta);
        self.zig = !self.zig;
    }

    /// Hide the window and show the tray icon
    pub fn minimize_to_tray(&mut self) {
        self.minimized_to_tray = true;
        debug!("Minimized to tray");

        self.notify(&Notification::MinimizedToTray);
        self.notify(&Notification::TrayTooltipChanged(self.tray_tooltip()));
    }

    /// Show the window again and hide the tray icon
    pub fn restore_from_tray(&mut self) {
        self.minimized_to_tray = false;
        debug!("Restored from tray");

        self.notify(&Notification::RestoredFromTray);
        self.on_shown();
    }

    /// Dispatch a tray command; `Break` means the process should exit
    pub fn handle_tray_command(&mut self, command: TrayCommand) -> ControlFlow<()> {
        debug!("Tray command: {command:?}");
        match command {
            TrayCommand::Open => self.restore_from_tray(),
            TrayCommand::StartJiggling => self.set_jiggling(true),
            TrayCommand::StopJiggling => self.set_jiggling(false),
            TrayCommand::Exit => {
                info!("Exit requested from tray");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn refresh_tray_tooltip(&self) {
        if self.minimized_to_tray {
            self.notify(&Notification::TrayTooltipChanged(self.tray_tooltip()));
        }
    }

    fn persist(&mut self) {
        let settings = self.settings();
        if let Err(e) = self.settings_store.save(&settings) {
            warn!(
                "Failed to save settings: {}. Continuing with in-memory settings.",
                e
            );
        }
    }

    fn notify(&self, notification: &Notification) {
        for subscriber in &self.subscribers {
            subscriber(notification);
        }
    }
}
