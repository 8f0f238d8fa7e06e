//! GUI controller
//!
//! Builds the Slint window, the tray icon and the jiggle timer, hands them to a
//! [`JiggleController`] and runs the event loop. Window callbacks and tray
//! commands are forwarded to the controller; its notifications are applied back
//! to the window and the tray.
//!
//! The controller sits in an `Rc<RefCell<_>>` shared by every callback. Each
//! callback takes its own short `borrow_mut`, and notification handlers never
//! touch the controller, so borrows never overlap.

use crate::MainWindow;
use crate::gui::timer::SlintTickTimer;
use crate::gui::tray::TrayIcon;
use mousejiggler::config::SettingsStore;
use mousejiggler::controller::{Collaborators, JiggleController, Notification, StartupOptions};
use mousejiggler::error::{JigglerError, Result};
use mousejiggler::jiggle::SystemPointer;
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How often pending tray events are drained
const TRAY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the window, tray and controller for the lifetime of the event loop
pub struct GuiController {
    window: MainWindow,
    controller: Rc<RefCell<JiggleController>>,
    tray: Rc<RefCell<TrayIcon>>,
    tray_poll: Timer,
}

impl GuiController {
    /// Create the window, tray icon and controller
    pub fn new(options: StartupOptions, settings_store: Box<dyn SettingsStore>) -> Result<Self> {
        info!("Creating main window");
        let window = MainWindow::new().map_err(|e| JigglerError::GuiError(Box::new(e)))?;

        let timer = SlintTickTimer::new();
        let tick_slot = timer.handler_slot();

        let controller = Rc::new(RefCell::new(JiggleController::new(
            options,
            Collaborators {
                settings_store,
                pointer: Box::new(SystemPointer::new()),
                timer: Box::new(timer),
            },
        )));

        let weak_controller = Rc::downgrade(&controller);
        *tick_slot.borrow_mut() = Some(Box::new(move || {
            if let Some(controller) = weak_controller.upgrade() {
                controller.borrow_mut().tick();
            }
        }));

        let tray = Rc::new(RefCell::new(TrayIcon::new(controller.borrow().tray_menu())?));

        let gui = Self {
            window,
            controller,
            tray,
            tray_poll: Timer::default(),
        };
        gui.sync_window();
        gui.subscribe_notifications();
        gui.connect_callbacks();

        Ok(gui)
    }

    /// Show the window and run the event loop until Exit or close
    pub fn run(self) -> Result<()> {
        self.start_tray_polling();

        self.window
            .show()
            .map_err(|e| JigglerError::GuiError(Box::new(e)))?;
        self.controller.borrow_mut().on_shown();

        info!("Entering event loop");
        slint::run_event_loop_until_quit().map_err(|e| JigglerError::GuiError(Box::new(e)))?;

        self.tray_poll.stop();
        self.tray.borrow_mut().set_visible(false);
        info!("Event loop finished");
        Ok(())
    }

    /// Copy the controller's initial state into the window properties
    fn sync_window(&self) {
        let controller = self.controller.borrow();
        self.window.set_jiggling(controller.is_jiggling());
        self.window
            .set_minimize_on_startup(controller.minimize_on_startup());
        self.window.set_zen_jiggle(controller.zen_jiggle());
        self.window
            .set_period_text(controller.period().to_string().into());
        self.window
            .set_period_label(controller.period_label().into());
    }

    fn subscribe_notifications(&self) {
        let window = self.window.as_weak();
        let tray = Rc::clone(&self.tray);
        self.controller
            .borrow_mut()
            .subscribe(move |notification| {
                let Some(window) = window.upgrade() else {
                    return;
                };
                apply_notification(&window, &mut tray.borrow_mut(), notification);
            });
    }

    fn connect_callbacks(&self) {
        let controller = Rc::clone(&self.controller);
        self.window.on_jiggling_toggled(move |checked| {
            controller.borrow_mut().set_jiggling(checked);
        });

        let controller = Rc::clone(&self.controller);
        self.window.on_minimize_on_startup_toggled(move |checked| {
            controller.borrow_mut().set_minimize_on_startup(checked);
        });

        let controller = Rc::clone(&self.controller);
        self.window.on_zen_jiggle_toggled(move |checked| {
            controller.borrow_mut().set_zen_jiggle(checked);
        });

        // Partial or invalid input is ignored; the field keeps whatever was typed
        let controller = Rc::clone(&self.controller);
        self.window.on_period_edited(move |text| {
            controller.borrow_mut().set_period_text(&text);
        });

        let controller = Rc::clone(&self.controller);
        self.window.on_trayify_clicked(move || {
            controller.borrow_mut().minimize_to_tray();
        });

        self.window.on_about_clicked(show_about);

        self.window.window().on_close_requested(|| {
            info!("Main window closed");
            quit();
            slint::CloseRequestResponse::HideWindow
        });
    }

    fn start_tray_polling(&self) {
        if !TrayIcon::is_supported() {
            debug!("No tray on this platform; not polling tray events");
            return;
        }

        let controller = Rc::clone(&self.controller);
        let tray = Rc::clone(&self.tray);
        self.tray_poll
            .start(TimerMode::Repeated, TRAY_POLL_INTERVAL, move || {
                // The tray borrow ends with this statement; dispatch may update the tray
                let command = tray.borrow().poll_command();
                let Some(command) = command else {
                    return;
                };
                if controller
                    .borrow_mut()
                    .handle_tray_command(command)
                    .is_break()
                {
                    quit();
                }
            });
    }
}

/// Apply one controller notification to the window and the tray
fn apply_notification(window: &MainWindow, tray: &mut TrayIcon, notification: &Notification) {
    match notification {
        Notification::JigglingChanged(jiggling) => window.set_jiggling(*jiggling),
        Notification::ZenJiggleChanged(zen) => window.set_zen_jiggle(*zen),
        Notification::MinimizeOnStartupChanged(minimize) => {
            window.set_minimize_on_startup(*minimize);
        }
        Notification::JigglePeriodChanged { label, .. } => {
            window.set_period_label(label.as_str().into());
        }
        Notification::TrayMenuChanged(state) => tray.set_menu_state(*state),
        Notification::TrayTooltipChanged(text) => tray.set_tooltip(text),
        Notification::MinimizedToTray => {
            if TrayIcon::is_supported() {
                tray.set_visible(true);
                if let Err(e) = window.hide() {
                    warn!("Failed to hide main window: {e}");
                }
            } else {
                window.window().set_minimized(true);
            }
        }
        Notification::RestoredFromTray => {
            tray.set_visible(false);
            if let Err(e) = window.show() {
                warn!("Failed to show main window: {e}");
            }
            window.window().set_minimized(false);
        }
    }
}

fn quit() {
    if let Err(e) = slint::quit_event_loop() {
        warn!("Failed to stop event loop: {e}");
    }
}

/// Show the About box and optionally open the project page
fn show_about() {
    use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

    let url = env!("CARGO_PKG_REPOSITORY");
    let answer = MessageDialog::new()
        .set_title("About Mouse Jiggler")
        .set_description(format!(
            "Mouse Jiggler {}\n\n{}\n\nLicensed under the {}.\n\n\
             Open the project page?\n{url}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_LICENSE"),
        ))
        .set_buttons(MessageButtons::YesNo)
        .set_level(MessageLevel::Info)
        .show();

    if answer == MessageDialogResult::Yes {
        info!("Opening project page {url}");
        if let Err(e) = open::that(url) {
            warn!("Failed to open project page: {e}");
        }
    }
}
