//! Integration tests for Mouse Jiggler
//!
//! Drives the controller through whole user sessions (command line, first
//! display, tray round-trips, ticks) and checks what reaches the pointer, the
//! timer and the settings file.

use clap::Parser;
use mousejiggler::{
    cli::Cli,
    config::{ConfigManager, FileSettingsStore, JigglerSettings, MemorySettingsStore, SettingsStore},
    controller::{
        Collaborators, JiggleController, NOT_JIGGLING_TEXT, Notification, StartupOptions,
        TrayCommand, TrayMenuState,
    },
    error::{JigglerError, get_user_friendly_error},
    jiggle::{JigglePeriod, PointerNudger, TickTimer},
};
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default, Clone)]
struct SharedPointer(Rc<RefCell<Vec<i32>>>);

impl PointerNudger for SharedPointer {
    fn nudge(&mut self, delta: i32) {
        self.0.borrow_mut().push(delta);
    }
}

#[derive(Debug, Default)]
struct TimerState {
    enabled: bool,
    interval: Option<Duration>,
}

#[derive(Default, Clone)]
struct SharedTimer(Rc<RefCell<TimerState>>);

impl TickTimer for SharedTimer {
    fn set_interval(&mut self, interval: Duration) {
        self.0.borrow_mut().interval = Some(interval);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().enabled = enabled;
    }
}

struct Session {
    controller: JiggleController,
    pointer: SharedPointer,
    timer: SharedTimer,
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl Session {
    fn start(options: StartupOptions, store: Box<dyn SettingsStore>) -> Self {
        let pointer = SharedPointer::default();
        let timer = SharedTimer::default();
        let mut controller = JiggleController::new(
            options,
            Collaborators {
                settings_store: store,
                pointer: Box::new(pointer.clone()),
                timer: Box::new(timer.clone()),
            },
        );

        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        controller.subscribe(move |n| sink.borrow_mut().push(n.clone()));

        Self {
            controller,
            pointer,
            timer,
            notifications,
        }
    }

    fn from_args(args: &[&str], store: MemorySettingsStore) -> Self {
        let cli = Cli::try_parse_from(args).unwrap();
        let settings = store.load().unwrap();
        Self::start(StartupOptions::resolve(&cli, &settings), Box::new(store))
    }

    /// Fire `count` timer ticks, but only while the timer is enabled
    fn run_ticks(&mut self, count: usize) {
        for _ in 0..count {
            if self.timer.0.borrow().enabled {
                self.controller.tick();
            }
        }
    }

    fn nudges(&self) -> Vec<i32> {
        self.pointer.0.borrow().clone()
    }
}

/// Test a plain session: arm from the checkbox, jiggle, disarm
#[test]
fn test_arm_jiggle_disarm_session() {
    let mut session = Session::from_args(&["mousejiggler"], MemorySettingsStore::default());
    session.controller.on_shown();
    assert!(!session.controller.is_jiggling());

    session.controller.set_jiggling(true);
    session.run_ticks(4);
    assert_eq!(session.nudges(), vec![4, -4, 4, -4]);

    session.controller.set_jiggling(false);
    session.run_ticks(3);
    assert_eq!(session.nudges().len(), 4);
    assert!(!session.timer.0.borrow().enabled);
}

/// Test `-j -m -s 2.5` arms, minimizes and uses the given period on first display
#[test]
fn test_command_line_startup_session() {
    let store = MemorySettingsStore::default();
    let mut session = Session::from_args(&["mousejiggler", "-j", "-m", "-s", "2.5"], store.clone());

    session.controller.on_shown();

    assert!(session.controller.is_jiggling());
    assert!(session.controller.is_minimized_to_tray());
    assert_eq!(
        session.timer.0.borrow().interval,
        Some(Duration::from_millis(2500))
    );
    assert_eq!(
        session.controller.tray_tooltip(),
        "Jiggling mouse every 2.5 s, without Zen."
    );
    assert_eq!(store.current().jiggle_period, 2500);
    assert!(store.current().minimize_on_startup);

    let notifications = session.notifications.borrow();
    assert!(notifications.contains(&Notification::MinimizedToTray));
    assert!(notifications.contains(&Notification::TrayTooltipChanged(
        "Jiggling mouse every 2.5 s, without Zen.".to_string()
    )));
}

/// Test saved settings are used when the command line is silent
#[test]
fn test_saved_settings_apply_without_flags() {
    let store = MemorySettingsStore::with_settings(JigglerSettings {
        minimize_on_startup: false,
        zen_jiggle: true,
        jiggle_period: 30_000,
    });
    let mut session = Session::from_args(&["mousejiggler", "-j"], store);

    session.controller.on_shown();
    session.run_ticks(3);

    assert!(session.controller.zen_jiggle());
    assert_eq!(session.controller.period(), JigglePeriod::new(30.0).unwrap());
    assert_eq!(session.nudges(), vec![0, 0, 0]);
}

/// Test the tray round trip: trayify, stop and start from the menu, reopen
#[test]
fn test_tray_round_trip() {
    let mut session = Session::from_args(&["mousejiggler"], MemorySettingsStore::default());
    session.controller.on_shown();

    session.controller.minimize_to_tray();
    assert!(session.controller.is_minimized_to_tray());
    assert_eq!(session.controller.tray_tooltip(), NOT_JIGGLING_TEXT);

    assert_eq!(
        session
            .controller
            .handle_tray_command(TrayCommand::StartJiggling),
        ControlFlow::Continue(())
    );
    assert!(session.controller.is_jiggling());
    assert_eq!(session.controller.tray_menu(), TrayMenuState::for_jiggling(true));

    session.controller.set_zen_jiggle(true);
    assert_eq!(
        session.notifications.borrow().last(),
        Some(&Notification::TrayTooltipChanged(
            "Jiggling mouse every 1 s, with Zen.".to_string()
        ))
    );

    session
        .controller
        .handle_tray_command(TrayCommand::StopJiggling);
    assert!(!session.controller.is_jiggling());
    assert_eq!(
        session.notifications.borrow().last(),
        Some(&Notification::TrayTooltipChanged(NOT_JIGGLING_TEXT.to_string()))
    );

    session.controller.handle_tray_command(TrayCommand::Open);
    assert!(!session.controller.is_minimized_to_tray());
    assert_eq!(
        session.notifications.borrow().last(),
        Some(&Notification::RestoredFromTray)
    );

    assert_eq!(
        session.controller.handle_tray_command(TrayCommand::Exit),
        ControlFlow::Break(())
    );
}

/// Test zig keeps alternating across a Zen interlude
#[test]
fn test_zen_interlude_keeps_alternating() {
    let mut session = Session::from_args(&["mousejiggler", "-j"], MemorySettingsStore::default());
    session.controller.on_shown();

    session.run_ticks(1);
    session.controller.set_zen_jiggle(true);
    session.run_ticks(1);
    session.controller.set_zen_jiggle(false);
    session.run_ticks(2);

    assert_eq!(session.nudges(), vec![4, 0, 4, -4]);
}

/// Test period edits: invalid text is ignored, valid text retimes a running timer
#[test]
fn test_period_editing() {
    let store = MemorySettingsStore::default();
    let mut session = Session::from_args(&["mousejiggler", "-j"], store.clone());
    session.controller.on_shown();
    let saves_before = store.save_count();

    for text in ["", "abc", "0", "0.0001", "-1", "NaN", "inf"] {
        assert!(!session.controller.set_period_text(text), "{text:?}");
    }
    assert_eq!(store.save_count(), saves_before);
    assert_eq!(session.controller.period(), JigglePeriod::DEFAULT);

    assert!(session.controller.set_period_text(" 0.25 "));
    assert!(session.controller.is_jiggling());
    assert_eq!(
        session.timer.0.borrow().interval,
        Some(Duration::from_millis(250))
    );
    assert_eq!(session.controller.period_label(), "0.25 s");
    assert_eq!(store.current().jiggle_period, 250);
}

/// Test settings survive a restart through the JSON file
#[test]
fn test_settings_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MouseJiggler").join("settings.json");

    {
        let mut session = Session::start(
            StartupOptions::default(),
            Box::new(FileSettingsStore::new(&path)),
        );
        session.controller.on_shown();
        session.controller.set_zen_jiggle(true);
        session.controller.set_minimize_on_startup(true);
        session.controller.set_period(12.5);
    }

    let loaded = ConfigManager::load_from(&path).unwrap();
    assert_eq!(
        loaded,
        JigglerSettings {
            minimize_on_startup: true,
            zen_jiggle: true,
            jiggle_period: 12_500,
        }
    );

    let cli = Cli::try_parse_from(["mousejiggler"]).unwrap();
    let options = StartupOptions::resolve(&cli, &loaded);
    assert!(options.zen_jiggle);
    assert!(options.minimize_on_startup);
    assert!(!options.jiggle_on_startup);
    assert_eq!(options.jiggle_period, JigglePeriod::new(12.5).unwrap());
}

/// Test the file uses the documented key names
#[test]
fn test_settings_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut store = FileSettingsStore::new(&path);

    store
        .save(&JigglerSettings {
            minimize_on_startup: true,
            zen_jiggle: false,
            jiggle_period: 1500,
        })
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["MinimizeOnStartup"], true);
    assert_eq!(json["ZenJiggle"], false);
    assert_eq!(json["JigglePeriod"], 1500);
}

/// Test a corrupt settings file falls back to defaults instead of failing startup
#[test]
fn test_corrupt_settings_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileSettingsStore::new(&path);
    assert_eq!(store.load().unwrap(), JigglerSettings::default());
}

/// Test invalid command-line periods are rejected by the parser
#[test]
fn test_cli_rejects_invalid_period() {
    for bad in ["0", "0.0005", "-3", "abc", "NaN"] {
        assert!(
            Cli::try_parse_from(["mousejiggler", "-s", bad]).is_err(),
            "{bad:?} should be rejected"
        );
    }
}

/// Test error messages shown in dialogs
#[test]
fn test_user_friendly_errors() {
    let msg = get_user_friendly_error(&JigglerError::AlreadyRunning);
    assert!(msg.contains("already running"));

    let msg = get_user_friendly_error(&JigglerError::InvalidPeriod("abc".to_string()));
    assert!(msg.contains("abc"));
    assert!(msg.contains("0.001"));
}
