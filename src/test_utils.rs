#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for Mouse Jiggler unit tests.
//!
//! Recording doubles for the controller's collaborators, plus helpers for
//! tests that touch the filesystem. Only compiled during testing.

use crate::jiggle::{PointerNudger, TickTimer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Global mutex serializing tests that modify the APPDATA environment variable.
static APPDATA_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary test directory that is removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points APPDATA at a temp directory for one test and
/// restores the previous value on drop.
///
/// Holding `APPDATA_LOCK` for the guard's lifetime keeps parallel tests from
/// racing on the variable.
pub struct AppdataGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding APPDATA_LOCK"
)]
impl AppdataGuard {
    /// Set APPDATA to `temp_dir` until the guard is dropped.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = APPDATA_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var("APPDATA").ok();
        // SAFETY: APPDATA_LOCK serializes every test that reads or writes APPDATA.
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding APPDATA_LOCK"
)]
impl Drop for AppdataGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; it is released after this body runs.
        unsafe {
            match &self.original {
                Some(original) => std::env::set_var("APPDATA", original),
                None => std::env::remove_var("APPDATA"),
            }
        }
    }
}

/// Pointer double that records every nudge.
#[derive(Debug, Default)]
pub struct RecordingPointer {
    nudges: Rc<RefCell<Vec<i32>>>,
}

impl RecordingPointer {
    /// Shared handle to the recorded nudges.
    pub fn nudges(&self) -> Rc<RefCell<Vec<i32>>> {
        Rc::clone(&self.nudges)
    }
}

impl PointerNudger for RecordingPointer {
    fn nudge(&mut self, delta: i32) {
        self.nudges.borrow_mut().push(delta);
    }
}

/// Last configuration applied to a [`ManualTimer`].
#[derive(Debug, Default)]
pub struct TimerLog {
    /// Whether ticks are currently enabled
    pub enabled: bool,
    /// Last interval set
    pub interval: Option<Duration>,
    /// Number of times the interval was set
    pub interval_changes: usize,
}

/// Timer double that never fires on its own; tests call `tick()` directly.
#[derive(Debug, Default)]
pub struct ManualTimer {
    log: Rc<RefCell<TimerLog>>,
}

impl ManualTimer {
    /// Shared handle to the timer's configuration.
    pub fn log(&self) -> Rc<RefCell<TimerLog>> {
        Rc::clone(&self.log)
    }
}

impl TickTimer for ManualTimer {
    fn set_interval(&mut self, interval: Duration) {
        let mut log = self.log.borrow_mut();
        log.interval = Some(interval);
        log.interval_changes += 1;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().enabled = enabled;
    }
}

#[test]
fn test_manual_timer_records_configuration() {
    let mut timer = ManualTimer::default();
    let log = timer.log();
    timer.set_interval(Duration::from_millis(5));
    timer.set_enabled(true);
    assert_eq!(log.borrow().interval, Some(Duration::from_millis(5)));
    assert!(log.borrow().enabled);
    assert_eq!(log.borrow().interval_changes, 1);
}

#[test]
fn test_appdata_guard_sets_value() {
    let temp_dir = create_test_dir();
    let _guard = AppdataGuard::new(&temp_dir);
    assert_eq!(
        std::env::var("APPDATA").unwrap(),
        temp_dir.path().to_string_lossy()
    );
}
