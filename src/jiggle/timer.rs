//! Repeating tick timer abstraction
//!
//! Mirrors a UI-toolkit timer: an interval plus an enabled flag. The GUI backs
//! it with `slint::Timer`; tests use a recording implementation.

use std::time::Duration;

/// A repeating timer that fires jiggle ticks on the UI thread
pub trait TickTimer {
    /// Change the tick interval; restarts the countdown if the timer is running
    fn set_interval(&mut self, interval: Duration);

    /// Start or stop firing ticks
    fn set_enabled(&mut self, enabled: bool);
}
