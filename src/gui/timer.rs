//! Slint-backed jiggle timer
//!
//! `slint::Timer` fires on the UI thread, which is exactly where the controller
//! lives. The tick handler is installed after the controller exists, since the
//! controller owns this timer.

use mousejiggler::jiggle::TickTimer;
use slint::{Timer, TimerMode};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type TickHandler = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

/// [`TickTimer`] on top of a repeated `slint::Timer`
pub struct SlintTickTimer {
    timer: Timer,
    interval: Duration,
    enabled: bool,
    handler: TickHandler,
}

impl SlintTickTimer {
    /// Create a stopped timer with a one second interval
    pub fn new() -> Self {
        Self {
            timer: Timer::default(),
            interval: Duration::from_secs(1),
            enabled: false,
            handler: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot for the tick handler; fill it once the controller is built
    pub fn handler_slot(&self) -> TickHandler {
        Rc::clone(&self.handler)
    }

    fn restart(&self) {
        let handler = Rc::clone(&self.handler);
        self.timer.start(TimerMode::Repeated, self.interval, move || {
            if let Some(on_tick) = handler.borrow_mut().as_mut() {
                on_tick();
            }
        });
    }
}

impl Default for SlintTickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer for SlintTickTimer {
    fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        if self.enabled {
            self.restart();
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.restart();
        } else {
            self.timer.stop();
        }
    }
}
