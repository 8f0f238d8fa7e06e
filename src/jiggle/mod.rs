//! Jiggle primitives
//!
//! The building blocks the controller drives:
//!
//! - `JigglePeriod`: validated period with the shared 0.001 s minimum and display formatting
//! - `PointerNudger`: the platform pointer-relocation call (`SystemPointer` on Windows)
//! - `TickTimer`: the repeating timer the controller arms and disarms

pub mod period;
pub mod pointer;
pub mod timer;

pub use period::{JigglePeriod, MAX_TIMER_INTERVAL_MS};
pub use pointer::{JIGGLE_DISTANCE, PointerNudger, SystemPointer, ZEN_DISTANCE};
pub use timer::TickTimer;
