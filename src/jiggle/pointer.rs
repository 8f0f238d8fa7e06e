//! Pointer nudging
//!
//! The only platform call the jiggler makes: move the system pointer by a
//! small relative amount. Windows goes through `SendInput`; a zero-distance
//! move still counts as user input and resets the idle timers.

/// Horizontal distance of a visible jiggle, in mickeys
pub const JIGGLE_DISTANCE: i32 = 4;

/// Distance of a Zen jiggle (input is injected but the pointer stays put)
pub const ZEN_DISTANCE: i32 = 0;

/// Relocates the system pointer by a relative horizontal displacement
///
/// Fire-and-forget: implementations log failures but never report them.
pub trait PointerNudger {
    /// Move the pointer `delta` units horizontally (`0` only touches it)
    fn nudge(&mut self, delta: i32);
}

/// The real system pointer
#[derive(Debug, Default)]
pub struct SystemPointer;

impl SystemPointer {
    /// Create a handle to the system pointer
    pub fn new() -> Self {
        #[cfg(not(windows))]
        tracing::warn!("Pointer injection is only implemented on Windows; jiggles will be logged only");

        Self
    }
}

#[cfg(windows)]
impl PointerNudger for SystemPointer {
    #[expect(unsafe_code, reason = "Required for Windows FFI to call SendInput")]
    fn nudge(&mut self, delta: i32) {
        use std::mem::size_of;
        use tracing::{trace, warn};
        use windows::Win32::UI::Input::KeyboardAndMouse::{
            INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_MOVE, MOUSEINPUT, SendInput,
        };

        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: delta,
                    dy: 0,
                    mouseData: 0,
                    dwFlags: MOUSEEVENTF_MOVE,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "size_of::<INPUT>() is a small compile-time constant"
        )]
        let input_size = size_of::<INPUT>() as i32;

        // SAFETY: the slice holds one fully initialised INPUT and cbsize matches its layout.
        let sent = unsafe { SendInput(&[input], input_size) };
        if sent == 1 {
            trace!("Nudged pointer by {delta}");
        } else {
            warn!("SendInput rejected pointer nudge of {delta}");
        }
    }
}

#[cfg(not(windows))]
impl PointerNudger for SystemPointer {
    fn nudge(&mut self, delta: i32) {
        tracing::trace!("Pointer nudge of {delta} (no-op on this platform)");
    }
}
