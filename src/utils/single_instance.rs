//! Single instance enforcement
//!
//! Only one jiggler may run per session; a second launch would fight the
//! first over the tray and the pointer. Windows uses a named mutex.

use crate::error::Result;

#[cfg(windows)]
use windows::Win32::Foundation::{CloseHandle, HANDLE};

/// Name of the session-wide mutex
#[cfg(windows)]
const MUTEX_NAME: &str = "Local\\MouseJiggler_SingleInstance";

/// Holds the single-instance mutex until dropped
#[cfg(windows)]
pub struct SingleInstanceGuard {
    mutex_handle: HANDLE,
}

#[cfg(windows)]
impl SingleInstanceGuard {
    /// Claim the mutex, failing with `AlreadyRunning` if another instance owns it
    #[expect(unsafe_code, reason = "Windows FFI for named mutex creation")]
    pub fn new() -> Result<Self> {
        use crate::error::JigglerError;
        use tracing::{debug, warn};
        use windows::Win32::Foundation::{ERROR_ALREADY_EXISTS, GetLastError};
        use windows::Win32::System::Threading::CreateMutexW;
        use windows::core::HSTRING;

        let name = HSTRING::from(MUTEX_NAME);

        // SAFETY: `name` outlives the call; the returned handle is owned by the guard
        // or closed before returning.
        unsafe {
            let mutex_handle = CreateMutexW(None, true, &name)?;
            if GetLastError() == ERROR_ALREADY_EXISTS {
                warn!("Another instance of Mouse Jiggler is already running");
                let _ = CloseHandle(mutex_handle);
                return Err(JigglerError::AlreadyRunning);
            }
            debug!("Single instance mutex acquired");
            Ok(Self { mutex_handle })
        }
    }
}

#[cfg(windows)]
impl Drop for SingleInstanceGuard {
    #[expect(unsafe_code, reason = "Windows FFI for mutex cleanup")]
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateMutexW and is closed exactly once.
        unsafe {
            let _ = CloseHandle(self.mutex_handle);
        }
        tracing::debug!("Single instance mutex released");
    }
}

/// Stub implementation for non-Windows platforms
#[cfg(not(windows))]
pub struct SingleInstanceGuard;

#[cfg(not(windows))]
impl SingleInstanceGuard {
    /// Always succeeds on non-Windows platforms
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}
