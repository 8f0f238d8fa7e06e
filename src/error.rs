//! Error types for Mouse Jiggler
//!
//! The controller treats almost everything as infallible, so most of these
//! variants only surface during startup (logging, settings, GUI and tray setup).
//! Variants wrapping another failure use `#[source]` to keep the error chain.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new boxed `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for Mouse Jiggler
#[derive(Debug, Error)]
pub enum JigglerError {
    /// A jiggle period was unparsable, non-finite or below the minimum
    #[error("Invalid jiggle period: {0}")]
    InvalidPeriod(String),

    /// Another instance already holds the single-instance mutex
    #[error("Mouse Jiggler is already running")]
    AlreadyRunning,

    /// Settings or log directory could not be prepared or written
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The Slint window or event loop failed
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The notification-area icon could not be created or updated
    #[error("Tray icon error: {0}")]
    TrayError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Windows API error
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] windows::core::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for Mouse Jiggler operations
pub type Result<T> = std::result::Result<T, JigglerError>;

/// Convert an error to a message suitable for an error dialog
pub fn get_user_friendly_error(error: &JigglerError) -> String {
    match error {
        JigglerError::InvalidPeriod(value) => {
            format!(
                "\"{value}\" is not a valid jiggle period.\n\n\
                 Enter a number of seconds no smaller than 0.001."
            )
        }
        JigglerError::AlreadyRunning => "Mouse Jiggler is already running. Aborting.".to_string(),
        JigglerError::ConfigError(_) => "Failed to load or save settings.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to:\n\
             %APPDATA%\\MouseJiggler"
            .to_string(),
        JigglerError::GuiError(e) => {
            format!(
                "The main window could not be created:\n\n{e}\n\n\
                 Please check your graphics drivers."
            )
        }
        JigglerError::TrayError(e) => {
            format!(
                "The notification area icon could not be created:\n\n{e}\n\n\
                 Minimizing to the tray will not be available."
            )
        }
        #[cfg(windows)]
        JigglerError::WindowsApiError(e) => {
            format!(
                "A Windows API error occurred:\n\n{e}\n\n\
                 Please ensure your Windows installation is up to date."
            )
        }
        JigglerError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        JigglerError::JsonError(e) => {
            format!(
                "Settings file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
