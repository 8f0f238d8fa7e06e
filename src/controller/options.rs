//! Startup options for the controller
//!
//! Combines command-line arguments with persisted settings: flags given on the
//! command line win, everything else falls back to what was saved last time.

use crate::cli::Cli;
use crate::config::JigglerSettings;
use crate::jiggle::JigglePeriod;

/// Constructor inputs for [`JiggleController`](super::JiggleController)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartupOptions {
    /// Arm the timer on first display
    pub jiggle_on_startup: bool,
    /// Minimize to the tray on first display
    pub minimize_on_startup: bool,
    /// Start in Zen mode
    pub zen_jiggle: bool,
    /// Initial period
    pub jiggle_period: JigglePeriod,
}

impl StartupOptions {
    /// Merge parsed arguments over persisted settings
    pub fn resolve(cli: &Cli, settings: &JigglerSettings) -> Self {
        Self {
            jiggle_on_startup: cli.jiggle,
            minimize_on_startup: cli.minimized || settings.minimize_on_startup,
            zen_jiggle: cli.zen || settings.zen_jiggle,
            jiggle_period: cli.seconds.unwrap_or_else(|| settings.period()),
        }
    }
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            jiggle_on_startup: false,
            minimize_on_startup: false,
            zen_jiggle: false,
            jiggle_period: JigglePeriod::DEFAULT,
        }
    }
}
