//! Configuration data models
//!
//! The persisted settings record. Keys are PascalCase to keep the file format
//! flat and readable: `MinimizeOnStartup`, `ZenJiggle`, `JigglePeriod`.

use crate::jiggle::JigglePeriod;
use serde::{Deserialize, Serialize};

/// Settings persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JigglerSettings {
    /// Whether to minimize to the tray on the first window display
    pub minimize_on_startup: bool,
    /// Whether ticks touch the pointer without moving it
    pub zen_jiggle: bool,
    /// Jiggle period in whole milliseconds
    pub jiggle_period: u64,
}

impl JigglerSettings {
    /// Stored period as a validated value (zero clamps to the minimum)
    pub fn period(&self) -> JigglePeriod {
        JigglePeriod::from_millis(self.jiggle_period)
    }
}

impl Default for JigglerSettings {
    fn default() -> Self {
        Self {
            minimize_on_startup: false,
            zen_jiggle: false,
            jiggle_period: JigglePeriod::DEFAULT.persisted_millis(),
        }
    }
}
