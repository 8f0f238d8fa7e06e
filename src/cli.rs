//! Command-line interface

use crate::jiggle::JigglePeriod;
use clap::Parser;

/// Virtually jiggles the mouse, keeping the computer from going idle
#[derive(Parser, Debug, Clone)]
#[command(name = "mousejiggler")]
#[command(version)]
#[command(about = "Virtually jiggles the mouse, keeping the computer from going idle", long_about = None)]
pub struct Cli {
    /// Start with jiggling enabled
    #[arg(short = 'j', long = "jiggle")]
    pub jiggle: bool,

    /// Start minimized to the notification area (defaults to the saved setting)
    #[arg(short = 'm', long = "minimized")]
    pub minimized: bool,

    /// Start with Zen (invisible) jiggling enabled (defaults to the saved setting)
    #[arg(short = 'z', long = "zen")]
    pub zen: bool,

    /// Seconds between jiggles, at least 0.001 (defaults to the saved setting)
    #[arg(short = 's', long = "seconds", value_name = "SECONDS")]
    pub seconds: Option<JigglePeriod>,
}
