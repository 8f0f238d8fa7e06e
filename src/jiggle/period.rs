//! Jiggle period value type
//!
//! Every entry point that accepts a period (the numeric setter, the text field,
//! the `--seconds` argument and persisted milliseconds) goes through this type,
//! so the 0.001 s minimum is enforced in one place.

use crate::error::JigglerError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Longest interval the platform timer accepts, in milliseconds
pub const MAX_TIMER_INTERVAL_MS: u64 = i32::MAX as u64;

/// Time between two jiggles, in seconds
///
/// Always finite and at least [`JigglePeriod::MIN_SECONDS`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JigglePeriod(f64);

impl JigglePeriod {
    /// Smallest accepted period (one millisecond)
    pub const MIN_SECONDS: f64 = 0.001;

    /// Period used when nothing else is configured
    pub const DEFAULT: Self = Self(1.0);

    /// Validate a period in seconds, rejecting non-finite values and values below the minimum
    pub fn new(seconds: f64) -> Option<Self> {
        (seconds.is_finite() && seconds >= Self::MIN_SECONDS).then_some(Self(seconds))
    }

    /// Parse user-entered text, ignoring surrounding whitespace
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Self::new)
    }

    /// Rebuild a period from persisted milliseconds, clamping to the minimum
    #[expect(
        clippy::cast_precision_loss,
        reason = "Persisted periods are far below 2^52 ms"
    )]
    pub fn from_millis(millis: u64) -> Self {
        Self((millis as f64 / 1000.0).max(Self::MIN_SECONDS))
    }

    /// Period in seconds
    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Milliseconds as stored in the settings file, truncated toward zero
    ///
    /// Lossy below one millisecond: `1.0015` is stored as `1001` and reloads as `1.001`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Period is positive and float-to-int casts saturate"
    )]
    pub fn persisted_millis(self) -> u64 {
        (self.0 * 1000.0) as u64
    }

    /// Interval for the repeating timer, capped at [`MAX_TIMER_INTERVAL_MS`]
    pub fn timer_interval(self) -> Duration {
        Duration::from_millis(self.persisted_millis().min(MAX_TIMER_INTERVAL_MS))
    }
}

impl Default for JigglePeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for JigglePeriod {
    type Err = JigglerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| JigglerError::InvalidPeriod(s.to_string()))
    }
}

/// Renders with at most three decimals and no trailing zeros (`0.5`, `1`, `2.25`)
impl fmt::Display for JigglePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{:.3}", self.0);
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}
