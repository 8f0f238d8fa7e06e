#![no_main]

use libfuzzer_sys::fuzz_target;
use mousejiggler::jiggle::{JigglePeriod, MAX_TIMER_INTERVAL_MS};

fuzz_target!(|data: &[u8]| {
    // Text typed into the period field: accepted values are finite, above the
    // minimum and map to a timer interval the platform can represent
    if let Ok(s) = std::str::from_utf8(data)
        && let Some(period) = JigglePeriod::parse(s)
    {
        let seconds = period.as_secs_f64();
        assert!(seconds.is_finite());
        assert!(seconds >= JigglePeriod::MIN_SECONDS);

        let interval = period.timer_interval();
        assert!(interval.as_millis() <= u128::from(MAX_TIMER_INTERVAL_MS));

        // The label text parses back to an accepted period
        assert!(JigglePeriod::parse(&period.to_string()).is_some());
    }
});
