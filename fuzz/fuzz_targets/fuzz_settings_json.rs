#![no_main]

use libfuzzer_sys::fuzz_target;
use mousejiggler::config::JigglerSettings;

fuzz_target!(|data: &[u8]| {
    // Whatever the settings file holds, a parsed period must be usable
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(settings) = serde_json::from_str::<JigglerSettings>(s)
    {
        let period = settings.period();
        assert!(period.as_secs_f64() >= 0.001);
        let _interval = period.timer_interval();
    }
});
