//! Human-readable durations that show a single unit, e.g. `"3 days"`.

use std::time::Duration;

use crate::utils::pluralize;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Larger units first. A unit is only used once it counts at least two.
const UNITS: [(&str, u64); 5] = [
    ("year", YEAR),
    ("month", MONTH),
    ("day", DAY),
    ("hour", HOUR),
    ("minute", MINUTE),
];

/// Formats `duration` using its largest unit with a whole count of at least
/// two, falling back to whole seconds.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    for (unit, unit_secs) in UNITS {
        let count = secs / unit_secs;
        if count >= 2 {
            return pluralize(count, unit);
        }
    }
    pluralize(secs, "second")
}
