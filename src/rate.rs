//! Transfer speed and remaining time, for progress reporting.

use std::time::Duration;

use log::debug;

use crate::{
    bytes::size::ByteSize, duration::format_duration, error::ArithmeticError, ok_or, some_or,
    utils::truncate_to_i64,
};

pub const UNKNOWN: &str = "(unknown)";

const PER_SECOND: &str = " / sec";
const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Formats a speed such as `"1.5 MB / sec"`.
pub fn format_speed(bytes_per_second: i64) -> String {
    format!("{}{PER_SECOND}", ByteSize::new(bytes_per_second))
}

/// Formats the average speed of moving `bytes` in `elapsed`.
///
/// Returns an empty string when the rate is not a finite `i64`, which
/// includes a zero `elapsed`.
pub fn format_speed_over(bytes: i64, elapsed: Duration) -> String {
    let rate = some_or!(truncate_to_i64(bytes as f64 / elapsed.as_secs_f64()), {
        return String::new();
    });
    format_speed(rate)
}

/// Extrapolates the time left once `total` bytes are done, given that
/// `processed` bytes took `elapsed`.
///
/// A negative estimate, e.g. `processed > total`, is
/// [`ArithmeticError::NegativeDuration`] since [`Duration`] is unsigned, so
/// [`format_remaining_time`] shows it as `"(unknown)"`.
pub fn calculate_remaining_time(
    processed: i64,
    total: i64,
    elapsed: Duration,
) -> Result<Duration, ArithmeticError> {
    if processed == 0 {
        return Err(ArithmeticError::DivideByZero);
    }

    // total * (elapsed / processed) - elapsed, kept exact in nanoseconds
    let elapsed = i128::try_from(elapsed.as_nanos()).map_err(|_| ArithmeticError::Overflow)?;
    let outstanding = i128::from(total) - i128::from(processed);
    let remaining = elapsed
        .checked_mul(outstanding)
        .ok_or(ArithmeticError::Overflow)?
        / i128::from(processed);

    if remaining < 0 {
        return Err(ArithmeticError::NegativeDuration);
    }

    let secs = u64::try_from(remaining / NANOS_PER_SEC).map_err(|_| ArithmeticError::Overflow)?;
    Ok(Duration::new(secs, (remaining % NANOS_PER_SEC) as u32))
}

/// Like [`calculate_remaining_time`], formatted; `"(unknown)"` when no
/// estimate exists.
pub fn format_remaining_time(processed: i64, total: i64, elapsed: Duration) -> String {
    let remaining = ok_or!(calculate_remaining_time(processed, total, elapsed), err => {
        debug!("no remaining time for {processed}/{total} bytes after {elapsed:?}: {err}");
        return UNKNOWN.to_string();
    });
    format_duration(remaining)
}
