pub mod macros;

/// Lower bound of `i64` as an exact float (`-2^63`).
const I64_MIN_F64: f64 = i64::MIN as f64;

/// `2^63`, the first float above `i64::MAX`.
const I64_END_F64: f64 = -I64_MIN_F64;

/// Truncates toward zero, or `None` when the result is not a finite `i64`.
pub fn truncate_to_i64(value: f64) -> Option<i64> {
    let value = value.trunc();
    if value.is_finite() && value >= I64_MIN_F64 && value < I64_END_F64 {
        Some(value as i64)
    } else {
        None
    }
}

pub fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

pub fn count_digits(mut n: u64) -> usize {
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}
