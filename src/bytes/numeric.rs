//! Locale-invariant rendering of the scaled value in a formatted size.
//!
//! Patterns follow the familiar custom numeric format shape: `0` is a
//! required digit, `#` an optional one, `,` in the integer part turns on
//! thousands grouping and `.` separates the fraction. Output always uses `.`
//! as the decimal point and `,` as the group separator, whatever the host
//! locale says.

use std::str::FromStr;

use crate::{
    bytes::{DECIMAL_POINT, GROUP_SEPARATOR},
    error::NumericFormatError,
    utils::count_digits,
};

const REQUIRED_DIGIT: char = '0';
const OPTIONAL_DIGIT: char = '#';

/// Fraction digits carried by the rounded value handed to [`NumericFormat::render`].
pub const HUNDREDTHS_DIGITS: usize = 2;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NumericFormat {
    min_integer_digits: usize,
    grouping: bool,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
}

impl NumericFormat {
    pub const DEFAULT_PATTERN: &'static str = "0.0";

    /// Fixed-point format with exactly `decimals` fraction digits.
    pub fn fixed(decimals: usize) -> Self {
        Self {
            min_integer_digits: 1,
            grouping: false,
            min_fraction_digits: decimals,
            max_fraction_digits: decimals,
        }
    }

    /// Renders a non-negative value given in hundredths, e.g. `150` is `1.5`.
    pub fn render(&self, hundredths: u64) -> String {
        let kept = self.max_fraction_digits.min(HUNDREDTHS_DIGITS);
        let divisor = 10u64.pow((HUNDREDTHS_DIGITS - kept) as u32);
        // half away from zero on the exact decimal value
        let rounded = (hundredths + divisor / 2) / divisor;
        let scale = 10u64.pow(kept as u32);

        let mut out = self.render_integer(rounded / scale);

        let mut fraction = if kept == 0 {
            String::new()
        } else {
            format!("{:0width$}", rounded % scale, width = kept)
        };
        for _ in kept..self.max_fraction_digits {
            fraction.push(REQUIRED_DIGIT);
        }
        while fraction.len() > self.min_fraction_digits && fraction.ends_with(REQUIRED_DIGIT) {
            fraction.pop();
        }

        if !fraction.is_empty() {
            out.push(DECIMAL_POINT);
            out.push_str(&fraction);
        }
        out
    }

    fn render_integer(&self, n: u64) -> String {
        if n == 0 && self.min_integer_digits == 0 {
            return String::new();
        }

        let padding = self.min_integer_digits.saturating_sub(count_digits(n));
        let digits = format!("{}{}", "0".repeat(padding), n);
        if !self.grouping {
            return digits;
        }

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Default for NumericFormat {
    fn default() -> Self {
        Self::fixed(1)
    }
}

impl FromStr for NumericFormat {
    type Err = NumericFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NumericFormatError::Empty);
        }

        let (integer, fraction) = match s.split_once(DECIMAL_POINT) {
            Some((integer, fraction)) => (integer, fraction),
            None => (s, ""),
        };

        let mut min_integer_digits = 0;
        let mut grouping = false;
        let mut placeholders = 0;
        for ch in integer.chars() {
            match ch {
                REQUIRED_DIGIT => {
                    min_integer_digits += 1;
                    placeholders += 1;
                }
                OPTIONAL_DIGIT => placeholders += 1,
                GROUP_SEPARATOR => grouping = true,
                _ => return Err(NumericFormatError::unexpected(ch, s)),
            }
        }

        let mut min_fraction_digits = 0;
        let mut max_fraction_digits = 0;
        for ch in fraction.chars() {
            match ch {
                // required digits must all come before the optional ones
                REQUIRED_DIGIT if max_fraction_digits == min_fraction_digits => {
                    min_fraction_digits += 1;
                    max_fraction_digits += 1;
                }
                OPTIONAL_DIGIT => max_fraction_digits += 1,
                _ => return Err(NumericFormatError::unexpected(ch, s)),
            }
        }

        if placeholders + max_fraction_digits == 0 {
            return Err(NumericFormatError::NoDigits(s.to_string()));
        }

        Ok(Self {
            min_integer_digits,
            grouping,
            min_fraction_digits,
            max_fraction_digits,
        })
    }
}
