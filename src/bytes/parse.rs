use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    bytes::{size::ByteSize, BYTE_LETTER, DECIMAL_POINT, GROUP_SEPARATOR, UNIT_LETTERS},
    error::ParseError,
    some_or,
};

/// Parsing is always binary, whatever convention produced the text.
const PARSE_BASE: u128 = 1024;

/// Plain fixed-point decimal: no exponent, no grouping, no inf/NaN.
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap());

/// Parses a size such as `"50 MB"`, `"1.5 GiB"` or `"1.234,56 KB"`.
///
/// With `decimal_dot_is_point` the thousands separator is `,`; without it
/// the roles swap and `.` is dropped before `,` is read as the decimal point.
/// The first letter in the text picks the unit and anything after it is
/// ignored, so `KB`, `KiB` and `kB` all mean 1024 bytes.
pub fn parse(text: &str, decimal_dot_is_point: bool) -> Result<ByteSize, ParseError> {
    let (thousands, decimal) = if decimal_dot_is_point {
        (GROUP_SEPARATOR, DECIMAL_POINT)
    } else {
        (DECIMAL_POINT, GROUP_SEPARATOR)
    };

    let normalized: String = text
        .chars()
        .filter(|&ch| ch != thousands)
        .map(|ch| if ch == decimal { DECIMAL_POINT } else { ch })
        .collect();

    let (unit, pos) = normalized
        .char_indices()
        .find(|(_, ch)| ch.is_alphabetic())
        .map(|(pos, ch)| (ch.to_uppercase().next().unwrap_or(ch), pos))
        .unwrap_or((BYTE_LETTER, 0));

    let number = if pos == 0 {
        normalized.trim()
    } else {
        normalized[..pos].trim()
    };

    if !DECIMAL.is_match(number) {
        trace!("rejecting {text:?}: {number:?} is not a decimal number");
        return Err(ParseError::InvalidNumber(number.to_string()));
    }
    let multiplier = if unit == BYTE_LETTER {
        1
    } else {
        let index = some_or!(UNIT_LETTERS.iter().position(|&letter| letter == unit), {
            trace!("rejecting {text:?}: no unit for {unit:?}");
            return Err(ParseError::UnknownUnit(unit));
        });
        PARSE_BASE.pow(index as u32 + 1)
    };

    let (negative, unsigned) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    let (integer, fraction) = unsigned.split_once(DECIMAL_POINT).unwrap_or((unsigned, ""));

    let bytes = scale_decimal(integer, fraction, multiplier)
        .and_then(|magnitude| i128::try_from(magnitude).ok())
        .map(|magnitude| if negative { -magnitude } else { magnitude })
        .and_then(|bytes| i64::try_from(bytes).ok());
    let bytes = some_or!(bytes, {
        return Err(ParseError::OutOfRange(text.to_string()));
    });
    Ok(ByteSize::new(bytes))
}

/// `trunc(integer.fraction * multiplier)` computed on the decimal digits, so
/// no precision is lost. `None` once the whole part passes `u128`.
fn scale_decimal(integer: &str, fraction: &str, multiplier: u128) -> Option<u128> {
    // little-endian base-10 digits of integer ++ fraction
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes())
        .rev()
        .map(|b| b - b'0')
        .collect();

    let mut carry: u128 = 0;
    for digit in digits.iter_mut() {
        let product = u128::from(*digit) * multiplier + carry;
        *digit = (product % 10) as u8;
        carry = product / 10;
    }

    // digits below fraction.len() are the truncated fraction
    let mut whole = carry;
    for &digit in digits[fraction.len()..].iter().rev() {
        whole = whole.checked_mul(10)?.checked_add(u128::from(digit))?;
    }
    Some(whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(text: &str) -> i64 {
        parse(text, true).unwrap().bytes()
    }

    #[test]
    fn parses_unit_suffixes() {
        assert_eq!(bytes("50 MB"), 52_428_800);
        assert_eq!(bytes("1.5 GiB"), 1_610_612_736);
        assert_eq!(bytes("1.5 KB"), 1536);
        assert_eq!(bytes("1 TB"), 1 << 40);
        assert_eq!(bytes("2 EB"), 1 << 61);
    }

    #[test]
    fn unit_letter_is_case_insensitive_and_binary() {
        assert_eq!(bytes("1 kB"), 1024);
        assert_eq!(bytes("1k"), 1024);
        assert_eq!(bytes("1 KiB"), 1024);
        assert_eq!(bytes("3mb"), 3 * 1024 * 1024);
    }

    #[test]
    fn plain_counts_and_byte_words() {
        assert_eq!(bytes("42"), 42);
        assert_eq!(bytes("  42  "), 42);
        assert_eq!(bytes("100 bytes"), 100);
        assert_eq!(bytes("1 byte"), 1);
        assert_eq!(bytes("7B"), 7);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(bytes("1.9"), 1);
        assert_eq!(bytes("-1.9"), -1);
        assert_eq!(bytes("1.0009765625 KB"), 1025);
    }

    #[test]
    fn negative_sizes() {
        assert_eq!(bytes("-1.5 KB"), -1536);
        assert_eq!(bytes("-50.0 MB"), -52_428_800);
    }

    #[test]
    fn comma_is_thousands_separator_by_default() {
        assert_eq!(bytes("1,024"), 1024);
        assert_eq!(bytes("1,024.5 KB"), 1_049_088);
    }

    #[test]
    fn comma_decimal_convention() {
        let size = parse("1.234,56", false).unwrap();
        assert_eq!(size.bytes(), 1234);
        let size = parse("1.234,56 KB", false).unwrap();
        assert_eq!(size.bytes(), 1_264_189);
        assert_eq!(parse("1,5 MB", false).unwrap().bytes(), 1_572_864);
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert_eq!(parse("", true), Err(ParseError::InvalidNumber(String::new())));
        assert_eq!(parse("MB", true), Err(ParseError::InvalidNumber("MB".to_string())));
        assert_eq!(parse("inf", true), Err(ParseError::InvalidNumber("inf".to_string())));
        assert_eq!(parse("1.2.3 KB", true), Err(ParseError::InvalidNumber("1.2.3".to_string())));
        assert_eq!(parse("- 5", true), Err(ParseError::InvalidNumber("- 5".to_string())));
    }

    #[test]
    fn rejects_unknown_units() {
        assert_eq!(parse("12 XB", true), Err(ParseError::UnknownUnit('X')));
        assert_eq!(parse("12 LB", true), Err(ParseError::UnknownUnit('L')));
    }

    #[test]
    fn integers_are_exact_across_i64() {
        assert_eq!(bytes("9007199254740993"), 9_007_199_254_740_993);
        assert_eq!(bytes("9223372036854775000"), 9_223_372_036_854_775_000);
        assert_eq!(bytes("9223372036854775807"), i64::MAX);
        assert_eq!(bytes("-9223372036854775808"), i64::MIN);
        assert_eq!(bytes("9,223,372,036,854,775,807 bytes"), i64::MAX);
        assert_eq!(bytes("000000000000000000000000000000000000000042"), 42);
    }

    #[test]
    fn scaling_is_exact() {
        assert_eq!(bytes("1023.999 KB"), 1_048_574);
        assert_eq!(bytes("8191.9999999999999999 PB"), i64::MAX);
        assert_eq!(bytes("0.99999999999999999999999999 KB"), 1023);
        assert_eq!(bytes("7.9999999999999999999 EB"), i64::MAX);
        assert_eq!(bytes("-8 EB"), i64::MIN);
        assert_eq!(bytes(".5 KB"), 512);
        assert_eq!(bytes("-0.5"), 0);
    }

    #[test]
    fn scale_decimal_truncates() {
        assert_eq!(scale_decimal("1", "5", 1024), Some(1536));
        assert_eq!(scale_decimal("1", "999", 1), Some(1));
        assert_eq!(scale_decimal("", "5", 3), Some(1));
        assert_eq!(scale_decimal("340282366920938463463374607431768211456", "", 1), None);
    }

    #[test]
    fn rejects_counts_past_i64() {
        assert_eq!(
            parse("9223372036854775808", true),
            Err(ParseError::OutOfRange("9223372036854775808".to_string()))
        );
        assert_eq!(
            parse("8 EB", true),
            Err(ParseError::OutOfRange("8 EB".to_string()))
        );
        assert_eq!(
            parse("20000000 EB", true),
            Err(ParseError::OutOfRange("20000000 EB".to_string()))
        );
    }
}
