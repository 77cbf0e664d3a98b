use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    bytes::{numeric::NumericFormat, parse, units::UnitConvention},
    error::ParseError,
};

/// An exact, possibly negative, count of bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteSize(i64);

impl ByteSize {
    pub const ZERO: Self = Self(0);

    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> i64 {
        self.0
    }

    /// Parses text such as `"50 MB"` using `.` as the decimal point.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse(text, true)
    }

    /// Like [`ByteSize::parse`], but `decimal_dot_is_point == false` reads
    /// `,` as the decimal point and `.` as the thousands separator.
    pub fn parse_with(text: &str, decimal_dot_is_point: bool) -> Result<Self, ParseError> {
        parse::parse(text, decimal_dot_is_point)
    }

    pub fn to_string_as(&self, numeric: &NumericFormat, convention: UnitConvention) -> String {
        convention.format(self.0, numeric)
    }
}

impl From<i64> for ByteSize {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for i64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as(&NumericFormat::default(), UnitConvention::default()))
    }
}

impl FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<i64> for ByteSize {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i64> for ByteSize {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialEq<ByteSize> for i64 {
    fn eq(&self, other: &ByteSize) -> bool {
        *self == other.0
    }
}

impl PartialOrd<ByteSize> for i64 {
    fn partial_cmp(&self, other: &ByteSize) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(ByteSize::ZERO, ByteSize::default());
        assert_eq!(ByteSize::ZERO.bytes(), 0);
    }

    #[test]
    fn compares_as_integers() {
        let small = ByteSize::new(-10);
        let large = ByteSize::new(1024);
        assert!(small < large);
        assert!(small <= large);
        assert!(large > small);
        assert!(large >= small);
        assert!(small != large);
        assert_eq!(ByteSize::new(1024), large);
        assert_eq!(small.max(large), large);
    }

    #[test]
    fn compares_with_raw_counts() {
        let size = ByteSize::new(1024);
        assert!(size == 1024_i64);
        assert!(1024_i64 == size);
        assert!(size > 1000_i64);
        assert!(2048_i64 > size);
    }

    #[test]
    fn converts_to_and_from_i64() {
        assert_eq!(ByteSize::from(42).bytes(), 42);
        assert_eq!(i64::from(ByteSize::new(-7)), -7);
    }

    #[test]
    fn displays_with_default_format() {
        assert_eq!(ByteSize::new(52_428_800).to_string(), "50.0 MB");
        assert_eq!(ByteSize::new(1).to_string(), "1 byte");
        assert_eq!(format!("{}", ByteSize::ZERO), "0 bytes");
    }

    #[test]
    fn to_string_as_uses_convention() {
        let size = ByteSize::new(1536);
        assert_eq!(
            size.to_string_as(&NumericFormat::default(), UnitConvention::IEC),
            "1.5 KiB"
        );
        assert_eq!(
            size.to_string_as(&NumericFormat::fixed(2), UnitConvention::SI),
            "1.54 kB"
        );
    }

    #[test]
    fn from_str_uses_decimal_point() {
        assert_eq!("50 MB".parse::<ByteSize>(), Ok(ByteSize::new(52_428_800)));
        assert_eq!(
            ByteSize::parse_with("1,5 KB", false),
            Ok(ByteSize::new(1536))
        );
    }
}
