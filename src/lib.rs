//! Byte sizes as values, with conversions to and from human-readable text.
//!
//! ```
//! use sizefmt::{ByteSize, NumericFormat, UnitConvention};
//!
//! let size: ByteSize = "50 MB".parse().unwrap();
//! assert_eq!(size.bytes(), 52_428_800);
//! assert_eq!(size.to_string(), "50.0 MB");
//! assert_eq!(
//!     ByteSize::new(1536).to_string_as(&NumericFormat::default(), UnitConvention::IEC),
//!     "1.5 KiB"
//! );
//! ```
//!
//! Formatting supports three conventions ([`UnitConvention`]): SI (`kB`,
//! steps of 1000), JEDEC (`KB`, steps of 1024, the default) and IEC (`KiB`).
//! Parsing always reads units as binary multiples.

pub mod bytes;
pub mod duration;
pub mod error;
pub mod rate;
mod utils;

pub use bytes::{numeric::NumericFormat, size::ByteSize, units::UnitConvention};
pub use duration::format_duration;
pub use error::{ArithmeticError, NumericFormatError, ParseError};
pub use rate::{calculate_remaining_time, format_remaining_time, format_speed, format_speed_over};
