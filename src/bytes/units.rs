use crate::{
    bytes::{numeric::NumericFormat, BYTE, IEC_SUFFIX, SI_KILO, SUFFIX, UNIT_LETTERS},
    utils::pluralize,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnitConvention {
    /// Decimal steps of 1000: `kB`, `MB`, ...
    SI,
    /// Binary steps of 1024: `KB`, `MB`, ...
    #[default]
    JEDEC,
    /// Binary steps of 1024: `KiB`, `MiB`, ...
    IEC,
}

impl UnitConvention {
    pub const fn multiplier(&self) -> u64 {
        match self {
            Self::SI => 1000,
            Self::JEDEC | Self::IEC => 1024,
        }
    }

    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::IEC => IEC_SUFFIX,
            Self::SI | Self::JEDEC => SUFFIX,
        }
    }

    pub fn letter(&self, unit: usize) -> char {
        match (self, unit) {
            (Self::SI, 0) => SI_KILO,
            _ => UNIT_LETTERS[unit],
        }
    }

    pub fn format(&self, bytes: i64, numeric: &NumericFormat) -> String {
        if bytes < 0 {
            return format!("-{}", self.format_magnitude(bytes.unsigned_abs(), numeric));
        }
        self.format_magnitude(bytes.unsigned_abs(), numeric)
    }

    fn format_magnitude(&self, bytes: u64, numeric: &NumericFormat) -> String {
        let base = self.multiplier();
        if bytes < base {
            return pluralize(bytes, BYTE);
        }

        // limit == base^(unit + 1); a product past u64 can never be <= bytes
        let mut limit = base;
        let mut unit = 0;
        while let Some(next) = limit.checked_mul(base) {
            if next > bytes {
                break;
            }
            limit = next;
            unit += 1;
        }

        let hundredths = (bytes as f64 / limit as f64 * 100.0).round_ties_even() as u64;

        format!(
            "{} {}{}",
            numeric.render(hundredths),
            self.letter(unit),
            self.suffix()
        )
    }
}
