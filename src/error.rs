#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("unit not found: {0:?}")]
    UnknownUnit(char),

    #[error("byte count out of range: {0:?}")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("attempt to divide by zero")]
    DivideByZero,

    #[error("arithmetic operation overflowed")]
    Overflow,

    #[error("estimated duration is negative")]
    NegativeDuration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericFormatError {
    #[error("numeric format is empty")]
    Empty,

    #[error("unexpected character {ch:?} in numeric format {pattern:?}")]
    UnexpectedChar { ch: char, pattern: String },

    #[error("numeric format {0:?} has no digit placeholders")]
    NoDigits(String),
}

impl NumericFormatError {
    pub(crate) fn unexpected<S: Into<String>>(ch: char, pattern: S) -> Self {
        NumericFormatError::UnexpectedChar {
            ch,
            pattern: pattern.into(),
        }
    }
}
