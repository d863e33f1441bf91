//! Error definitions shared by every layer of the engine.

/// Failures raised by parsing, division and unsigned subtraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot parse integer from empty string")]
    EmptyInput,
    #[error("radix {0} is out of range, expected 2..=36")]
    InvalidRadix(u32),
    #[error("invalid digit {digit:?} at index {index} for radix {radix}")]
    InvalidDigit { digit: char, index: usize, radix: u32 },
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("attempt to subtract with underflow")]
    Underflow,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
