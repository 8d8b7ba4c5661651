//! Error types for big integer construction and arithmetic

use thiserror::Error;

/// Result type for fallible big integer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
///
/// Every failure in this crate is a violated precondition on the arguments,
/// so there is exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument violated a documented precondition
    InvalidArgument,
}

/// A violated precondition on the arguments of a big integer operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string, or its part after the sign, has no digits
    #[error("String cannot be empty")]
    EmptyString,

    /// A character that is not a digit symbol; `position` is a byte offset
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A digit symbol whose value is not below the base
    #[error("Digit {character:?} is out of range for base {base}")]
    InvalidDigit { character: char, base: u32 },

    /// A base outside `2..=36`
    #[error("Base must be between 2 and 36, got {0}")]
    InvalidBase(u32),

    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Remainder with a zero divisor
    #[error("Modulus by zero")]
    ModulusByZero,
}

impl Error {
    /// The category of this error, always [`ErrorKind::InvalidArgument`]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Error returned when a big integer does not fit the requested primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("big integer value out of range for {target}")]
pub struct TryFromBigIntError {
    pub(crate) target: &'static str,
}
