// ============================================================================
// Numeric Errors
// Reasons a token could not be read as a decimal value
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while parsing a token into a decimal.
///
/// These never reach the caller of the calculator: a token that fails to
/// parse is counted as zero. They exist so the reason can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Token was empty after trimming
    Empty,
    /// Token is not a base-10 numeral
    InvalidFormat,
    /// Numeral is well-formed but does not fit a `Decimal`
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "empty token"),
            NumericError::InvalidFormat => {
                write!(f, "invalid number format: expected [+-]digits[.digits]")
            },
            NumericError::OutOfRange => {
                write!(f, "number out of range: exceeds decimal precision or magnitude")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
