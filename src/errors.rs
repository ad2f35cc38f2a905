// ============================================================================
// Calculator Errors
// Fatal outcomes of a calculation
// ============================================================================

use crate::numeric::canonical;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the calculator.
///
/// Only structural problems with the delimiter declaration and policy
/// violations are fatal. Malformed number tokens never surface here; they
/// are counted as zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The `//[...]` declaration is structurally broken.
    #[error("invalid delimiter declaration {declaration:?}: {reason}")]
    DelimiterFormat { declaration: String, reason: String },

    /// A bare declaration violates the single-character policy.
    #[error("invalid custom delimiter {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    /// One or more negative values while negatives are rejected.
    ///
    /// Values are listed in canonical form, in the order they appeared.
    #[error("invalid input: negative numbers found: {}", .values.join(", "))]
    NegativeNumbers { values: Vec<String> },

    /// A value above the maximum while oversize values are rejected.
    #[error("invalid input: {value} exceeds the maximum allowed value of {}", canonical(*.max))]
    ValueTooLarge { value: String, max: Decimal },

    /// The running sum left the representable decimal range.
    #[error("arithmetic overflow: sum exceeds the decimal range")]
    Overflow,

    /// The calculator configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CalculatorError {
    pub(crate) fn missing_closing_bracket(declaration: &str) -> Self {
        CalculatorError::DelimiterFormat {
            declaration: declaration.to_string(),
            reason: "missing closing bracket".to_string(),
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_numbers_message() {
        let err = CalculatorError::NegativeNumbers {
            values: vec!["-1".to_string(), "-2.5".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid input: negative numbers found: -1, -2.5"
        );
    }

    #[test]
    fn test_delimiter_format_message() {
        let err = CalculatorError::missing_closing_bracket("[***");
        assert_eq!(
            err.to_string(),
            "invalid delimiter declaration \"[***\": missing closing bracket"
        );
    }

    #[test]
    fn test_invalid_delimiter_message() {
        let err = CalculatorError::InvalidDelimiter {
            delimiter: ";;".to_string(),
        };
        assert_eq!(err.to_string(), "invalid custom delimiter \";;\"");
    }

    #[test]
    fn test_value_too_large_message() {
        let err = CalculatorError::ValueTooLarge {
            value: "2000".to_string(),
            max: Decimal::from(1000),
        };
        assert_eq!(
            err.to_string(),
            "invalid input: 2000 exceeds the maximum allowed value of 1000"
        );
    }

    #[test]
    fn test_value_too_large_renders_canonical_max() {
        let err = CalculatorError::ValueTooLarge {
            value: "2000".to_string(),
            max: Decimal::new(10000, 1),
        };
        assert_eq!(
            err.to_string(),
            "invalid input: 2000 exceeds the maximum allowed value of 1000"
        );
    }
}
