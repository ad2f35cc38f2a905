// ============================================================================
// Decimal Tokens
// Strict parsing and canonical formatting of base-10 numerals
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Parse a token as an exact decimal.
///
/// Accepted grammar: `[+-]? digits [. digits]`, ASCII digits only, with at
/// least one digit on either side of the point. Exponents, underscores,
/// thousands separators and repeated points are rejected.
///
/// # Examples
/// - "123" -> 123
/// - "-0.001" -> -0.001
/// - ".5" -> 0.5
/// - "5." -> 5
/// - "123.45.67" -> `InvalidFormat`
///
/// # Errors
/// - `Empty` for an empty (or all-whitespace) token
/// - `InvalidFormat` for anything outside the grammar
/// - `OutOfRange` when the significant digits need more than 28 fractional
///   places or exceed the `Decimal` range
pub fn parse_decimal(token: &str) -> NumericResult<Decimal> {
    let s = token.trim();
    if s.is_empty() {
        return Err(NumericError::Empty);
    }

    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    let (int_str, frac_str) = match s.split_once('.') {
        Some((int_str, frac_str)) => (int_str, frac_str),
        None => (s, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_str) || !all_digits(frac_str) {
        return Err(NumericError::InvalidFormat);
    }
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(NumericError::InvalidFormat);
    }

    // Padding zeros carry no value but count against the 28 digit scale
    let int_str = int_str.trim_start_matches('0');
    let frac_str = frac_str.trim_end_matches('0');
    let int_str = if int_str.is_empty() { "0" } else { int_str };
    let literal = if frac_str.is_empty() {
        int_str.to_string()
    } else {
        format!("{int_str}.{frac_str}")
    };

    let magnitude = Decimal::from_str_exact(&literal).map_err(|_| NumericError::OutOfRange)?;

    // Never produce a negative zero
    if is_negative && !magnitude.is_zero() {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Canonical string form of a value: trailing fractional zeros stripped and
/// `-0` rendered as `0`.
pub fn canonical(value: Decimal) -> String {
    value.normalize().to_string()
}

/// True when the value is strictly below zero.
#[inline]
pub fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

/// True when `|value|` is strictly greater than `max`.
#[inline]
pub fn exceeds_magnitude(value: Decimal, max: Decimal) -> bool {
    value.abs() > max
}
