// ============================================================================
// Numeric Module
// Exact decimal handling for calculator tokens
// ============================================================================
//
// This module provides:
// - parse_decimal: strict base-10 token parsing into rust_decimal::Decimal
// - canonical: normalized string rendering used in formulas and errors
// - NumericError: reasons a token was neutralized to zero
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result; the calculator decides what a failure means

mod decimal;
mod errors;

pub use decimal::{canonical, exceeds_magnitude, is_negative, parse_decimal};
pub use errors::{NumericError, NumericResult};
