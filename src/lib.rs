// ============================================================================
// String Calculator Library
// Delimited string-to-decimal parsing and exact summation
// ============================================================================

//! # String Calculator
//!
//! Parses a delimited list of numbers, validates it, and returns the exact
//! decimal sum together with a `a+b+...=sum` formula.
//!
//! ## Features
//!
//! - **Custom delimiter declarations**: `//;\n1;2` and `//[*][!!][r9r]\n...`
//! - **Exact decimal arithmetic** via `rust_decimal` (`0.1 + 0.2 = 0.3`)
//! - **Forgiving tokens**: empty or malformed tokens count as zero
//! - **Policy switches** for negatives, oversized values and delimiter rules
//! - **Event hooks** for logging or auditing every calculation
//!
//! ## Example
//!
//! ```rust
//! use string_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! // Default policies: reject negatives, zero-fill values above 1000
//! let calculator = Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
//!
//! let calculation = calculator.add("//[*][!!][r9r]\n11r9r22*hh*33!!44").unwrap();
//! assert_eq!(calculation.to_string(), "11+22+0+33+44 = 110");
//!
//! let calculation = calculator.add("1000000,2000000,3\n4").unwrap();
//! assert_eq!(calculation.to_string(), "0+0+3+4 = 7");
//!
//! let err = calculator.add("-1,-2").unwrap_err();
//! assert_eq!(err.to_string(), "invalid input: negative numbers found: -1, -2");
//! ```

pub mod domain;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod numeric;

pub use engine::{add, unescape_newlines};
pub use errors::{CalculatorError, CalculatorResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BareDelimiterPolicy, Calculation, CalculatorConfig, CustomDelimiterMode, DelimiterSet,
        NegativePolicy, OversizePolicy, Term,
    };
    pub use crate::engine::{
        add, create_from_config, tokenize, unescape_newlines, Calculator, CalculatorBuilder,
        DelimiterResolver, ResolvedInput,
    };
    pub use crate::errors::{CalculatorError, CalculatorResult};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
}
