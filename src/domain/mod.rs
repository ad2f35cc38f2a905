// ============================================================================
// Domain Models Module
// Configuration, delimiter sets and calculation results
// ============================================================================

pub mod calculation;
pub mod config;
pub mod delimiter;

pub use calculation::{Calculation, Term};
pub use config::{
    BareDelimiterPolicy, CalculatorConfig, CustomDelimiterMode, NegativePolicy, OversizePolicy,
    DEFAULT_DELIMITERS, DEFAULT_MAX_VALUE,
};
pub use delimiter::DelimiterSet;
