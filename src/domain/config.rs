// ============================================================================
// Calculator Configuration
// Policy switches and defaults read by every calculation
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delimiters in effect when the input declares none.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// Default magnitude threshold for summation.
pub const DEFAULT_MAX_VALUE: i64 = 1000;

// ============================================================================
// Policies
// ============================================================================

/// What to do with negative values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativePolicy {
    /// Fail the calculation, listing every negative value found
    #[default]
    Reject,
    /// Sum negatives like any other value
    Allow,
}

/// What to do with values whose magnitude exceeds `max_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OversizePolicy {
    /// Leave the value out of the sum and show it as `0` in the formula
    #[default]
    ZeroFill,
    /// Leave the value out of both the sum and the formula
    Drop,
    /// Fail the calculation
    Reject,
}

/// Accepted shape of a bare `//<delim>\n` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BareDelimiterPolicy {
    /// Any non-empty literal string
    #[default]
    AnyLength,
    /// Exactly one character; anything else is an `InvalidDelimiter` error
    SingleCharacter,
}

/// How declared delimiters combine with the defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CustomDelimiterMode {
    /// Declared delimiters are added after the defaults
    #[default]
    Augment,
    /// Declared delimiters replace the defaults (when at least one is declared)
    Replace,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for a [`Calculator`](crate::engine::Calculator).
///
/// Built once and read by every call; the calculator never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Delimiters in effect for every line, in substitution order
    pub default_delimiters: Vec<String>,

    /// Negative number handling
    pub negative_policy: NegativePolicy,

    /// Optional: maximum magnitude taking part in the sum.
    /// None disables magnitude filtering.
    pub max_value: Option<Decimal>,

    /// Handling of values above `max_value`
    pub oversize_policy: OversizePolicy,

    /// Shape of bare delimiter declarations
    pub bare_delimiter_policy: BareDelimiterPolicy,

    /// Whether declared delimiters add to or replace the defaults
    pub custom_delimiter_mode: CustomDelimiterMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            negative_policy: NegativePolicy::Reject,
            max_value: Some(Decimal::from(DEFAULT_MAX_VALUE)),
            oversize_policy: OversizePolicy::ZeroFill,
            bare_delimiter_policy: BareDelimiterPolicy::AnyLength,
            custom_delimiter_mode: CustomDelimiterMode::Augment,
        }
    }
}

impl CalculatorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Replace the default delimiters
    pub fn with_default_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Set negative number handling
    pub fn with_negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative_policy = policy;
        self
    }

    /// Builder method: Set the magnitude threshold
    pub fn with_max_value(mut self, max: Decimal) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Builder method: Disable magnitude filtering
    pub fn without_max_value(mut self) -> Self {
        self.max_value = None;
        self
    }

    /// Builder method: Set oversize value handling
    pub fn with_oversize_policy(mut self, policy: OversizePolicy) -> Self {
        self.oversize_policy = policy;
        self
    }

    /// Builder method: Set the bare declaration policy
    pub fn with_bare_delimiter_policy(mut self, policy: BareDelimiterPolicy) -> Self {
        self.bare_delimiter_policy = policy;
        self
    }

    /// Builder method: Set how declared delimiters combine with defaults
    pub fn with_custom_delimiter_mode(mut self, mode: CustomDelimiterMode) -> Self {
        self.custom_delimiter_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_delimiters.is_empty() {
            return Err("At least one default delimiter is required".to_string());
        }

        if self.default_delimiters.iter().any(|d| d.is_empty()) {
            return Err("Default delimiters cannot be empty strings".to_string());
        }

        if let Some(max) = self.max_value {
            if max < Decimal::ZERO {
                return Err("Maximum value cannot be negative".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Strict configuration
    /// - Bare declarations must be a single character
    /// - Values above the maximum fail the calculation
    /// - Negatives rejected
    pub fn strict() -> Self {
        Self::default()
            .with_bare_delimiter_policy(BareDelimiterPolicy::SingleCharacter)
            .with_oversize_policy(OversizePolicy::Reject)
    }

    /// Lenient configuration
    /// - Negatives allowed
    /// - No magnitude filtering
    pub fn lenient() -> Self {
        Self::default()
            .with_negative_policy(NegativePolicy::Allow)
            .without_max_value()
    }
}
