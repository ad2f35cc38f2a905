// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::config::{
    BareDelimiterPolicy, CalculatorConfig, CustomDelimiterMode, NegativePolicy, OversizePolicy,
};
use crate::engine::Calculator;
use crate::errors::{CalculatorError, CalculatorResult};
use crate::interfaces::EventHandler;
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Example
/// ```
/// use string_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = create_from_config(CalculatorConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calculator.add("//;\n1;2").unwrap().to_string(), "1+2 = 3");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalculatorResult<Calculator> {
    config.validate().map_err(CalculatorError::InvalidConfig)?;

    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use string_calculator::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .allow_negatives()
///     .max_value(Decimal::from(100))
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calculator.add("-5,500,7").unwrap().to_string(), "-5+0+7 = 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Delimiters
    // ========================================================================

    /// Replace the default delimiters
    pub fn default_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_default_delimiters(delimiters);
        self
    }

    /// Bare declarations must be exactly one character
    pub fn single_character_delimiters(mut self) -> Self {
        self.config.bare_delimiter_policy = BareDelimiterPolicy::SingleCharacter;
        self
    }

    /// Declared delimiters replace the defaults instead of adding to them
    pub fn replace_default_delimiters(mut self) -> Self {
        self.config.custom_delimiter_mode = CustomDelimiterMode::Replace;
        self
    }

    // ========================================================================
    // Value Policies
    // ========================================================================

    /// Sum negative values instead of rejecting them
    pub fn allow_negatives(mut self) -> Self {
        self.config.negative_policy = NegativePolicy::Allow;
        self
    }

    /// Reject negative values (default)
    pub fn reject_negatives(mut self) -> Self {
        self.config.negative_policy = NegativePolicy::Reject;
        self
    }

    /// Set the magnitude threshold
    pub fn max_value(mut self, max: Decimal) -> Self {
        self.config.max_value = Some(max);
        self
    }

    /// Disable magnitude filtering
    pub fn no_max_value(mut self) -> Self {
        self.config.max_value = None;
        self
    }

    /// Set how values above the threshold are handled
    pub fn oversize_policy(mut self, policy: OversizePolicy) -> Self {
        self.config.oversize_policy = policy;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CalculatorResult<Calculator> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_default_calculator() {
        let calculator =
            create_from_config(CalculatorConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calculator.config(), &CalculatorConfig::default());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::default().with_default_delimiters(Vec::<String>::new());
        let result = create_from_config(config, Arc::new(NoOpEventHandler));

        assert!(matches!(result, Err(CalculatorError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = CalculatorBuilder::new()
            .default_delimiters([",", ";"])
            .single_character_delimiters()
            .replace_default_delimiters()
            .allow_negatives()
            .no_max_value();

        let config = builder.get_config();
        assert_eq!(config.default_delimiters, vec![",", ";"]);
        assert_eq!(config.bare_delimiter_policy, BareDelimiterPolicy::SingleCharacter);
        assert_eq!(config.custom_delimiter_mode, CustomDelimiterMode::Replace);
        assert_eq!(config.negative_policy, NegativePolicy::Allow);
        assert_eq!(config.max_value, None);

        let calculator = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calculator.add("1;-2,3").unwrap().to_string(), "1+-2+3 = 2");
    }

    #[test]
    fn test_builder_oversize_policy() {
        let calculator = CalculatorBuilder::new()
            .max_value(Decimal::from(10))
            .oversize_policy(OversizePolicy::Drop)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(calculator.add("1,11,2").unwrap().to_string(), "1+2 = 3");
    }

    #[test]
    fn test_builder_from_preset() {
        let calculator = CalculatorBuilder::from_config(CalculatorConfig::lenient())
            .reject_negatives()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert!(calculator.add("-1").is_err());
        assert_eq!(calculator.add("5000").unwrap().to_string(), "5000 = 5000");
    }

    #[test]
    fn test_builder_rejects_negative_max() {
        let result = CalculatorBuilder::new()
            .max_value(Decimal::from(-5))
            .build(Arc::new(NoOpEventHandler));

        assert!(matches!(result, Err(CalculatorError::InvalidConfig(_))));
    }
}
