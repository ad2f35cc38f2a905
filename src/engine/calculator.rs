// ============================================================================
// Calculator
// Core parse, validate and sum pipeline
// ============================================================================

use crate::domain::{Calculation, CalculatorConfig, NegativePolicy, OversizePolicy, Term};
use crate::engine::resolver::DelimiterResolver;
use crate::engine::tokenizer::tokenize;
use crate::errors::{CalculatorError, CalculatorResult};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{canonical, exceeds_magnitude, is_negative, parse_decimal, NumericError};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, trace};

/// String calculator with an explicit, immutable configuration.
///
/// Every call rebuilds its delimiter set from the input, so one calculator
/// can serve any number of lines (or threads) without reset.
pub struct Calculator {
    /// Policies and defaults
    config: CalculatorConfig,

    /// Declaration parser built from `config`
    resolver: DelimiterResolver,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator.
    ///
    /// The configuration is used as given; go through
    /// [`create_from_config`](crate::engine::create_from_config) to validate it.
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            resolver: DelimiterResolver::new(&config),
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn resolver(&self) -> &DelimiterResolver {
        &self.resolver
    }

    /// Parse and validate an input line into its values, one per token.
    ///
    /// An input that is blank after the declaration yields `[0]`.
    ///
    /// # Errors
    /// Delimiter declaration errors, and `NegativeNumbers` when negatives
    /// are rejected.
    pub fn parse(&self, input: &str) -> CalculatorResult<Vec<Decimal>> {
        let mut events = Vec::new();
        let result = self.parse_values(input, &mut events);

        if let Err(err) = &result {
            events.push(Self::rejected(err));
        }
        self.event_handler.on_events(events);

        result
    }

    /// Parse, validate and sum an input line.
    ///
    /// # Errors
    /// Everything [`parse`](Self::parse) returns, plus `ValueTooLarge` under
    /// [`OversizePolicy::Reject`] and `Overflow` if the sum leaves the
    /// decimal range.
    pub fn add(&self, input: &str) -> CalculatorResult<Calculation> {
        let mut events = Vec::new();
        let result = self
            .parse_values(input, &mut events)
            .and_then(|values| self.sum_values(&values, &mut events));

        match &result {
            Ok(calculation) => {
                debug!(formula = %calculation, "Calculation completed");
                events.push(CalculationEvent::CalculationCompleted {
                    formula: calculation.formula(),
                    sum: calculation.sum,
                    timestamp: Utc::now(),
                });
            }
            Err(err) => {
                debug!(%err, "Calculation rejected");
                events.push(Self::rejected(err));
            }
        }
        self.event_handler.on_events(events);

        result
    }

    fn parse_values(
        &self,
        input: &str,
        events: &mut Vec<CalculationEvent>,
    ) -> CalculatorResult<Vec<Decimal>> {
        debug!(input, "Starting input validation");
        events.push(CalculationEvent::InputReceived {
            input: input.to_string(),
            timestamp: Utc::now(),
        });

        let resolved = self.resolver.resolve(input)?;
        if !resolved.declared.is_empty() {
            events.push(CalculationEvent::DelimitersResolved {
                declared: resolved.declared.clone(),
                timestamp: Utc::now(),
            });
        }

        let tokens = tokenize(resolved.payload, &resolved.delimiters);
        let mut values = Vec::with_capacity(tokens.len());

        for (position, token) in tokens.into_iter().enumerate() {
            let value = match parse_decimal(&token) {
                Ok(value) => value,
                Err(NumericError::Empty) => Decimal::ZERO,
                Err(reason) => {
                    debug!(token = %token, %reason, "Invalid number format, converting to 0");
                    events.push(CalculationEvent::TokenDefaulted {
                        position,
                        token,
                        reason,
                        timestamp: Utc::now(),
                    });
                    Decimal::ZERO
                }
            };
            values.push(value);
        }

        if self.config.negative_policy == NegativePolicy::Reject {
            let negatives: Vec<String> = values
                .iter()
                .copied()
                .filter(|value| is_negative(*value))
                .map(canonical)
                .collect();

            if !negatives.is_empty() {
                return Err(CalculatorError::NegativeNumbers { values: negatives });
            }
        }

        debug!(count = values.len(), "Input validation completed");
        Ok(values)
    }

    fn sum_values(
        &self,
        values: &[Decimal],
        events: &mut Vec<CalculationEvent>,
    ) -> CalculatorResult<Calculation> {
        let mut sum = Decimal::ZERO;
        let mut terms = Vec::with_capacity(values.len());

        for (position, &value) in values.iter().enumerate() {
            let Some(max) = self
                .config
                .max_value
                .filter(|max| exceeds_magnitude(value, *max))
            else {
                trace!(%value, "Adding number to sum");
                sum = sum.checked_add(value).ok_or(CalculatorError::Overflow)?;
                terms.push(Term::Counted(value));
                continue;
            };

            match self.config.oversize_policy {
                OversizePolicy::Reject => {
                    return Err(CalculatorError::ValueTooLarge {
                        value: canonical(value),
                        max,
                    });
                }
                OversizePolicy::ZeroFill => terms.push(Term::ZeroFilled(value)),
                OversizePolicy::Drop => {}
            }

            debug!(%value, %max, "Number exceeds maximum, omitting from sum");
            events.push(CalculationEvent::ValueFiltered {
                position,
                value,
                timestamp: Utc::now(),
            });
        }

        Ok(Calculation::new(terms, sum))
    }

    fn rejected(err: &CalculatorError) -> CalculationEvent {
        CalculationEvent::CalculationRejected {
            reason: err.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}

/// Sum an input line with the default configuration.
///
/// ```rust
/// let calculation = string_calculator::add("1,2\n3").unwrap();
/// assert_eq!(calculation.to_string(), "1+2+3 = 6");
/// ```
pub fn add(input: &str) -> CalculatorResult<Calculation> {
    Calculator::default().add(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BareDelimiterPolicy, CustomDelimiterMode};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<CalculationEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CalculationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn formula(input: &str) -> String {
        Calculator::default().add(input).unwrap().formula()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_add_formulas() {
        let cases = [
            ("1\n2", "1+2 = 3"),
            ("1\n2,3", "1+2+3 = 6"),
            (" 1 \n 2 ", "1+2 = 3"),
            ("1\n\n2", "1+0+2 = 3"),
            ("1\n\n2\n", "1+0+2 = 3"),
            ("1,2", "1+2 = 3"),
            ("5", "5 = 5"),
            ("", "0 = 0"),
            ("abc,def", "0+0 = 0"),
            ("1.5,2.5", "1.5+2.5 = 4"),
            ("1000000,2000000", "0+0 = 0"),
            ("0.1,0.2", "0.1+0.2 = 0.3"),
            (",5", "0+5 = 5"),
            ("5,", "5+0 = 5"),
            (",", "0+0 = 0"),
            ("1,2,3,4,5,6,7,8,9,10", "1+2+3+4+5+6+7+8+9+10 = 55"),
            ("1,2,3,4,5,6,7,8,9,10,abc", "1+2+3+4+5+6+7+8+9+10+0 = 55"),
            ("1000000,2000000,3\n4", "0+0+3+4 = 7"),
            ("//[*][!!][r9r]\n11r9r22*hh*33!!44", "11+22+0+33+44 = 110"),
            ("//;\n1;2", "1+2 = 3"),
            ("//\n", "0 = 0"),
        ];

        for (input, expected) in cases {
            assert_eq!(formula(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_values() {
        let calculator = Calculator::new(CalculatorConfig::lenient(), Arc::new(NoOpEventHandler));

        assert_eq!(calculator.parse("123").unwrap(), vec![Decimal::from(123)]);
        assert_eq!(calculator.parse("").unwrap(), vec![Decimal::ZERO]);
        assert_eq!(
            calculator.parse("4,-3").unwrap(),
            vec![Decimal::from(4), Decimal::from(-3)]
        );
        assert_eq!(
            calculator.parse("123.45,67.89").unwrap(),
            vec![dec("123.45"), dec("67.89")]
        );
        assert_eq!(
            calculator.parse("tytyt,5").unwrap(),
            vec![Decimal::ZERO, Decimal::from(5)]
        );
    }

    #[test]
    fn test_negatives_rejected_all_listed() {
        let err = Calculator::default().add("-1,5,-2.50").unwrap_err();

        assert_eq!(
            err,
            CalculatorError::NegativeNumbers {
                values: vec!["-1".to_string(), "-2.5".to_string()]
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid input: negative numbers found: -1, -2.5"
        );
    }

    #[test]
    fn test_negatives_rejected_by_parse() {
        assert!(matches!(
            Calculator::default().parse("-1\n-2"),
            Err(CalculatorError::NegativeNumbers { .. })
        ));
    }

    #[test]
    fn test_negatives_checked_before_oversize_reject() {
        let calculator = Calculator::new(CalculatorConfig::strict(), Arc::new(NoOpEventHandler));
        assert!(matches!(
            calculator.add("5000,-1"),
            Err(CalculatorError::NegativeNumbers { .. })
        ));
    }

    #[test]
    fn test_negatives_allowed() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_negative_policy(NegativePolicy::Allow),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(calculator.add("5,-3").unwrap().formula(), "5+-3 = 2");
        // Absolute magnitude counts against the maximum
        assert_eq!(calculator.add("-1001,4").unwrap().formula(), "0+4 = 4");
        assert_eq!(calculator.add("-1000,4").unwrap().formula(), "-1000+4 = -996");
    }

    #[test]
    fn test_max_boundary() {
        assert_eq!(formula("1000,1"), "1000+1 = 1001");
        assert_eq!(formula("1000.01,1"), "0+1 = 1");
    }

    #[test]
    fn test_oversize_drop() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_oversize_policy(OversizePolicy::Drop),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(calculator.add("1,2000,3").unwrap().formula(), "1+3 = 4");
        assert_eq!(calculator.add("5000").unwrap().formula(), "0 = 0");
    }

    #[test]
    fn test_oversize_reject() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_oversize_policy(OversizePolicy::Reject),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(
            calculator.add("1,2000"),
            Err(CalculatorError::ValueTooLarge {
                value: "2000".to_string(),
                max: Decimal::from(1000),
            })
        );
    }

    #[test]
    fn test_no_max_value() {
        let calculator = Calculator::new(CalculatorConfig::lenient(), Arc::new(NoOpEventHandler));
        assert_eq!(
            calculator.add("1000000,2000000").unwrap().formula(),
            "1000000+2000000 = 3000000"
        );
    }

    #[test]
    fn test_overflow_reported() {
        let calculator = Calculator::new(CalculatorConfig::lenient(), Arc::new(NoOpEventHandler));
        // Each value fits, the sum does not (decimal range is about 7.9e28)
        let half = "40000000000000000000000000000";
        let input = format!("{half},{half}");

        assert_eq!(calculator.add(&input), Err(CalculatorError::Overflow));
    }

    #[test]
    fn test_delimiter_format_error() {
        let err = Calculator::default().add("//[***\n1***2").unwrap_err();
        assert!(matches!(err, CalculatorError::DelimiterFormat { .. }));
    }

    #[test]
    fn test_strict_bare_delimiter() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_bare_delimiter_policy(BareDelimiterPolicy::SingleCharacter),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(calculator.add("//;\n1;2").unwrap().formula(), "1+2 = 3");
        assert!(matches!(
            calculator.add("//;;\n1;;2"),
            Err(CalculatorError::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn test_replace_mode() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_custom_delimiter_mode(CustomDelimiterMode::Replace),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(calculator.add("//[;]\n1;2,3").unwrap().formula(), "1+0 = 1");
        assert_eq!(calculator.add("1,2").unwrap().formula(), "1+2 = 3");
    }

    #[test]
    fn test_replace_mode_unit_separator_is_not_a_delimiter() {
        let calculator = Calculator::new(
            CalculatorConfig::default().with_custom_delimiter_mode(CustomDelimiterMode::Replace),
            Arc::new(NoOpEventHandler),
        );

        assert_eq!(
            calculator.add("//[;]\n1;2\u{1f}3").unwrap().formula(),
            "1+0 = 1"
        );
    }

    #[test]
    fn test_zero_padded_fractions_are_summed() {
        let padded_one = format!("1.{}", "0".repeat(29));
        assert_eq!(formula(&format!("{padded_one},2")), "1+2 = 3");

        let padded_tenth = format!("0.1{}", "0".repeat(30));
        assert_eq!(formula(&format!("{padded_tenth},1")), "0.1+1 = 1.1");
    }

    #[test]
    fn test_calculator_is_reusable() {
        let calculator = Calculator::default();

        assert_eq!(calculator.add("//;\n1;2").unwrap().formula(), "1+2 = 3");
        // The previous line's ";" must not leak into this one
        assert_eq!(calculator.add("1;2").unwrap().formula(), "0 = 0");
    }

    #[test]
    fn test_events_for_defaulted_and_filtered_values() {
        let handler = Arc::new(RecordingHandler::default());
        let calculator = Calculator::new(CalculatorConfig::default(), handler.clone());

        calculator.add("//[;]\n1;abc;5000").unwrap();

        let events = handler.events.lock().unwrap();
        assert!(matches!(events.first(), Some(CalculationEvent::InputReceived { .. })));
        assert!(events.iter().any(|e| matches!(
            e,
            CalculationEvent::DelimitersResolved { declared, .. } if declared == &vec![";".to_string()]
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            CalculationEvent::TokenDefaulted { position: 1, token, reason: NumericError::InvalidFormat, .. } if token == "abc"
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            CalculationEvent::ValueFiltered { position: 2, .. }
        )));
        assert!(matches!(
            events.last(),
            Some(CalculationEvent::CalculationCompleted { formula, .. }) if formula == "1+0+0 = 1"
        ));
    }

    #[test]
    fn test_events_for_rejection() {
        let handler = Arc::new(RecordingHandler::default());
        let calculator = Calculator::new(CalculatorConfig::default(), handler.clone());

        assert!(calculator.add("-1").is_err());

        let events = handler.events.lock().unwrap();
        assert!(matches!(
            events.last(),
            Some(CalculationEvent::CalculationRejected { reason, .. })
                if reason == "invalid input: negative numbers found: -1"
        ));
    }

    #[test]
    fn test_add_free_function() {
        assert_eq!(add("1,2").unwrap().sum, Decimal::from(3));
    }
}
