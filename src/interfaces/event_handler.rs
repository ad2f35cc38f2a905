// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Raw input line received
    InputReceived {
        input: String,
        timestamp: DateTime<Utc>,
    },

    /// Custom delimiter declaration parsed
    DelimitersResolved {
        declared: Vec<String>,
        timestamp: DateTime<Utc>,
    },

    /// Malformed token counted as zero
    TokenDefaulted {
        position: usize,
        token: String,
        reason: NumericError,
        timestamp: DateTime<Utc>,
    },

    /// Value above the maximum kept out of the sum
    ValueFiltered {
        position: usize,
        value: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Calculation failed
    CalculationRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Calculation finished
    CalculationCompleted {
        formula: String,
        sum: Decimal,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing calculator events
/// Implementations can handle logging, auditing, test capture, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
