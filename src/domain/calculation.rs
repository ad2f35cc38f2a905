// ============================================================================
// Calculation Domain Model
// ============================================================================

use crate::numeric::canonical;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One token's contribution to a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// Value taking part in the sum
    Counted(Decimal),
    /// Oversized value kept out of the sum, shown as `0`
    ZeroFilled(Decimal),
}

impl Term {
    /// The parsed value, whether or not it was counted
    pub fn value(&self) -> Decimal {
        match self {
            Term::Counted(value) | Term::ZeroFilled(value) => *value,
        }
    }

    /// The amount this term adds to the sum
    pub fn contribution(&self) -> Decimal {
        match self {
            Term::Counted(value) => *value,
            Term::ZeroFilled(_) => Decimal::ZERO,
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, Term::Counted(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Counted(value) => f.write_str(&canonical(*value)),
            Term::ZeroFilled(_) => f.write_str("0"),
        }
    }
}

/// Result of a successful calculation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    /// Terms in input order
    pub terms: Vec<Term>,

    /// Exact sum of the counted terms
    pub sum: Decimal,
}

impl Calculation {
    pub fn new(terms: Vec<Term>, sum: Decimal) -> Self {
        Self { terms, sum }
    }

    /// Render as `a+b+...+n = sum`, or `0 = 0` when there are no terms
    pub fn formula(&self) -> String {
        if self.terms.is_empty() {
            return "0 = 0".to_string();
        }

        let parts: Vec<String> = self.terms.iter().map(Term::to_string).collect();
        format!("{} = {}", parts.join("+"), canonical(self.sum))
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}
