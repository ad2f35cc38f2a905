// ============================================================================
// Engine Module
// Delimiter resolution, tokenization and summation
// ============================================================================

mod calculator;

pub mod factory;
pub mod resolver;
pub mod tokenizer;

pub use calculator::{add, Calculator};
pub use factory::{create_from_config, CalculatorBuilder};
pub use resolver::{unescape_newlines, DelimiterResolver, ResolvedInput};
pub use tokenizer::tokenize;
