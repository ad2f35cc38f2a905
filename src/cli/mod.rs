//! Command line driver for the string calculator.
//!
//! `args` turns flags into a `CalculatorConfig`, `runner` feeds standard
//! input to the calculator line by line, and `errors` maps failures to exit
//! statuses. Embedders should use the library API directly.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
