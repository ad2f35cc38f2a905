use string_calculator::CalculatorError;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(CalculatorError),

    #[error("Error calculating result: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Calculation(_) | AppError::Io(_) => 1,
        }
    }
}
