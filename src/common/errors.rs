//! Error types for fare calculation

use thiserror::Error;

/// Result type alias using our FareError
pub type Result<T> = std::result::Result<T, FareError>;

/// Main error type for fare operations
#[derive(Error, Debug)]
pub enum FareError {
    /// Trip parameters out of range (negative distance, zero zones)
    #[error("Invalid trip: {0}")]
    InvalidTrip(String),

    /// Adjustment parameters out of range (negative commission, percent outside 0..=100)
    #[error("Invalid adjustment parameter: {0}")]
    InvalidAdjustmentParameter(String),

    /// Decimal arithmetic overflowed while pricing a trip
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for FareError {
    fn from(err: config::ConfigError) -> Self {
        FareError::Configuration(err.to_string())
    }
}

impl FareError {
    /// Returns true if the error was caused by caller-supplied input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FareError::InvalidTrip(_) | FareError::InvalidAdjustmentParameter(_)
        )
    }
}
