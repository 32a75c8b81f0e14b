//! Error types for ROI histogram analysis
//!
//! Provides a unified error type for all roi-stats crates.

use thiserror::Error;

/// Core error type for ROI statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Sample set contains NaN or infinite values
    #[error("Non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(name: &str, p: f64) -> Self {
        Self::InvalidParameter(format!("{name} = {p} must be in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("min_bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: min_bins must be positive");

        let err = Error::InsufficientData { expected: 1, actual: 0 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 1 samples, got 0");

        let err = Error::NonFinite { index: 3, value: f64::INFINITY };
        assert_eq!(err.to_string(), "Non-finite value inf at index 3");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::invalid_probability("lo", 1.5);
        assert_eq!(err.to_string(), "Invalid parameter: lo = 1.5 must be in [0, 1]");
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("query failed").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("query failed"));
    }
}
