//! Error types for the estima workspace
//!
//! Provides a unified error type shared by all estima crates.

use thiserror::Error;

/// Core error type for estimation and search operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (unknown method name, unsupported engine, bad
    /// parameter combination). Detected before any numeric work begins.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Argument outside the mathematical domain of a function
    #[error("Domain error: {0}")]
    Domain(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Iterative procedure failed to converge
    #[error("No convergence after {iterations} iterations: {context}")]
    Convergence { iterations: usize, context: String },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an unrecognized method name
    pub fn unknown_method(name: &str) -> Self {
        Self::Configuration(format!("Unknown method: {name:?}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Domain(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("engine must be 'brute'".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: engine must be 'brute'"
        );

        let err = Error::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Domain("log of non-positive probability".to_string());
        assert_eq!(err.to_string(), "Domain error: log of non-positive probability");

        let err = Error::Convergence {
            iterations: 100,
            context: "golden section".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No convergence after 100 iterations: golden section"
        );
    }

    #[test]
    fn test_helper_constructors() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::unknown_method("optuna");
        assert!(err.to_string().contains("optuna"));

        let err = Error::non_finite("sample");
        assert!(err.to_string().contains("NaN or infinite"));
    }

    #[test]
    fn test_result_type_alias() {
        fn parse_level(level: f64) -> Result<f64> {
            if (0.0..1.0).contains(&level) && level > 0.0 {
                Ok(level)
            } else {
                Err(Error::Configuration(format!(
                    "level {level} must be in (0, 1)"
                )))
            }
        }

        assert_eq!(parse_level(0.05).unwrap(), 0.05);
        assert!(parse_level(1.5).is_err());
    }
}
