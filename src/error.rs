//! Error types for the truthiness crate.
//!
//! The predicates themselves are total and never fail. Errors only arise
//! on the reporting surface: writing a self-test report, serializing it,
//! or reading configuration from the environment.

use thiserror::Error;

/// Main error type for truthiness operations.
#[derive(Debug, Error)]
pub enum TruthinessError {
    /// Writing a report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A configuration value could not be understood
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for TruthinessError {
    fn from(err: serde_json::Error) -> Self {
        TruthinessError::Serialization(err.to_string())
    }
}

/// Result type alias for truthiness operations
pub type Result<T> = std::result::Result<T, TruthinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TruthinessError::InvalidConfig("TRUTHCHECK_FORMAT=yaml".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: TRUTHCHECK_FORMAT=yaml"
        );

        let err = TruthinessError::Serialization("trailing comma".to_string());
        assert_eq!(err.to_string(), "Serialization error: trailing comma");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TruthinessError = io.into();
        assert!(matches!(err, TruthinessError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let bad = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: TruthinessError = bad.into();
        assert!(matches!(err, TruthinessError::Serialization(_)));
    }
}
