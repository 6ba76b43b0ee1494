//! Error types for fcmsend

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Input Errors
    #[error("Invalid input: cannot read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration Errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Delivery Errors
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Whether the error was raised before any request could be attempted
    /// because of the notification file itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::ReadInput { .. } | Error::InvalidInput(_))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ReadInput { .. } | Error::InvalidInput(_) => 2,
            Error::Transport(_) => 3,
            Error::InvalidConfig(_) => 4,
            Error::Serialization(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_classified() {
        let err = Error::ReadInput {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_input_error());
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("missing.json"));

        let err = Error::InvalidInput("missing field `apiKey`".to_string());
        assert!(err.is_input_error());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let config = Error::InvalidConfig("endpoint is empty".to_string());
        let serialization =
            Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());

        assert!(!config.is_input_error());
        assert_eq!(config.exit_code(), 4);
        assert!(!serialization.is_input_error());
        assert_eq!(serialization.exit_code(), 1);
        assert_ne!(config.exit_code(), 2);
    }
}
