//! Error types for the volume profile engine.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the volume profile engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (e.g. zero bins requested).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Insufficient data for profile computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Data error (invalid or unrepresentable input values).
    #[error("Data error: {0}")]
    Data(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Error::InsufficientData(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_detail() {
        let err = Error::insufficient_data("need 20 bars, got 5");
        assert_eq!(err.to_string(), "Insufficient data: need 20 bars, got 5");

        let err = Error::invalid_config("numBins must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: numBins must be at least 1, got 0"
        );
    }
}
