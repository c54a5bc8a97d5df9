//! Custom error types for shopbooks
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for shopbooks operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record collaborator could not deliver its snapshot
    #[error("{source_name} unavailable: {reason}")]
    DataUnavailable {
        source_name: &'static str,
        reason: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ShopError {
    /// Create a "data unavailable" error for the order collection
    pub fn orders_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: "Orders",
            reason: reason.into(),
        }
    }

    /// Create a "data unavailable" error for the expense collection
    pub fn expenses_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: "Expenses",
            reason: reason.into(),
        }
    }

    /// Check if this is a "data unavailable" error
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ShopError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for ShopError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for shopbooks operations
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShopError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_data_unavailable_error() {
        let err = ShopError::orders_unavailable("connection refused");
        assert_eq!(err.to_string(), "Orders unavailable: connection refused");
        assert!(err.is_data_unavailable());
        assert!(!err.is_validation());

        let err = ShopError::expenses_unavailable("timeout");
        assert_eq!(err.to_string(), "Expenses unavailable: timeout");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shop_err: ShopError = io_err.into();
        assert!(matches!(shop_err, ShopError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let shop_err: ShopError = json_err.into();
        assert!(matches!(shop_err, ShopError::Json(_)));
    }
}
