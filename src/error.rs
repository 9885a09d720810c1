//! Custom error types for Wayfarer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Parsing and aggregation never produce these errors: malformed rows are
//! skipped and unparseable values default to zero. Errors are reserved for the
//! boundary, where a source file is missing or an export cannot be written.

use thiserror::Error;

/// The main error type for Wayfarer operations
#[derive(Error, Debug)]
pub enum TravelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A flight history or expense ledger could not be read at all
    #[error("{source_kind} unavailable at {path}: {reason}")]
    SourceUnavailable {
        source_kind: &'static str,
        path: String,
        reason: String,
    },
}

impl TravelError {
    /// Create a "not found" error for trips
    pub fn trip_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Trip",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means the source data itself is missing
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TravelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TravelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TravelError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TravelError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Wayfarer operations
pub type TravelResult<T> = Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TravelError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TravelError::trip_not_found("Japan 2024");
        assert_eq!(err.to_string(), "Trip not found: Japan 2024");
        assert!(err.is_not_found());
        assert!(!err.is_source_unavailable());
    }

    #[test]
    fn test_source_unavailable_error() {
        let err = TravelError::SourceUnavailable {
            source_kind: "Flight history",
            path: "/tmp/flights.csv".into(),
            reason: "No such file or directory".into(),
        };
        assert_eq!(
            err.to_string(),
            "Flight history unavailable at /tmp/flights.csv: No such file or directory"
        );
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let travel_err: TravelError = io_err.into();
        assert!(matches!(travel_err, TravelError::Io(_)));
    }
}
