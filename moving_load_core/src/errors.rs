//! # Error Types
//!
//! Structured error types for moving_load_core. Every rejected input is
//! reported with enough context to show the user which value was wrong and
//! why, instead of silently producing an empty result.
//!
//! ## Example
//!
//! ```rust
//! use moving_load_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_span(span_m, "Span must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_span(-1.0).unwrap_err().error_code(), "INVALID_SPAN");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for moving_load_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The span length cannot carry an analysis
    #[error("Invalid span: {span_m} m - {reason}")]
    InvalidSpan { span_m: f64, reason: String },

    /// The load spacing leaves no room for the pair to travel
    #[error("Invalid load spacing: {spacing_m} m on a {span_m} m span - spacing must be non-negative and shorter than the span")]
    InvalidSeparation { spacing_m: f64, span_m: f64 },

    /// Analysis settings are unusable (step, rounding precision)
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSpan error
    pub fn invalid_span(span_m: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidSpan {
            span_m,
            reason: reason.into(),
        }
    }

    /// Create an InvalidSeparation error
    pub fn invalid_separation(spacing_m: f64, span_m: f64) -> Self {
        CalcError::InvalidSeparation { spacing_m, span_m }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error comes from the beam geometry or loads rather than
    /// from settings or I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::InvalidSpan { .. } | CalcError::InvalidSeparation { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidSpan { .. } => "INVALID_SPAN",
            CalcError::InvalidSeparation { .. } => "INVALID_SEPARATION",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_separation(12.0, 10.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidSeparation\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_span(0.0, "zero").error_code(), "INVALID_SPAN");
        assert_eq!(CalcError::invalid_settings("step_m", "0", "zero").error_code(), "INVALID_SETTINGS");
        assert!(CalcError::invalid_input("load_1_kn", "NaN", "not finite").is_input_error());
        assert!(!CalcError::file_error("read", "x.json", "missing").is_input_error());
    }

    #[test]
    fn test_separation_message_names_both_lengths() {
        let msg = CalcError::invalid_separation(12.0, 10.0).to_string();
        assert!(msg.contains("12 m"));
        assert!(msg.contains("10 m span"));
    }
}
