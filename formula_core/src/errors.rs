//! # Error Types
//!
//! Structured error types for formula_core. Every calculator reports failure
//! through [`CalcError`]; nothing in the engine panics on user input. The
//! `Display` text of an error is the message a front end shows in place of a
//! result, and the serialized form carries enough context for programmatic
//! handling.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{CalcError, CalcResult};
//!
//! fn validate_voltage(volts: f64) -> CalcResult<()> {
//!     if volts <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "voltage".to_string(),
//!             value: volts.to_string(),
//!             reason: "Voltage must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-numeric, zero divisor, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing for the selected mode
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A unit symbol could not be resolved for the given quantity
    #[error("Unknown {quantity} unit: '{unit}'")]
    UnknownUnit { quantity: String, unit: String },

    /// Material not found in the material table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Calculation failed (no physical solution, solver out of bounds, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error (settings files, batch inputs)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON / TOML serialization or deserialization error
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the input field this error points at, if any.
    ///
    /// Front ends use this to highlight the offending input.
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("voltage", "-5", "Voltage must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::material_not_found("unobtainium").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::unknown_unit("length", "furlong").error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_display_is_descriptive() {
        let error = CalcError::invalid_input("old_value", "0", "Original value cannot be zero");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'old_value': 0 - Original value cannot be zero"
        );
        assert_eq!(error.field(), Some("old_value"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<f64>("not a number").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
