//! # Error Types
//!
//! One error enum covers the whole evaluation: bad request values, catalog
//! misses and table loading. Each variant names the offending field or label
//! so a client can correct the request without parsing prose.
//!
//! Every error is terminal for a single evaluation. The calculations are
//! deterministic, so retrying an evaluation reproduces the same error.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_in: f64) -> CalcResult<()> {
//!     if spacing_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "spacing_in",
//!             spacing_in.to_string(),
//!             "Bar spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failure.
///
/// Serializes as `{"type": "<Variant>", "details": {...}}`.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, out of range, degenerate geometry)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Bar size label has no row in the rebar catalog
    #[error("Unknown bar size: '{label}'")]
    UnknownBarSize { label: String },

    /// Steel grade label has no row in the grade catalog
    #[error("Unknown steel grade: '{label}'")]
    UnknownGrade { label: String },

    /// A property table could not be read or parsed
    #[error("Catalog load failed for '{source_name}': {reason}")]
    CatalogLoad { source_name: String, reason: String },

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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownBarSize error
    pub fn unknown_bar_size(label: impl Into<String>) -> Self {
        CalcError::UnknownBarSize { label: label.into() }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(label: impl Into<String>) -> Self {
        CalcError::UnknownGrade { label: label.into() }
    }

    /// Create a CatalogLoad error
    pub fn catalog_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CatalogLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for catalog misses (a boundary maps these to "not found")
    pub fn is_not_found(&self) -> bool {
        matches!(self, CalcError::UnknownBarSize { .. } | CalcError::UnknownGrade { .. })
    }

    /// True for errors caused by the request itself (a boundary maps these to "malformed request")
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::MissingField { .. } | CalcError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownBarSize { .. } => "UNKNOWN_BAR_SIZE",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::CatalogLoad { .. } => "CATALOG_LOAD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject NaN and infinite values for a named field.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("spacing_in", "0", "Bar spacing must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("f_y").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_bar_size("#13").error_code(), "UNKNOWN_BAR_SIZE");
        assert_eq!(CalcError::unknown_grade("Grade 55").error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_boundary_classification() {
        assert!(CalcError::unknown_grade("55").is_not_found());
        assert!(!CalcError::unknown_grade("55").is_bad_request());
        assert!(CalcError::invalid_input("f_c", "0", "x").is_bad_request());
        assert!(!CalcError::catalog_load("props.csv", "missing").is_bad_request());
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_positive("width_in", 12.0).is_ok());
        assert!(require_positive("width_in", 0.0).is_err());
        assert!(require_positive("width_in", f64::NAN).is_err());
        assert!(require_non_negative("cover_in", 0.0).is_ok());
        assert!(require_non_negative("cover_in", -0.5).is_err());
        assert!(require_finite("m_s_kft", f64::INFINITY).is_err());
    }
}
