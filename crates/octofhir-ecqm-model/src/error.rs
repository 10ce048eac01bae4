//! Errors for clinical resource access

use serde_json::Value;
use thiserror::Error;

/// Result type for resource access operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while reading clinical resources
///
/// Lookup-level absence is not an error: the path accessors return `None`
/// (or `Ok(None)`) and callers treat the criterion as unsatisfied. These
/// variants cover data-quality defects that must abort the enclosing
/// computation instead of silently skewing cohort membership.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A reference field is absent or lacks the `"Type/id"` form
    #[error("Malformed reference at '{path}': {message}")]
    MalformedReference { path: String, message: String },

    /// A field expected to hold an ISO instant is not parseable
    #[error("Malformed instant: '{value}'")]
    MalformedInstant { value: String },

    /// A field expected to hold a number holds something else
    #[error("Malformed number at '{path}': found {found}")]
    MalformedNumber { path: String, found: String },
}

impl ModelError {
    /// Create a malformed reference error
    pub fn malformed_reference(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedReference {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed instant error
    pub fn malformed_instant(value: impl Into<String>) -> Self {
        Self::MalformedInstant {
            value: value.into(),
        }
    }

    /// Create a malformed number error from the offending value
    pub fn malformed_number(path: impl Into<String>, found: &Value) -> Self {
        Self::MalformedNumber {
            path: path.into(),
            found: found.to_string(),
        }
    }
}
