//! Evaluation errors for the measure engine

use chrono::{DateTime, Utc};
use octofhir_ecqm_model::ModelError;
use thiserror::Error;

/// Result type for measure operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during measure evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Resource access failure (malformed reference, instant, or number)
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Measurement period bounds are inverted
    #[error("Invalid measurement period: start {start} is after end {end}")]
    InvalidPeriod {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A report section breaks a population subset constraint
    #[error("Invariant violation in '{section}': {constraint}")]
    InvariantViolation {
        section: &'static str,
        constraint: &'static str,
    },

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create an invalid period error
    pub fn invalid_period(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::InvalidPeriod { start, end }
    }

    /// Create an invariant violation error
    pub fn invariant_violation(section: &'static str, constraint: &'static str) -> Self {
        Self::InvariantViolation {
            section,
            constraint,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
