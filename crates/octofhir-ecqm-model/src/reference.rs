//! FHIR-style reference resolution
//!
//! References link one resource to another as `"ResourceType/id"` strings,
//! e.g. an Encounter's `subject.reference` of `"Patient/123"`.

use crate::error::{ModelError, ModelResult};
use crate::path::path_str;
use serde_json::Value;

/// Default reference field linking a resource to its patient
pub const SUBJECT_REFERENCE: &str = "subject.reference";

/// Reference field used by resource types that point at the patient
/// directly, e.g. Immunization
pub const PATIENT_REFERENCE: &str = "patient.reference";

/// Resolve the reference at `path` to a bare resource identifier.
///
/// Expects a string of the form `"Type/id"` and returns everything after
/// the first `/`. An absent field or a string without a separator is a
/// [`ModelError::MalformedReference`].
pub fn reference_id<'a>(resource: &'a Value, path: &str) -> ModelResult<&'a str> {
    let Some(reference) = path_str(resource, path) else {
        return Err(ModelError::malformed_reference(
            path,
            "field is absent or not a string",
        ));
    };
    match reference.split_once('/') {
        Some((_, id)) => Ok(id),
        None => Err(ModelError::malformed_reference(
            path,
            format!("expected 'Type/id', found '{reference}'"),
        )),
    }
}

/// Resolve the default `subject.reference` field to a patient identifier.
pub fn subject_id(resource: &Value) -> ModelResult<&str> {
    reference_id(resource, SUBJECT_REFERENCE)
}
