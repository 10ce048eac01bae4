//! Patient-keyed views over resource collections
//!
//! Measures repeatedly ask for "all resources of type X belonging to
//! patient P". [`ResourceIndex`] answers that from a map built in one pass
//! instead of rescanning the full collection per patient;
//! [`filter_by_patient`] is the one-shot filtering variant.

use crate::error::ModelResult;
use crate::reference::{SUBJECT_REFERENCE, reference_id};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Mapping from a patient identifier to that patient's resources of one
/// type, preserving input order per patient.
///
/// Construction resolves every record's patient reference and fails on the
/// first malformed one.
#[derive(Debug)]
pub struct ResourceIndex<'a> {
    by_patient: HashMap<&'a str, Vec<&'a Value>>,
}

impl<'a> ResourceIndex<'a> {
    /// Index records by their `subject.reference` patient id.
    pub fn by_subject(records: &'a [Value]) -> ModelResult<Self> {
        Self::with_reference_path(records, SUBJECT_REFERENCE)
    }

    /// Index records by the patient id found at `reference_path`.
    pub fn with_reference_path(records: &'a [Value], reference_path: &str) -> ModelResult<Self> {
        let mut by_patient: HashMap<&str, Vec<&Value>> = HashMap::new();
        for record in records {
            let patient_id = reference_id(record, reference_path)?;
            by_patient.entry(patient_id).or_default().push(record);
        }
        Ok(Self { by_patient })
    }

    /// All indexed resources for one patient, in input order.
    pub fn get(&self, patient_id: &str) -> &[&'a Value] {
        self.by_patient
            .get(patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct patients with at least one resource.
    pub fn len(&self) -> usize {
        self.by_patient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_patient.is_empty()
    }
}

/// Records whose reference at `reference_path` resolves to a member of
/// `patient_ids`, preserving input order.
pub fn filter_by_patient<'a>(
    records: &'a [Value],
    patient_ids: &BTreeSet<String>,
    reference_path: &str,
) -> ModelResult<Vec<&'a Value>> {
    let mut subset = Vec::new();
    for record in records {
        let patient_id = reference_id(record, reference_path)?;
        if patient_ids.contains(patient_id) {
            subset.push(record);
        }
    }
    Ok(subset)
}
