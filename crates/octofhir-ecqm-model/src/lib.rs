//! Clinical resource access layer for eCQM evaluation
//!
//! This crate provides the building blocks that measure implementations use
//! to read heterogeneous FHIR-shaped records without a compiled schema:
//!
//! - **Path lookup**: dotted-path traversal with explicit array indices over
//!   `serde_json::Value` trees (`path_get`, `path_str`, `path_number`)
//! - **Reference resolution**: `"ResourceType/id"` pointer parsing
//!   (`reference_id`, `subject_id`)
//! - **Resource indexing**: patient-id keyed views over resource collections
//!   (`ResourceIndex`, `filter_by_patient`)
//! - **Instant arithmetic**: ISO instant parsing and the day-granular
//!   year-fraction comparisons shared by every measure predicate
//!   (`parse_instant`, `years_between`, `is_within_range`)
//!
//! Absence and malformedness are kept distinct throughout: a missing field
//! is an ordinary `None` that predicates treat as "criterion not satisfied",
//! while a present-but-unparseable reference, instant, or number is a
//! [`ModelError`] that aborts the enclosing computation.

pub mod datetime;
pub mod error;
pub mod index;
pub mod path;
pub mod reference;

// Re-export main types
pub use datetime::{AsInstant, DAYS_PER_YEAR, is_within_range, parse_instant, year_fraction, years_between};
pub use error::{ModelError, ModelResult};
pub use index::{ResourceIndex, filter_by_patient};
pub use path::{path_get, path_number, path_str};
pub use reference::{PATIENT_REFERENCE, SUBJECT_REFERENCE, reference_id, subject_id};
