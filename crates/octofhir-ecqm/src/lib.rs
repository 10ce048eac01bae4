//! Electronic Clinical Quality Measure (eCQM) evaluation for Rust
//!
//! This crate computes eCQMs over in-memory clinical resource collections,
//! partitioning a patient population into the six standard reporting sets
//! per measure per measurement period:
//!
//! - Schema-less resource access (dotted paths, references, per-patient
//!   indexing) via [`model`]
//! - The six-operation [`Measure`] contract, the three shipped measures
//!   (CMS125v11, CMS147v11, CMS165v11), and the [`run_all`] facade via
//!   [`eval`]
//!
//! # Example
//!
//! ```ignore
//! use octofhir_ecqm::{BloodPressureControl, MeasurementPeriod, run_all};
//!
//! let period = MeasurementPeriod::parse("2018-01-01", "2022-01-01")?;
//! let measure = BloodPressureControl::new(period, patients, conditions, observations);
//! let report = run_all(&measure)?;
//! report.validate()?;
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_ecqm_eval as eval;
pub use octofhir_ecqm_model as model;

// Convenience re-exports
pub use octofhir_ecqm_eval::{
    BloodPressureControl, BreastCancerScreening, EvalError, EvalResult, InfluenzaImmunization,
    Measure, MeasureReport, MeasurementPeriod, PatientSet, run_all,
};
pub use octofhir_ecqm_model::{ModelError, ModelResult};
