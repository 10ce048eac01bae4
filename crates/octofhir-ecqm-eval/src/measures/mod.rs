//! Concrete eCQM implementations
//!
//! Each measure composes the shared lookup, index, and date utilities from
//! `octofhir-ecqm-model` with its own code and threshold tables; there is no
//! clinical logic shared through inheritance-style reuse.

mod blood_pressure_control;
mod breast_cancer_screening;
mod influenza_immunization;

pub use blood_pressure_control::BloodPressureControl;
pub use breast_cancer_screening::BreastCancerScreening;
pub use influenza_immunization::InfluenzaImmunization;
