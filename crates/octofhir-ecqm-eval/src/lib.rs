//! eCQM Measure Evaluation Engine
//!
//! This crate evaluates Electronic Clinical Quality Measures (eCQMs) over
//! in-memory clinical resource collections. Each measure partitions a
//! patient population into six named sets for one measurement period:
//!
//! - **Initial population**: the broadest eligible cohort
//! - **Denominator**: the eligible population for the measure
//! - **Denominator exclusions**: patients removed from consideration
//! - **Numerator**: the subset meeting the quality action
//! - **Numerator exclusions**: patients removed from the numerator count
//! - **Denominator exceptions**: patients removed from the inclusion count
//!
//! # Example
//!
//! ```ignore
//! use octofhir_ecqm_eval::{BreastCancerScreening, MeasurementPeriod, run_all};
//!
//! let period = MeasurementPeriod::parse("2018-01-01", "2022-01-01")?;
//! let measure = BreastCancerScreening::new(period, patients, encounters, procedures);
//! let report = run_all(&measure)?;
//! println!("numerator: {}", report.numerator.len());
//! ```
//!
//! # Architecture
//!
//! - [`Measure`]: the six-operation contract every measure implements
//! - [`measures`]: the concrete measures (CMS125v11, CMS147v11, CMS165v11)
//! - [`MeasurementPeriod`]: the shared inclusive reporting window
//! - [`run_all`] / [`MeasureReport`]: the facade that executes the six
//!   operations in dependency order and the collected result
//!
//! Operations are pure functions of the construction-time inputs: every
//! invocation recomputes its set from scratch, so repeated calls are
//! idempotent, and independent measure instances can run in parallel
//! without synchronization.

pub mod error;
pub mod measure;
pub mod measures;
pub mod period;
pub mod runner;

// Re-export main types
pub use error::{EvalError, EvalResult};
pub use measure::{Measure, PatientSet};
pub use measures::{BloodPressureControl, BreastCancerScreening, InfluenzaImmunization};
pub use period::MeasurementPeriod;
pub use runner::{MeasureReport, run_all};
