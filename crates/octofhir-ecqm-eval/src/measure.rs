//! The six-operation measure contract

use crate::error::EvalResult;
use std::collections::BTreeSet;

/// Unordered, duplicate-free collection of patient identifiers.
///
/// Backed by a `BTreeSet` so persisted sections are sorted without a
/// separate sort step and repeated runs are byte-identical.
pub type PatientSet = BTreeSet<String>;

/// A single eCQM over fixed resource collections and a measurement period.
///
/// Every operation is an idempotent, side-effect-free query over the
/// construction-time inputs; the exclusions/exceptions triplet returns
/// `None` when the measure defines no requirement for that category, which
/// is distinct from a requirement that evaluated to an empty set.
///
/// Category definitions: <https://ecqi.healthit.gov/glossary>
pub trait Measure {
    /// CMS measure identifier, e.g. `"CMS125v11"`
    fn id(&self) -> &'static str;

    /// Human-readable measure title
    fn title(&self) -> &'static str;

    /// The broadest cohort eligible for the measure, before any
    /// exclusion/exception logic
    fn initial_population(&self) -> EvalResult<PatientSet>;

    /// The eligible population; evaluated only over initial-population
    /// members
    fn denominator(&self) -> EvalResult<PatientSet>;

    /// Patients removed from consideration entirely, when the measure
    /// defines such a criterion
    fn denominator_exclusions(&self) -> EvalResult<Option<PatientSet>>;

    /// The subset of the denominator meeting the quality action
    fn numerator(&self) -> EvalResult<PatientSet>;

    /// Patients removed from the numerator count, when the measure defines
    /// such a criterion
    fn numerator_exclusions(&self) -> EvalResult<Option<PatientSet>>;

    /// Patients removed from the inclusion count but not from
    /// consideration, when the measure defines such a criterion
    fn denominator_exceptions(&self) -> EvalResult<Option<PatientSet>>;
}
