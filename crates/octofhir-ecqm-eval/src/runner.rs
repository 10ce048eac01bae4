//! Measure runner facade
//!
//! Executes a measure's six operations in dependency order and collects the
//! result sets into a [`MeasureReport`]. The runner trusts the measure to
//! uphold the population subset invariants; callers that want them checked
//! run [`MeasureReport::validate`].

use crate::error::{EvalError, EvalResult};
use crate::measure::{Measure, PatientSet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// The six population sets of one measure over one measurement period.
///
/// The exclusions/exceptions triplet is `None` when the measure defines no
/// requirement for that category; an empty set means the requirement
/// evaluated to zero members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureReport {
    /// CMS measure identifier, e.g. `"CMS125v11"`
    pub measure: String,
    pub initial_population: PatientSet,
    pub denominator: PatientSet,
    pub denominator_exclusions: Option<PatientSet>,
    pub numerator: PatientSet,
    pub numerator_exclusions: Option<PatientSet>,
    pub denominator_exceptions: Option<PatientSet>,
}

impl MeasureReport {
    /// The six sections in dependency order, `None` for not-applicable
    /// categories.
    pub fn sections(&self) -> [(&'static str, Option<&PatientSet>); 6] {
        [
            ("initial_population", Some(&self.initial_population)),
            ("denominator", Some(&self.denominator)),
            (
                "denominator_exclusions",
                self.denominator_exclusions.as_ref(),
            ),
            ("numerator", Some(&self.numerator)),
            ("numerator_exclusions", self.numerator_exclusions.as_ref()),
            (
                "denominator_exceptions",
                self.denominator_exceptions.as_ref(),
            ),
        ]
    }

    /// Member counts per section, `None` for not-applicable categories.
    pub fn counts(&self) -> IndexMap<&'static str, Option<usize>> {
        self.sections()
            .into_iter()
            .map(|(name, section)| (name, section.map(BTreeSet::len)))
            .collect()
    }

    /// The persistence shape: a JSON object mapping each section name to a
    /// sorted list of patient ids, or `null` for not-applicable categories.
    pub fn to_json(&self) -> Value {
        let mut sections = serde_json::Map::new();
        for (name, section) in self.sections() {
            let value = match section {
                Some(ids) => serde_json::json!(ids),
                None => Value::Null,
            };
            sections.insert(name.to_string(), value);
        }
        Value::Object(sections)
    }

    /// Check the population subset invariants: numerator within
    /// denominator, denominator within initial population, and each
    /// present exclusion/exception set within the denominator.
    pub fn validate(&self) -> EvalResult<()> {
        if !self.denominator.is_subset(&self.initial_population) {
            return Err(EvalError::invariant_violation(
                "denominator",
                "must be a subset of the initial population",
            ));
        }
        if !self.numerator.is_subset(&self.denominator) {
            return Err(EvalError::invariant_violation(
                "numerator",
                "must be a subset of the denominator",
            ));
        }
        let constrained = [
            ("denominator_exclusions", &self.denominator_exclusions),
            ("numerator_exclusions", &self.numerator_exclusions),
            ("denominator_exceptions", &self.denominator_exceptions),
        ];
        for (name, section) in constrained {
            if let Some(ids) = section {
                if !ids.is_subset(&self.denominator) {
                    return Err(EvalError::invariant_violation(
                        name,
                        "must be a subset of the denominator",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Run all six operations of a measure in dependency order:
/// initial population, denominator, denominator exclusions, numerator,
/// numerator exclusions, denominator exceptions.
pub fn run_all(measure: &dyn Measure) -> EvalResult<MeasureReport> {
    log::debug!("evaluating measure {}", measure.id());

    let report = MeasureReport {
        measure: measure.id().to_string(),
        initial_population: measure.initial_population()?,
        denominator: measure.denominator()?,
        denominator_exclusions: measure.denominator_exclusions()?,
        numerator: measure.numerator()?,
        numerator_exclusions: measure.numerator_exclusions()?,
        denominator_exceptions: measure.denominator_exceptions()?,
    };

    log::debug!(
        "measure {} evaluated: initial population {}, denominator {}, numerator {}",
        report.measure,
        report.initial_population.len(),
        report.denominator.len(),
        report.numerator.len(),
    );
    Ok(report)
}
