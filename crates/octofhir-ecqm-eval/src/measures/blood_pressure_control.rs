//! CMS165v11 - Controlling High Blood Pressure
//!
//! Reference: <https://ecqi.healthit.gov/ecqm/ec/2023/cms165v11>

use crate::error::EvalResult;
use crate::measure::{Measure, PatientSet};
use crate::period::MeasurementPeriod;
use chrono::{DateTime, Utc};
use octofhir_ecqm_model::{ResourceIndex, parse_instant, path_get, path_number, path_str, years_between};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// SNOMED CT code for essential hypertension
const HYPERTENSION_CODE: &str = "59621000";

/// LOINC codes for the blood pressure panel components
const SYSTOLIC_COMPONENT_CODE: &str = "8480-6";
const DIASTOLIC_COMPONENT_CODE: &str = "8462-4";

/// Controlled blood pressure thresholds, in mmHg
const MAX_SYSTOLIC: f64 = 140.0;
const MAX_DIASTOLIC: f64 = 90.0;

/// Eligible age band at the end of the measurement period, inclusive
const ELIGIBLE_AGE_YEARS: RangeInclusive<f64> = 18.0..=85.0;

/// Age band for the advanced-illness exclusion, inclusive
const EXCLUSION_AGE_YEARS: RangeInclusive<f64> = 66.0..=80.0;

/// Exact `code.coding[0].display` strings marking an advanced-illness
/// diagnosis for the denominator exclusion.
static ADVANCED_ILLNESS_DISPLAYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Alzheimer's disease (disorder)",
        "Familial Alzheimer's disease of early onset (disorder)",
        "Dementia associated with Alzheimer's disease (disorder)",
        "Vascular dementia (disorder)",
        "Metastatic malignant neoplasm (disorder)",
        "Chronic congestive heart failure (disorder)",
        "End-stage renal disease (disorder)",
        "Cirrhosis of liver (disorder)",
        "Pulmonary emphysema (disorder)",
        "Respiratory failure (disorder)",
    ]
    .into_iter()
    .collect()
});

/// Controlling High Blood Pressure: hypertensive adults whose most recent
/// in-period blood pressure reading is at or below 140/90.
pub struct BloodPressureControl {
    period: MeasurementPeriod,
    patients: Vec<Value>,
    conditions: Vec<Value>,
    observations: Vec<Value>,
}

impl BloodPressureControl {
    pub fn new(
        period: MeasurementPeriod,
        patients: Vec<Value>,
        conditions: Vec<Value>,
        observations: Vec<Value>,
    ) -> Self {
        Self {
            period,
            patients,
            conditions,
            observations,
        }
    }

    /// Patient age at the end of the measurement period, `None` when the
    /// birth date is not recorded.
    fn age_at_period_end(&self, patient: &Value) -> EvalResult<Option<f64>> {
        match path_str(patient, "birthDate") {
            Some(birth_date) => Ok(Some(years_between(birth_date, self.period.end())?)),
            None => Ok(None),
        }
    }
}

/// The `valueQuantity.value` of the component coded `component_code`, or
/// `None` when the observation carries no such component or the component
/// has no value.
fn component_value(observation: &Value, component_code: &str) -> EvalResult<Option<f64>> {
    let Some(components) = path_get(observation, "component").and_then(Value::as_array) else {
        return Ok(None);
    };
    for component in components {
        if path_str(component, "code.coding[0].code") == Some(component_code) {
            return Ok(path_number(component, "valueQuantity.value")?);
        }
    }
    Ok(None)
}

impl Measure for BloodPressureControl {
    fn id(&self) -> &'static str {
        "CMS165v11"
    }

    fn title(&self) -> &'static str {
        "Controlling High Blood Pressure"
    }

    /// Patients aged 18-85 inclusive at period end with an essential
    /// hypertension diagnosis. The condition's date is taken as coincident
    /// with its associated encounter and is not separately range-checked.
    fn initial_population(&self) -> EvalResult<PatientSet> {
        let conditions = ResourceIndex::by_subject(&self.conditions)?;
        let mut population = PatientSet::new();

        for patient in &self.patients {
            let Some(patient_id) = path_str(patient, "id") else {
                continue;
            };
            let Some(age) = self.age_at_period_end(patient)? else {
                continue;
            };
            if !ELIGIBLE_AGE_YEARS.contains(&age) {
                continue;
            }
            let hypertensive = conditions.get(patient_id).iter().any(|condition| {
                path_str(condition, "code.coding[0].code") == Some(HYPERTENSION_CODE)
            });
            if hypertensive {
                population.insert(patient_id.to_string());
            }
        }

        Ok(population)
    }

    /// Same criteria as the initial population.
    fn denominator(&self) -> EvalResult<PatientSet> {
        self.initial_population()
    }

    /// Denominator members aged 66-80 inclusive at period end carrying a
    /// condition from the advanced-illness display table.
    fn denominator_exclusions(&self) -> EvalResult<Option<PatientSet>> {
        let denominator = self.denominator()?;
        let conditions = ResourceIndex::by_subject(&self.conditions)?;
        let mut exclusions = PatientSet::new();

        for patient in &self.patients {
            let Some(patient_id) = path_str(patient, "id") else {
                continue;
            };
            if !denominator.contains(patient_id) {
                continue;
            }
            let Some(age) = self.age_at_period_end(patient)? else {
                continue;
            };
            if !EXCLUSION_AGE_YEARS.contains(&age) {
                continue;
            }
            let advanced_illness = conditions.get(patient_id).iter().any(|condition| {
                path_str(condition, "code.coding[0].display")
                    .is_some_and(|display| ADVANCED_ILLNESS_DISPLAYS.contains(display))
            });
            if advanced_illness {
                exclusions.insert(patient_id.to_string());
            }
        }

        Ok(Some(exclusions))
    }

    /// Denominator members whose single most recent in-period observation
    /// carries both blood pressure components at or below 140/90.
    ///
    /// The most recent observation decides membership even when it lacks a
    /// component: an earlier qualifying reading never reinstates a patient.
    /// Equal `effectiveDateTime` values resolve to the observation later in
    /// input order.
    fn numerator(&self) -> EvalResult<PatientSet> {
        let denominator = self.denominator()?;
        let observations = ResourceIndex::by_subject(&self.observations)?;
        let mut numerator = PatientSet::new();

        for patient_id in &denominator {
            let mut most_recent: Option<(DateTime<Utc>, &Value)> = None;
            for &observation in observations.get(patient_id) {
                let Some(raw) = path_str(observation, "effectiveDateTime") else {
                    continue;
                };
                let effective = parse_instant(raw)?;
                if !self.period.contains(effective) {
                    continue;
                }
                match most_recent {
                    Some((latest, _)) if effective < latest => {}
                    _ => most_recent = Some((effective, observation)),
                }
            }

            let Some((_, decisive)) = most_recent else {
                continue;
            };
            let systolic = component_value(decisive, SYSTOLIC_COMPONENT_CODE)?;
            let diastolic = component_value(decisive, DIASTOLIC_COMPONENT_CODE)?;
            if let (Some(systolic), Some(diastolic)) = (systolic, diastolic) {
                if systolic <= MAX_SYSTOLIC && diastolic <= MAX_DIASTOLIC {
                    numerator.insert(patient_id.clone());
                }
            }
        }

        Ok(numerator)
    }

    fn numerator_exclusions(&self) -> EvalResult<Option<PatientSet>> {
        Ok(None)
    }

    fn denominator_exceptions(&self) -> EvalResult<Option<PatientSet>> {
        Ok(None)
    }
}
