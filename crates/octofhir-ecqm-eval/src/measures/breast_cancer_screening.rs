//! CMS125v11 - Breast Cancer Screening
//!
//! Reference: <https://ecqi.healthit.gov/ecqm/ec/2023/cms125v11>

use crate::error::{EvalError, EvalResult};
use crate::measure::{Measure, PatientSet};
use crate::period::MeasurementPeriod;
use chrono::{DateTime, Datelike, Utc};
use octofhir_ecqm_model::{ResourceIndex, is_within_range, parse_instant, path_str, subject_id, years_between};
use serde_json::Value;
use std::ops::RangeInclusive;

/// SNOMED CT code for a screening mammography procedure
const MAMMOGRAPHY_CODE: &str = "71651007";

/// Eligible age band at the end of the measurement period, inclusive
const ELIGIBLE_AGE_YEARS: RangeInclusive<f64> = 52.0..=74.0;

/// Month opening the mammography lookback window
const LOOKBACK_MONTH: u32 = 10;

/// Breast Cancer Screening: women 52-74 with a visit during the period,
/// screened with a completed mammography inside the lookback window.
pub struct BreastCancerScreening {
    period: MeasurementPeriod,
    patients: Vec<Value>,
    encounters: Vec<Value>,
    procedures: Vec<Value>,
}

impl BreastCancerScreening {
    pub fn new(
        period: MeasurementPeriod,
        patients: Vec<Value>,
        encounters: Vec<Value>,
        procedures: Vec<Value>,
    ) -> Self {
        Self {
            period,
            patients,
            encounters,
            procedures,
        }
    }

    /// Start of the mammography window: October of two years before the
    /// measurement period start.
    fn lookback_start(&self) -> EvalResult<DateTime<Utc>> {
        let start = self.period.start();
        start
            .with_year(start.year() - 2)
            .and_then(|shifted| shifted.with_month(LOOKBACK_MONTH))
            .ok_or_else(|| {
                EvalError::internal("measurement period start has no October lookback counterpart")
            })
    }
}

impl Measure for BreastCancerScreening {
    fn id(&self) -> &'static str {
        "CMS125v11"
    }

    fn title(&self) -> &'static str {
        "Breast Cancer Screening"
    }

    /// Female patients aged 52-74 inclusive at period end with at least one
    /// encounter starting inside the measurement period.
    fn initial_population(&self) -> EvalResult<PatientSet> {
        let encounters = ResourceIndex::by_subject(&self.encounters)?;
        let mut population = PatientSet::new();

        for patient in &self.patients {
            if path_str(patient, "gender") != Some("female") {
                continue;
            }
            let Some(patient_id) = path_str(patient, "id") else {
                continue;
            };
            let Some(birth_date) = path_str(patient, "birthDate") else {
                continue;
            };
            let age = years_between(birth_date, self.period.end())?;
            if !ELIGIBLE_AGE_YEARS.contains(&age) {
                continue;
            }
            for encounter in encounters.get(patient_id) {
                let Some(start) = path_str(encounter, "period.start") else {
                    continue;
                };
                if self.period.contains(parse_instant(start)?) {
                    population.insert(patient_id.to_string());
                    break;
                }
            }
        }

        Ok(population)
    }

    /// Same criteria as the initial population.
    fn denominator(&self) -> EvalResult<PatientSet> {
        self.initial_population()
    }

    fn denominator_exclusions(&self) -> EvalResult<Option<PatientSet>> {
        Ok(None)
    }

    /// Denominator members with a completed mammography whose start falls
    /// between October of two years before the period start and the period
    /// end, inclusive.
    fn numerator(&self) -> EvalResult<PatientSet> {
        let denominator = self.denominator()?;
        let window_start = self.lookback_start()?;
        let mut numerator = PatientSet::new();

        for procedure in &self.procedures {
            let patient_id = subject_id(procedure)?;
            if !denominator.contains(patient_id) {
                continue;
            }
            let Some(performed) = path_str(procedure, "performedPeriod.start") else {
                continue;
            };
            if !is_within_range(parse_instant(performed)?, window_start, self.period.end())? {
                continue;
            }
            if path_str(procedure, "status") != Some("completed") {
                continue;
            }
            if path_str(procedure, "code.coding[0].code") != Some(MAMMOGRAPHY_CODE) {
                continue;
            }
            numerator.insert(patient_id.to_string());
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
