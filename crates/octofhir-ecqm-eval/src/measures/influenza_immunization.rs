//! CMS147v11 - Preventive Care and Screening: Influenza Immunization
//!
//! Reference: <https://ecqi.healthit.gov/ecqm/ec/2022/cms147v11>

use crate::error::EvalResult;
use crate::measure::{Measure, PatientSet};
use crate::period::MeasurementPeriod;
use chrono::Datelike;
use octofhir_ecqm_model::{
    PATIENT_REFERENCE, ResourceIndex, filter_by_patient, parse_instant, path_str, reference_id,
    subject_id, years_between,
};
use serde_json::Value;

/// CVX code for the seasonal influenza vaccine; compared string-to-string,
/// a JSON number 140 never matches
const INFLUENZA_CVX_CODE: &str = "140";

/// Minimum patient age, in years, at the qualifying encounter's start
const MINIMUM_AGE_YEARS: f64 = 0.5;

/// Flu season spans October through March, wrapping the year boundary
fn in_flu_season(month: u32) -> bool {
    month >= 10 || month <= 3
}

/// Influenza Immunization: patients seen during the period who were at
/// least six months old at the visit, with a flu-season visit and a
/// completed influenza immunization inside the period.
pub struct InfluenzaImmunization {
    period: MeasurementPeriod,
    patients: Vec<Value>,
    encounters: Vec<Value>,
    immunizations: Vec<Value>,
}

impl InfluenzaImmunization {
    pub fn new(
        period: MeasurementPeriod,
        patients: Vec<Value>,
        encounters: Vec<Value>,
        immunizations: Vec<Value>,
    ) -> Self {
        Self {
            period,
            patients,
            encounters,
            immunizations,
        }
    }
}

impl Measure for InfluenzaImmunization {
    fn id(&self) -> &'static str {
        "CMS147v11"
    }

    fn title(&self) -> &'static str {
        "Preventive Care and Screening: Influenza Immunization"
    }

    /// Patients with an encounter starting inside the period who were at
    /// least 0.5 years old at that encounter's start.
    fn initial_population(&self) -> EvalResult<PatientSet> {
        let encounters = ResourceIndex::by_subject(&self.encounters)?;
        let mut population = PatientSet::new();

        for patient in &self.patients {
            let Some(patient_id) = path_str(patient, "id") else {
                continue;
            };
            let Some(birth_date) = path_str(patient, "birthDate") else {
                continue;
            };
            for encounter in encounters.get(patient_id) {
                let Some(start) = path_str(encounter, "period.start") else {
                    continue;
                };
                let started = parse_instant(start)?;
                if !self.period.contains(started) {
                    continue;
                }
                if years_between(birth_date, started)? >= MINIMUM_AGE_YEARS {
                    population.insert(patient_id.to_string());
                    break;
                }
            }
        }

        Ok(population)
    }

    /// Initial-population members with an encounter endpoint that lies
    /// inside the period and falls in flu season. Either endpoint of the
    /// encounter qualifies independently.
    fn denominator(&self) -> EvalResult<PatientSet> {
        let initial_population = self.initial_population()?;
        let mut denominator = PatientSet::new();

        for encounter in &self.encounters {
            let patient_id = subject_id(encounter)?;
            if !initial_population.contains(patient_id) || denominator.contains(patient_id) {
                continue;
            }
            for endpoint_path in ["period.start", "period.end"] {
                let Some(raw) = path_str(encounter, endpoint_path) else {
                    continue;
                };
                let endpoint = parse_instant(raw)?;
                if self.period.contains(endpoint) && in_flu_season(endpoint.month()) {
                    denominator.insert(patient_id.to_string());
                    break;
                }
            }
        }

        Ok(denominator)
    }

    fn denominator_exclusions(&self) -> EvalResult<Option<PatientSet>> {
        Ok(None)
    }

    /// Denominator members with a completed influenza immunization (CVX
    /// "140") occurring inside the measurement period.
    fn numerator(&self) -> EvalResult<PatientSet> {
        let denominator = self.denominator()?;
        let mut numerator = PatientSet::new();

        for immunization in filter_by_patient(&self.immunizations, &denominator, PATIENT_REFERENCE)? {
            if path_str(immunization, "status") != Some("completed") {
                continue;
            }
            if path_str(immunization, "vaccineCode.coding[0].code") != Some(INFLUENZA_CVX_CODE) {
                continue;
            }
            let Some(occurred) = path_str(immunization, "occurrenceDateTime") else {
                continue;
            };
            if self.period.contains(parse_instant(occurred)?) {
                let patient_id = reference_id(immunization, PATIENT_REFERENCE)?;
                numerator.insert(patient_id.to_string());
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
