//! Common test utilities for measure testing
//!
//! Builders for FHIR-shaped clinical resources, mirroring the fields the
//! measures read: Patient demographics, Encounter periods, Procedure and
//! Immunization codings, Condition codings, and Observation blood pressure
//! components.

#![allow(dead_code)]

use octofhir_ecqm_eval::MeasurementPeriod;
use serde_json::{Value, json};

/// The 2018 through 2022 reporting window used across the measure tests
pub fn period() -> MeasurementPeriod {
    MeasurementPeriod::parse("2018-01-01", "2022-01-01").unwrap()
}

/// Builder for Patient resources
pub struct PatientBuilder {
    id: String,
    gender: Option<String>,
    birth_date: Option<String>,
}

impl PatientBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gender: None,
            birth_date: None,
        }
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn build(self) -> Value {
        let mut patient = json!({
            "resourceType": "Patient",
            "id": self.id,
        });
        if let Some(gender) = self.gender {
            patient["gender"] = json!(gender);
        }
        if let Some(birth_date) = self.birth_date {
            patient["birthDate"] = json!(birth_date);
        }
        patient
    }
}

/// Builder for Encounter resources
pub struct EncounterBuilder {
    patient_id: String,
    start: Option<String>,
    end: Option<String>,
}

impl EncounterBuilder {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            start: None,
            end: None,
        }
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn build(self) -> Value {
        let mut encounter = json!({
            "resourceType": "Encounter",
            "subject": {"reference": format!("Patient/{}", self.patient_id)},
            "period": {},
        });
        if let Some(start) = self.start {
            encounter["period"]["start"] = json!(start);
        }
        if let Some(end) = self.end {
            encounter["period"]["end"] = json!(end);
        }
        encounter
    }
}

/// Builder for Procedure resources
pub struct ProcedureBuilder {
    patient_id: String,
    status: String,
    code: String,
    performed_start: Option<String>,
}

impl ProcedureBuilder {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            status: "completed".to_string(),
            code: "71651007".to_string(),
            performed_start: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn performed_start(mut self, start: impl Into<String>) -> Self {
        self.performed_start = Some(start.into());
        self
    }

    pub fn build(self) -> Value {
        let mut procedure = json!({
            "resourceType": "Procedure",
            "subject": {"reference": format!("Patient/{}", self.patient_id)},
            "status": self.status,
            "code": {"coding": [{"code": self.code}]},
        });
        if let Some(start) = self.performed_start {
            procedure["performedPeriod"] = json!({"start": start});
        }
        procedure
    }
}

/// Builder for Immunization resources
pub struct ImmunizationBuilder {
    patient_id: String,
    status: String,
    vaccine_code: Value,
    occurrence: Option<String>,
}

impl ImmunizationBuilder {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            status: "completed".to_string(),
            vaccine_code: json!("140"),
            occurrence: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Vaccine code as an arbitrary JSON value, so tests can exercise the
    /// string-vs-number comparison
    pub fn vaccine_code(mut self, code: Value) -> Self {
        self.vaccine_code = code;
        self
    }

    pub fn occurrence(mut self, occurrence: impl Into<String>) -> Self {
        self.occurrence = Some(occurrence.into());
        self
    }

    pub fn build(self) -> Value {
        let mut immunization = json!({
            "resourceType": "Immunization",
            "patient": {"reference": format!("Patient/{}", self.patient_id)},
            "status": self.status,
            "vaccineCode": {"coding": [{"code": self.vaccine_code}]},
        });
        if let Some(occurrence) = self.occurrence {
            immunization["occurrenceDateTime"] = json!(occurrence);
        }
        immunization
    }
}

/// Builder for Condition resources
pub struct ConditionBuilder {
    patient_id: String,
    code: String,
    display: Option<String>,
}

impl ConditionBuilder {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            code: "59621000".to_string(),
            display: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn build(self) -> Value {
        let mut coding = json!({"code": self.code});
        if let Some(display) = self.display {
            coding["display"] = json!(display);
        }
        json!({
            "resourceType": "Condition",
            "subject": {"reference": format!("Patient/{}", self.patient_id)},
            "code": {"coding": [coding]},
        })
    }
}

/// Builder for blood pressure Observation resources
pub struct ObservationBuilder {
    patient_id: String,
    effective: Option<String>,
    systolic: Option<f64>,
    diastolic: Option<f64>,
}

impl ObservationBuilder {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            effective: None,
            systolic: None,
            diastolic: None,
        }
    }

    pub fn effective(mut self, effective: impl Into<String>) -> Self {
        self.effective = Some(effective.into());
        self
    }

    pub fn systolic(mut self, value: f64) -> Self {
        self.systolic = Some(value);
        self
    }

    pub fn diastolic(mut self, value: f64) -> Self {
        self.diastolic = Some(value);
        self
    }

    pub fn build(self) -> Value {
        let mut components = Vec::new();
        if let Some(value) = self.systolic {
            components.push(json!({
                "code": {"coding": [{"code": "8480-6", "display": "Systolic Blood Pressure"}]},
                "valueQuantity": {"value": value, "unit": "mm[Hg]"},
            }));
        }
        if let Some(value) = self.diastolic {
            components.push(json!({
                "code": {"coding": [{"code": "8462-4", "display": "Diastolic Blood Pressure"}]},
                "valueQuantity": {"value": value, "unit": "mm[Hg]"},
            }));
        }
        let mut observation = json!({
            "resourceType": "Observation",
            "subject": {"reference": format!("Patient/{}", self.patient_id)},
            "component": components,
        });
        if let Some(effective) = self.effective {
            observation["effectiveDateTime"] = json!(effective);
        }
        observation
    }
}
