//! All three measures over one shared population
//!
//! Exercises the public umbrella API the way a reporting pipeline uses it:
//! one resource load, three measures, validated reports.

use octofhir_ecqm::{
    BloodPressureControl, BreastCancerScreening, InfluenzaImmunization, MeasurementPeriod,
    run_all,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn period() -> MeasurementPeriod {
    MeasurementPeriod::parse("2018-01-01", "2022-01-01").unwrap()
}

/// Three patients:
/// - "screened": 60-year-old woman, flu-season visit, mammography, flu shot,
///   controlled blood pressure under a hypertension diagnosis
/// - "untreated": 70-year-old man with hypertension, elevated reading, and
///   an advanced-illness diagnosis
/// - "young": 30-year-old woman with a summer visit only
fn patients() -> Vec<Value> {
    vec![
        json!({"id": "screened", "gender": "female", "birthDate": "1961-06-15"}),
        json!({"id": "untreated", "gender": "male", "birthDate": "1950-03-02"}),
        json!({"id": "young", "gender": "female", "birthDate": "1991-11-20"}),
    ]
}

fn encounters() -> Vec<Value> {
    vec![
        json!({
            "subject": {"reference": "Patient/screened"},
            "period": {"start": "2018-11-05T09:00:00+00:00", "end": "2018-11-05T09:30:00+00:00"},
        }),
        json!({
            "subject": {"reference": "Patient/untreated"},
            "period": {"start": "2019-02-12T14:00:00+00:00", "end": "2019-02-12T14:45:00+00:00"},
        }),
        json!({
            "subject": {"reference": "Patient/young"},
            "period": {"start": "2019-07-22T10:00:00+00:00", "end": "2019-07-22T10:20:00+00:00"},
        }),
    ]
}

fn measure_ids(report: &octofhir_ecqm::MeasureReport) -> Vec<&str> {
    report.numerator.iter().map(String::as_str).collect()
}

#[test]
fn test_breast_cancer_screening_end_to_end() {
    let procedures = vec![json!({
        "subject": {"reference": "Patient/screened"},
        "status": "completed",
        "code": {"coding": [{"code": "71651007", "display": "Mammography (procedure)"}]},
        "performedPeriod": {"start": "2017-05-20T08:00:00+00:00"},
    })];

    let measure = BreastCancerScreening::new(period(), patients(), encounters(), procedures);
    let report = run_all(&measure).unwrap();
    report.validate().unwrap();

    // "young" is under 52, "untreated" is male
    assert_eq!(report.initial_population, ["screened".to_string()].into());
    assert_eq!(measure_ids(&report), vec!["screened"]);
}

#[test]
fn test_influenza_immunization_end_to_end() {
    let immunizations = vec![json!({
        "patient": {"reference": "Patient/screened"},
        "status": "completed",
        "vaccineCode": {"coding": [{"code": "140", "display": "Influenza, seasonal, injectable"}]},
        "occurrenceDateTime": "2018-11-05T09:15:00+00:00",
    })];

    let measure = InfluenzaImmunization::new(period(), patients(), encounters(), immunizations);
    let report = run_all(&measure).unwrap();
    report.validate().unwrap();

    // every patient was seen in-period as an adult, but "young" only in July
    assert_eq!(report.initial_population.len(), 3);
    assert_eq!(
        report.denominator,
        ["screened".to_string(), "untreated".to_string()].into()
    );
    assert_eq!(measure_ids(&report), vec!["screened"]);
}

#[test]
fn test_blood_pressure_control_end_to_end() {
    let conditions = vec![
        json!({
            "subject": {"reference": "Patient/screened"},
            "code": {"coding": [{"code": "59621000", "display": "Essential hypertension (disorder)"}]},
        }),
        json!({
            "subject": {"reference": "Patient/untreated"},
            "code": {"coding": [{"code": "59621000", "display": "Essential hypertension (disorder)"}]},
        }),
        json!({
            "subject": {"reference": "Patient/untreated"},
            "code": {"coding": [{"code": "26929004", "display": "Alzheimer's disease (disorder)"}]},
        }),
    ];
    let observations = vec![
        json!({
            "subject": {"reference": "Patient/screened"},
            "effectiveDateTime": "2021-04-03T11:00:00+00:00",
            "component": [
                {"code": {"coding": [{"code": "8480-6"}]}, "valueQuantity": {"value": 126.0}},
                {"code": {"coding": [{"code": "8462-4"}]}, "valueQuantity": {"value": 79.0}},
            ],
        }),
        json!({
            "subject": {"reference": "Patient/untreated"},
            "effectiveDateTime": "2021-04-03T11:00:00+00:00",
            "component": [
                {"code": {"coding": [{"code": "8480-6"}]}, "valueQuantity": {"value": 158.0}},
                {"code": {"coding": [{"code": "8462-4"}]}, "valueQuantity": {"value": 97.0}},
            ],
        }),
    ];

    let measure = BloodPressureControl::new(period(), patients(), conditions, observations);
    let report = run_all(&measure).unwrap();
    report.validate().unwrap();

    assert_eq!(
        report.initial_population,
        ["screened".to_string(), "untreated".to_string()].into()
    );
    // 71 at period end with an advanced-illness diagnosis
    assert_eq!(report.denominator_exclusions, Some(["untreated".to_string()].into()));
    assert_eq!(measure_ids(&report), vec!["screened"]);
}
