//! Evaluate command implementation

use crate::ndjson;
use anyhow::{Context, Result};
use colored::Colorize;
use octofhir_ecqm::{
    BloodPressureControl, BreastCancerScreening, InfluenzaImmunization, Measure, MeasureReport,
    MeasurementPeriod, run_all,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the evaluate command
pub struct EvaluateConfig {
    pub data_dir: PathBuf,
    pub start: String,
    pub end: String,
    pub output_dir: Option<PathBuf>,
    pub check: bool,
    pub verbose: bool,
}

/// Evaluate all shipped measures over an NDJSON population
pub fn evaluate(config: EvaluateConfig) -> Result<()> {
    let period = MeasurementPeriod::parse(&config.start, &config.end)
        .context("Invalid measurement period")?;

    if config.verbose {
        eprintln!("Loading population from {}", config.data_dir.display());
    }

    let patients = ndjson::load_resources(&config.data_dir, "Patient")?;
    let encounters = ndjson::load_resources(&config.data_dir, "Encounter")?;
    let conditions = ndjson::load_resources(&config.data_dir, "Condition")?;
    let observations = ndjson::load_resources(&config.data_dir, "Observation")?;
    let procedures = ndjson::load_resources(&config.data_dir, "Procedure")?;
    let immunizations = ndjson::load_resources(&config.data_dir, "Immunization")?;

    if config.verbose {
        eprintln!(
            "Loaded {} patients, {} encounters, {} conditions, {} observations, {} procedures, {} immunizations",
            patients.len(),
            encounters.len(),
            conditions.len(),
            observations.len(),
            procedures.len(),
            immunizations.len(),
        );
    }

    let measures: Vec<Box<dyn Measure>> = vec![
        Box::new(BreastCancerScreening::new(
            period,
            patients.clone(),
            encounters.clone(),
            procedures,
        )),
        Box::new(InfluenzaImmunization::new(
            period,
            patients.clone(),
            encounters,
            immunizations,
        )),
        Box::new(BloodPressureControl::new(
            period,
            patients,
            conditions,
            observations,
        )),
    ];

    for measure in &measures {
        if config.verbose {
            eprintln!("Evaluating {}", measure.id());
        }
        let report = run_all(measure.as_ref())
            .with_context(|| format!("Evaluation failed for {}", measure.id()))?;
        if config.check {
            report
                .validate()
                .with_context(|| format!("Inconsistent report for {}", measure.id()))?;
        }
        print_counts(measure.as_ref(), &report);
        if let Some(output_dir) = &config.output_dir {
            save_report(output_dir, &report)?;
        }
    }

    Ok(())
}

/// Print per-section member counts, `-` for not-applicable sections
fn print_counts(measure: &dyn Measure, report: &MeasureReport) {
    println!("{} {}", report.measure.bold(), measure.title().dimmed());
    for (name, count) in report.counts() {
        match count {
            Some(count) => println!("  {name}: {}", count.to_string().green()),
            None => println!("  {name}: {}", "-".dimmed()),
        }
    }
}

/// Write `<output_dir>/<MeasureId>/<section>.json` per section: a sorted
/// list of patient ids, or `null` for not-applicable sections
fn save_report(output_dir: &Path, report: &MeasureReport) -> Result<()> {
    let measure_dir = output_dir.join(&report.measure);
    fs::create_dir_all(&measure_dir)
        .with_context(|| format!("Failed to create {}", measure_dir.display()))?;

    for (name, section) in report.sections() {
        let path = measure_dir.join(format!("{name}.json"));
        let payload = match section {
            Some(ids) => serde_json::to_string_pretty(ids)?,
            None => "null".to_string(),
        };
        fs::write(&path, payload + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
