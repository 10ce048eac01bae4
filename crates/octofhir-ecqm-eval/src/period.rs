//! Measurement period shared by all operations of one measure

use crate::error::{EvalError, EvalResult};
use chrono::{DateTime, Utc};
use octofhir_ecqm_model::{parse_instant, year_fraction};

/// Immutable reporting window, inclusive on both boundaries.
///
/// Containment uses the same day-granular year-fraction arithmetic as
/// [`octofhir_ecqm_model::years_between`], so a reference date equal to
/// either bound is inside the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementPeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl MeasurementPeriod {
    /// Create a period, rejecting inverted bounds.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> EvalResult<Self> {
        if start > end {
            return Err(EvalError::invalid_period(start, end));
        }
        Ok(Self { start, end })
    }

    /// Create a period from ISO instant strings.
    pub fn parse(start: &str, end: &str) -> EvalResult<Self> {
        Self::new(parse_instant(start)?, parse_instant(end)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// True iff `instant` falls inside the period, boundaries included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        year_fraction(instant, self.start) <= 0.0 && year_fraction(instant, self.end) >= 0.0
    }
}
