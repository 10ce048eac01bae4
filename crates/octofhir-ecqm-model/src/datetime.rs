//! Instant parsing and year-fraction arithmetic
//!
//! Every age and date-window predicate in the measures runs on the same
//! day-granular year fraction: whole days between two instants divided by
//! 365.0. Range membership reuses that computation so boundary dates never
//! round differently than age comparisons do.

use crate::error::{ModelError, ModelResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Days per year used by all year-fraction computations
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Parse an ISO instant: an RFC 3339 date-time, a date-time without an
/// offset taken as UTC, or a bare date taken as midnight UTC.
pub fn parse_instant(raw: &str) -> ModelResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ModelError::malformed_instant(raw))
}

/// Conversion into a UTC instant, accepting pre-parsed instants and ISO
/// strings interchangeably.
pub trait AsInstant {
    fn as_instant(&self) -> ModelResult<DateTime<Utc>>;
}

impl AsInstant for DateTime<Utc> {
    fn as_instant(&self) -> ModelResult<DateTime<Utc>> {
        Ok(*self)
    }
}

impl AsInstant for &str {
    fn as_instant(&self) -> ModelResult<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl AsInstant for String {
    fn as_instant(&self) -> ModelResult<DateTime<Utc>> {
        parse_instant(self)
    }
}

/// Signed year fraction from `from` to `to`: whole days / 365.0.
///
/// Positive when `to` is after `from`.
pub fn year_fraction(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Signed difference in years as `(b - a)`, see [`year_fraction`].
pub fn years_between(a: impl AsInstant, b: impl AsInstant) -> ModelResult<f64> {
    Ok(year_fraction(a.as_instant()?, b.as_instant()?))
}

/// True iff `date` is not before `start` and not after `end`, both
/// boundaries inclusive, under the same year-fraction arithmetic as
/// [`years_between`].
pub fn is_within_range(
    date: impl AsInstant,
    start: impl AsInstant,
    end: impl AsInstant,
) -> ModelResult<bool> {
    let date = date.as_instant()?;
    let since_start = year_fraction(date, start.as_instant()?);
    let until_end = year_fraction(date, end.as_instant()?);
    Ok(since_start <= 0.0 && until_end >= 0.0)
}
