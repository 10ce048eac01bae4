//! Dotted-path lookup over schema-less resource trees
//!
//! Resources are opaque `serde_json::Value` trees; fields are reached with
//! `.`-delimited paths where a segment ending in `[i]` first resolves the
//! key and then indexes the resulting array, e.g. `"code.coding[0].code"`.

use crate::error::{ModelError, ModelResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches a path segment with a trailing array index, e.g. `coding[0]`
static INDEX_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\[(-?\d+)\]$").expect("index segment pattern is valid"));

/// Resolve a dotted path against a resource tree.
///
/// Traversal short-circuits to `None` at the first absent segment. Negative
/// and out-of-range array indices yield `None` rather than an error, and a
/// JSON `null` is treated the same as an absent field.
pub fn path_get<'a>(resource: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = resource;
    for segment in path.split('.') {
        current = segment_get(current, segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Resolve a dotted path to a string field.
pub fn path_str<'a>(resource: &'a Value, path: &str) -> Option<&'a str> {
    path_get(resource, path).and_then(Value::as_str)
}

/// Resolve a dotted path to a numeric field.
///
/// Absence is `Ok(None)`; a present non-numeric value is a hard
/// [`ModelError::MalformedNumber`], never a silent coercion.
pub fn path_number(resource: &Value, path: &str) -> ModelResult<Option<f64>> {
    match path_get(resource, path) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ModelError::malformed_number(path, value)),
    }
}

/// Resolve a single path segment, with optional trailing array index
fn segment_get<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    if segment.ends_with(']') {
        if let Some(captures) = INDEX_SEGMENT.captures(segment) {
            let index: i64 = captures[2].parse().ok()?;
            let items = value.get(&captures[1])?.as_array()?;
            if index < 0 {
                return None;
            }
            return items.get(index as usize);
        }
    }
    value.get(segment)
}
