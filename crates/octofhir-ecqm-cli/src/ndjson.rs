//! Line-delimited JSON resource loading

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load one resource per line from `<data_dir>/<resource_type>.ndjson`.
///
/// Blank lines are skipped; a malformed line fails with its file position.
pub fn load_resources(data_dir: &Path, resource_type: &str) -> Result<Vec<Value>> {
    let path = data_dir.join(format!("{resource_type}.ndjson"));
    let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut resources = Vec::new();
    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let resource: Value = serde_json::from_str(&line)
            .with_context(|| format!("Malformed JSON at {}:{}", path.display(), line_number + 1))?;
        resources.push(resource);
    }
    Ok(resources)
}
