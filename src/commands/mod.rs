//! CLI command implementations

pub mod query;
pub mod suggest;

use std::path::Path;

use anyhow::{Context, Result};
use sift::Record;

/// Load a corpus file: a JSON array of records.
pub fn load_corpus(path: &Path) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse corpus file {}", path.display()))
}
