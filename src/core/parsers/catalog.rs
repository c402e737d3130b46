//! Translation catalog parser.
//!
//! A catalog is a flat JSON object mapping message keys to their
//! default-language text, plus one reserved `@metadata` entry.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::KeySet;

/// Reserved catalog entry holding authors and similar metadata.
pub const METADATA_KEY: &str = "@metadata";

/// Parse catalog content into its declared keys, in document order.
pub fn parse_catalog(content: &str) -> Result<KeySet> {
    let entries: Map<String, Value> =
        serde_json::from_str(content).context("Catalog is not a valid JSON object")?;
    Ok(entries
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key != METADATA_KEY)
        .collect())
}

pub fn parse_catalog_file(path: &Path) -> Result<KeySet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}
