//! Extension manifest parser.
//!
//! Some message keys are used by the host runtime purely because of what the
//! manifest declares, so no source reference will ever exist for them:
//!
//! - `descriptionmsg` and `namemsg` name messages directly.
//! - Every entry of `AvailableRights` implies `action-<right>` and `right-<right>`.
//!
//! Special pages are a softer case. A page's lower-cased name is the default
//! key for its description, but pages may override that. Those keys count as
//! used when the catalog defines them, without being required.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::KeySet;

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    descriptionmsg: Option<String>,
    #[serde(default)]
    namemsg: Option<String>,
    #[serde(default, rename = "AvailableRights")]
    available_rights: Vec<String>,
    #[serde(default, rename = "SpecialPages")]
    special_pages: Map<String, Value>,
}

/// Keys derived from the manifest structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestKeys {
    /// Keys that must exist in the catalog and need no search.
    pub known: KeySet,
    /// Keys that count as used if defined, but may be absent.
    pub possibly_used: KeySet,
}

impl ManifestKeys {
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Manifest is not valid JSON")?;
        if !value.is_object() {
            bail!("Manifest must be a JSON object");
        }
        let manifest = Manifest::deserialize(value).context("Manifest has an unexpected shape")?;
        Ok(Self::from_manifest(manifest))
    }

    fn from_manifest(manifest: Manifest) -> Self {
        let mut known = KeySet::new();
        if let Some(msg) = manifest.descriptionmsg {
            known.insert(msg);
        }
        if let Some(msg) = manifest.namemsg {
            known.insert(msg);
        }
        for right in &manifest.available_rights {
            known.insert(format!("action-{}", right));
            known.insert(format!("right-{}", right));
        }

        let possibly_used = manifest
            .special_pages
            .keys()
            .map(|name| name.to_lowercase())
            .collect();

        Self {
            known,
            possibly_used,
        }
    }
}

pub fn parse_manifest_file(path: &Path) -> Result<ManifestKeys> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    ManifestKeys::from_json(&content)
        .with_context(|| format!("Failed to parse manifest file: {}", path.display()))
}
