//! Parsers for the two input documents.
//!
//! - `manifest`: derives known and possibly-used keys from an extension manifest
//! - `catalog`: loads the ordered keys declared by a translation catalog

pub mod catalog;
pub mod manifest;

pub use catalog::{METADATA_KEY, parse_catalog, parse_catalog_file};
pub use manifest::{ManifestKeys, parse_manifest_file};
