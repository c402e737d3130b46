//! Keycheck - i18n message key checker for MediaWiki-style extensions
//!
//! Keycheck verifies that every message key an extension's translation catalog
//! declares is referenced somewhere in its source tree, and that every key the
//! extension manifest implies is actually defined in the catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key-reconciliation engine (parsers, key search, reconciliation)
//! - `issues`: The `Report` produced by a check

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
