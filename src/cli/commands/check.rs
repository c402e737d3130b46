use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::args::{CheckArgs, OutputFormat};
use crate::{
    config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config},
    core::{
        ReconcileOptions,
        parsers::{parse_catalog_file, parse_manifest_file},
        reconcile,
        search::{Exclusions, TreeSearcher},
    },
    issues::Report,
};

/// Result of the check command, ready for printing.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: Report,
    /// File name of the manifest, used in report headings.
    pub manifest_name: String,
}

/// Apply CLI overrides (CLI > config file > defaults).
fn apply_overrides(config: &mut Config, args: &CheckArgs) -> Result<()> {
    config
        .exclude_dirs
        .extend(args.exclude_dirs.iter().cloned());
    if args.jobs.is_some() {
        config.jobs = args.jobs;
    }
    if args.timeout.is_some() {
        config.timeout_secs = args.timeout;
    }
    config.validate()
}

fn resolve(root: &Path, override_path: Option<&PathBuf>, configured: &str) -> PathBuf {
    match override_path {
        Some(path) => path.clone(),
        None => root.join(configured),
    }
}

pub fn check(args: &CheckArgs) -> Result<CheckOutcome> {
    let root = args.component.as_path();
    if !root.is_dir() {
        bail!("Extension directory not found: {}", root.display());
    }

    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(root)?;
    if args.verbose && !from_file {
        eprintln!(
            "{} No {} found, using default configuration",
            "note:".bold().cyan(),
            CONFIG_FILE_NAME
        );
    }
    apply_overrides(&mut config, args)?;

    let manifest_path = resolve(root, args.manifest.as_ref(), &config.manifest);
    let catalog_path = resolve(root, args.catalog.as_ref(), &config.catalog);

    if args.format == OutputFormat::Text {
        println!("Starting i18n key check for: {}", root.display());
    }

    let manifest = parse_manifest_file(&manifest_path)?;
    let catalog = parse_catalog_file(&catalog_path)?;

    if args.verbose {
        eprintln!(
            "{} {} known, {} possibly-used, {} catalog key(s)",
            "note:".bold().cyan(),
            manifest.known.len(),
            manifest.possibly_used.len(),
            catalog.len()
        );
    }

    let exclusions = Exclusions::new(root, &config.exclude_dirs, &config.exclude_files)?
        .with_catalog(root, &catalog_path);
    let searcher = TreeSearcher::new(root, exclusions, args.verbose);
    let options = ReconcileOptions {
        jobs: config.jobs,
        timeout: config.timeout(),
    };
    let report = reconcile(&manifest, &catalog, &searcher, &options)?;

    let manifest_name = manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| config.manifest.clone());

    Ok(CheckOutcome {
        report,
        manifest_name,
    })
}
