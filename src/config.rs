use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keycheckrc.json";

/// Directories that hold third-party code rather than the component's own sources.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", "vendor"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default = "default_exclude_files")]
    pub exclude_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_manifest() -> String {
    "extension.json".to_string()
}

fn default_catalog() -> String {
    "i18n/en.json".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_exclude_files() -> Vec<String> {
    vec!["*.json".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            catalog: default_catalog(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
            jobs: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `excludeFiles` is invalid
    /// or if `jobs` is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude_files {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'excludeFiles': \"{}\"", pattern)
            })?;
        }

        if self.jobs == Some(0) {
            bail!("Invalid value for 'jobs': must be at least 1");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
