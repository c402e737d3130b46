//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check that an extension's message keys are defined and used
//! - `init`: Initialize keycheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lists of undefined and unused keys
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Extension directory containing the manifest and the i18n catalog
    pub component: PathBuf,

    /// Manifest path (overrides config file)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Translation catalog path (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Additional directory to leave out of the search
    /// Can be specified multiple times: --exclude-dir lib --exclude-dir dist
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Maximum number of concurrent key searches
    #[arg(short, long, env = "KEYCHECK_JOBS")]
    pub jobs: Option<usize>,

    /// Time budget in seconds for all key searches
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for undefined and unused i18n message keys
    Check(CheckArgs),
    /// Initialize a new .keycheckrc.json configuration file
    Init,
}
