use clap::{ArgAction, Parser};
use std::path::PathBuf;

use deptree::application::dto::OutputFormat;

/// Scenario read when `--scenario` is not given
pub const DEFAULT_SCENARIO: &str = "deptree.scenario.yml";

/// Replay dependency change batches and render the resulting dependencies tree
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(
    about = "Replay dependency change batches and render the resulting dependencies tree",
    long_about = None
)]
pub struct Args {
    /// Scenario file to replay (YAML or TOML)
    #[arg(short, long, default_value = DEFAULT_SCENARIO)]
    pub scenario: PathBuf,

    /// Output format: json or markdown (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to deptree.config.yml next to the scenario)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Merge changes without any snapshot filter
    #[arg(long)]
    pub no_filters: bool,

    /// Exit with code 1 when visible dependencies stay unresolved
    #[arg(long)]
    pub fail_on_unresolved: bool,

    /// Include dependencies that are normally hidden from the tree
    #[arg(long)]
    pub show_hidden: bool,

    /// Check the built-in rule catalog and exit
    #[arg(long)]
    pub validate_rules: bool,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default `tracing` directive for the requested verbosity
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
