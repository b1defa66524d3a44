//! Command line interface
//!
//! `calculate` prints the full report for one scenario, `compare` runs it across
//! every location or sector, and `rates` dumps the rate tables. Output goes to
//! stdout; logs go to stderr.

pub mod calculate;
pub mod compare;
pub mod inputs;
pub mod output;
pub mod rates;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::utils::error::Result;
use crate::utils::logging::{LogLevel, init_logging};

pub use calculate::CalculateArgs;
pub use compare::{CompareArgs, CompareBy};
pub use inputs::InputArgs;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "true-cost",
    version,
    long_version = LONG_VERSION,
    about = "Compare the true cost of in-house hiring against outsourcing"
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "TRUE_COST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full cost breakdown for one hiring scenario
    Calculate(CalculateArgs),
    /// Compare a scenario across all UK locations or all sectors
    Compare(CompareArgs),
    /// Show the rate tables
    Rates,
}

impl Cli {
    /// Effective configuration with command line overrides applied
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        Ok(config)
    }

    /// Run the selected command and return its rendered output
    pub fn execute(&self, config: &Config) -> Result<String> {
        let format = config.output.format;
        debug!(%format, command = ?self.command, "Executing command");

        match &self.command {
            Commands::Calculate(args) => calculate::execute(args, config, format),
            Commands::Compare(args) => compare::execute(args, config, format),
            Commands::Rates => rates::execute(config.defaults.currency, format),
        }
    }
}

/// Load configuration, install logging and run the command
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.load_config()?;
    init_logging(config.logging.level, config.logging.json)?;
    cli.execute(&config)
}
