//! Configuration data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::cost::{CostInputs, Country, Currency, Location, Sector};
use crate::utils::error::AppError;
use crate::utils::logging::LogLevel;

/// Default salary shown in the form
pub fn default_salary() -> f64 {
    35_000.0
}

/// Default number of hires shown in the form
pub fn default_hires() -> u32 {
    3
}

pub fn default_location() -> Location {
    Location::London
}

/// Input values used when a command line flag is not given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub business_name: String,
    #[serde(default = "default_salary")]
    pub annual_salary: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_hires")]
    pub number_of_hires: u32,
    #[serde(default)]
    pub sector: Sector,
    #[serde(default)]
    pub country: Country,
    #[serde(default = "default_location")]
    pub location: Location,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            annual_salary: default_salary(),
            currency: Currency::default(),
            number_of_hires: default_hires(),
            sector: Sector::default(),
            country: Country::default(),
            location: default_location(),
        }
    }
}

impl From<&InputDefaults> for CostInputs {
    fn from(defaults: &InputDefaults) -> Self {
        CostInputs {
            business_name: defaults.business_name.clone(),
            annual_salary: defaults.annual_salary,
            currency: defaults.currency,
            number_of_hires: defaults.number_of_hires,
            sector: defaults.sector,
            country: defaults.country,
            location: defaults.location,
        }
    }
}

/// Report output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(AppError::config(format!("Invalid output format: {}", s))),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}
