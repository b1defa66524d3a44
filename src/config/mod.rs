//! Configuration management for the calculator
//!
//! Configuration is read from an optional YAML file, then overridden by
//! `TRUE_COST_*` environment variables, then validated.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "TRUE_COST_";

fn env_error<E: fmt::Display>(name: &'static str) -> impl FnOnce(E) -> AppError {
    move |e| AppError::Config(format!("Invalid {}{}: {}", ENV_PREFIX, name, e))
}

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Inputs used when a flag is not given
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration: file (if any), then environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TRUE_COST_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(name) = var("BUSINESS_NAME") {
            self.defaults.business_name = name;
        }
        if let Some(salary) = var("SALARY") {
            self.defaults.annual_salary = salary.parse().map_err(env_error("SALARY"))?;
        }
        if let Some(currency) = var("CURRENCY") {
            self.defaults.currency = currency.parse().map_err(env_error("CURRENCY"))?;
        }
        if let Some(hires) = var("HIRES") {
            self.defaults.number_of_hires = hires.parse().map_err(env_error("HIRES"))?;
        }
        if let Some(sector) = var("SECTOR") {
            self.defaults.sector = sector.parse().map_err(env_error("SECTOR"))?;
        }
        if let Some(country) = var("COUNTRY") {
            self.defaults.country = country.parse().map_err(env_error("COUNTRY"))?;
        }
        if let Some(location) = var("LOCATION") {
            self.defaults.location = location.parse().map_err(env_error("LOCATION"))?;
        }
        if let Some(format) = var("FORMAT") {
            self.output.format = format.parse()?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level.parse()?;
        }
        if let Some(json) = var("LOG_JSON") {
            self.logging.json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.defaults
            .validate()
            .map_err(|e| AppError::Config(format!("Defaults config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
