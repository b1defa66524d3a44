//! # True Cost
//!
//! Compares the full cost of hiring agents in-house against outsourcing them.
//!
//! ## Features
//!
//! - **Static rate tables**: UK regional and sector salary multipliers, team lead
//!   and account manager hourly rates, role names and currency symbols
//! - **Pure calculation**: one call turns a set of hiring inputs into a complete,
//!   unrounded cost record
//! - **Form state**: editable inputs with the country/location rules of the
//!   calculator page
//! - **Reports**: sectioned output as a table, JSON or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use true_cost::{CostInputs, Location, Sector, calculate_costs};
//!
//! let inputs = CostInputs {
//!     annual_salary: 35_000.0,
//!     number_of_hires: 3,
//!     sector: Sector::CustomerService,
//!     location: Location::London,
//!     ..Default::default()
//! };
//!
//! let costs = calculate_costs(&inputs).unwrap();
//! assert_eq!(costs.team_lead_yearly, 79_040.0);
//! println!("Annual savings: {:.0}", costs.savings);
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AppError, Result};

pub use crate::core::cost::{
    CostBreakdown, CostError, CostInputs, Country, Currency, Location, RawCostInputs,
    ScenarioComparison, Sector, calculate_costs, compare_locations, compare_sectors,
};
pub use crate::core::{CalculatorForm, CostReport};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
