//! Cost Calculation Module
//!
//! Static rate tables and the pure in-house vs outsourced cost calculation.
//!
//! ## Layout
//! - `types`: input record, derived record, enumerations, errors
//! - `rates`: compiled-in multipliers, hourly rates and display names
//! - `calculator`: the calculation and scenario comparisons
//! - `utils`: rounding and display formatting

pub mod calculator;
pub mod rates;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{
    ScenarioComparison, calculate_costs, compare_locations, compare_sectors, savings_percent,
    team_leads_required,
};
pub use rates::{
    LocationRates, SectorRates, currency_symbol, currency_symbol_for_code, rate_table, role_name,
    sector_table,
};
pub use types::{
    CostBreakdown, CostError, CostInputs, Country, Currency, Location, RawCostInputs, Sector,
};
pub use utils::{format_hourly, format_money, format_percent, group_thousands, round_half_up};
