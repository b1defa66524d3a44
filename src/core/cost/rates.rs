//! Static Rate Tables
//!
//! Compiled-in multipliers, hourly rates and display names. Nothing here is
//! loaded or mutated at runtime.

use serde::Serialize;

use crate::core::cost::types::{Currency, Location, Sector};

/// Paid working hours in a year (52 weeks × 40 hours)
pub const WORKING_HOURS_PER_YEAR: f64 = 2080.0;
/// Agents covered by one team lead
pub const AGENTS_PER_TEAM_LEAD: u32 = 15;
/// Agents per overhead-allocation unit
pub const AGENTS_PER_ALLOCATION_UNIT: f64 = 20.0;

/// Benefits, taxes and overhead loaded onto in-house salaries
pub const IN_HOUSE_LOADING_FACTOR: f64 = 1.8;
/// Markup applied by the outsourcing provider
pub const OUTSOURCED_MARKUP_FACTOR: f64 = 1.06;

// Per allocation unit (20 agents)
pub const TRAINING_IN_HOUSE_PER_UNIT: f64 = 21_500.0;
pub const TRAINING_OUTSOURCED_PER_UNIT: f64 = 15_000.0;
pub const OFFICE_SPACE_PER_UNIT: f64 = 126_720.0;
pub const HARDWARE_SOFTWARE_PER_UNIT: f64 = 110_000.0;
pub const INDIRECT_COSTS_PER_UNIT: f64 = 176_380.0;

/// Symbol used when a currency code is not recognised
pub const FALLBACK_CURRENCY_SYMBOL: &str = "£";

/// Salary multiplier for a UK region
pub fn location_multiplier(location: Location) -> f64 {
    match location {
        Location::London => 1.3,
        Location::Southeast => 1.15,
        Location::Midlands => 1.0,
        Location::North => 0.9,
        Location::Scotland => 0.95,
        Location::Wales => 0.92,
        Location::Northernireland => 0.88,
        Location::Other => 1.0,
    }
}

/// Salary multiplier for a sector
pub fn sector_multiplier(sector: Sector) -> f64 {
    match sector {
        Sector::CustomerService => 1.0,
        Sector::Finance => 1.3,
        Sector::ItSupport => 1.25,
        Sector::Hr => 1.15,
        Sector::Sales => 1.2,
        Sector::DataEntry => 0.85,
        Sector::Other => 1.0,
    }
}

/// Team lead hourly rate
pub fn team_lead_rate(location: Location) -> f64 {
    match location {
        Location::London => 38.0,
        Location::Southeast => 35.0,
        Location::Midlands => 32.0,
        Location::North => 30.0,
        Location::Scotland => 31.0,
        Location::Wales => 30.0,
        Location::Northernireland => 29.0,
        Location::Other => 34.0,
    }
}

/// Account manager hourly rate
pub fn account_manager_rate(location: Location) -> f64 {
    match location {
        Location::London => 52.0,
        Location::Southeast => 48.0,
        Location::Midlands => 45.0,
        Location::North => 42.0,
        Location::Scotland => 44.0,
        Location::Wales => 42.0,
        Location::Northernireland => 40.0,
        Location::Other => 48.0,
    }
}

/// Job title of the agent for a sector
pub fn role_name(sector: Sector) -> &'static str {
    match sector {
        Sector::CustomerService => "Customer Service Rep",
        Sector::Finance => "Finance & Accounting",
        Sector::ItSupport => "IT Support Tech",
        Sector::Hr => "HR Coordinator",
        Sector::Sales => "Sales & Marketing",
        Sector::DataEntry => "Data Entry Specialist",
        Sector::Other => "Business Support",
    }
}

/// Display symbol for a currency
pub fn currency_symbol(currency: Currency) -> &'static str {
    match currency {
        Currency::Gbp => "£",
        Currency::Usd => "$",
        Currency::Eur => "€",
        Currency::Aud => "A$",
        Currency::Cad => "C$",
    }
}

/// Display symbol for a raw currency code, falling back to `£`
pub fn currency_symbol_for_code(code: &str) -> &'static str {
    code.parse::<Currency>()
        .map(currency_symbol)
        .unwrap_or(FALLBACK_CURRENCY_SYMBOL)
}

/// One row of the location table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRates {
    pub location: Location,
    pub label: &'static str,
    pub multiplier: f64,
    pub team_lead_rate: f64,
    pub account_manager_rate: f64,
}

/// One row of the sector table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRates {
    pub sector: Sector,
    pub label: &'static str,
    pub role_name: &'static str,
    pub multiplier: f64,
}

/// All location rows, in selector order
pub fn rate_table() -> Vec<LocationRates> {
    Location::ALL
        .into_iter()
        .map(|location| LocationRates {
            location,
            label: location.label(),
            multiplier: location_multiplier(location),
            team_lead_rate: team_lead_rate(location),
            account_manager_rate: account_manager_rate(location),
        })
        .collect()
}

/// All sector rows, in selector order
pub fn sector_table() -> Vec<SectorRates> {
    Sector::ALL
        .into_iter()
        .map(|sector| SectorRates {
            sector,
            label: sector.label(),
            role_name: role_name(sector),
            multiplier: sector_multiplier(sector),
        })
        .collect()
}
