//! Cost Calculation Types
//!
//! Input record, derived cost record and the enumerations that key the rate tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency the salary is entered in.
///
/// Display-only: no exchange rate is ever applied, every amount stays in the
/// units of the selected currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Gbp,
    Usd,
    Eur,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Gbp,
        Currency::Usd,
        Currency::Eur,
        Currency::Aud,
        Currency::Cad,
    ];

    /// ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GBP" => Ok(Currency::Gbp),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "AUD" => Ok(Currency::Aud),
            "CAD" => Ok(Currency::Cad),
            _ => Err(CostError::unknown_key("currency", s)),
        }
    }
}

/// Industry sector of the agents being hired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    #[default]
    CustomerService,
    Finance,
    ItSupport,
    Hr,
    Sales,
    DataEntry,
    Other,
}

impl Sector {
    pub const ALL: [Sector; 7] = [
        Sector::CustomerService,
        Sector::Finance,
        Sector::ItSupport,
        Sector::Hr,
        Sector::Sales,
        Sector::DataEntry,
        Sector::Other,
    ];

    /// Form key, e.g. `it-support`
    pub fn key(&self) -> &'static str {
        match self {
            Sector::CustomerService => "customer-service",
            Sector::Finance => "finance",
            Sector::ItSupport => "it-support",
            Sector::Hr => "hr",
            Sector::Sales => "sales",
            Sector::DataEntry => "data-entry",
            Sector::Other => "other",
        }
    }

    /// Label shown in the sector selector
    pub fn label(&self) -> &'static str {
        match self {
            Sector::CustomerService => "Customer Service",
            Sector::Finance => "Finance & Accounting",
            Sector::ItSupport => "IT Support",
            Sector::Hr => "Human Resources",
            Sector::Sales => "Sales & Marketing",
            Sector::DataEntry => "Data Entry",
            Sector::Other => "Other",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sector {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CostError::unknown_key("sector", s))
    }
}

/// Country of the hires. Only the United Kingdom has regional rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Country {
    #[default]
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    #[serde(rename = "United States")]
    UnitedStates,
    Canada,
    Australia,
    Other,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::UnitedKingdom,
        Country::UnitedStates,
        Country::Canada,
        Country::Australia,
        Country::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Country::UnitedKingdom => "United Kingdom",
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Other => "Other",
        }
    }

    /// Whether the UK location selector is available for this country
    pub fn has_regional_rates(&self) -> bool {
        matches!(self, Country::UnitedKingdom)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "united kingdom" | "uk" | "gb" => Ok(Country::UnitedKingdom),
            "united states" | "us" | "usa" => Ok(Country::UnitedStates),
            "canada" | "ca" => Ok(Country::Canada),
            "australia" | "au" => Ok(Country::Australia),
            "other" => Ok(Country::Other),
            _ => Err(CostError::unknown_key("country", s)),
        }
    }
}

/// UK region. `Other` doubles as the generic fallback for non-UK countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    London,
    Southeast,
    Midlands,
    North,
    Scotland,
    Wales,
    Northernireland,
    #[default]
    Other,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::London,
        Location::Southeast,
        Location::Midlands,
        Location::North,
        Location::Scotland,
        Location::Wales,
        Location::Northernireland,
        Location::Other,
    ];

    /// Form key, e.g. `northernireland`
    pub fn key(&self) -> &'static str {
        match self {
            Location::London => "london",
            Location::Southeast => "southeast",
            Location::Midlands => "midlands",
            Location::North => "north",
            Location::Scotland => "scotland",
            Location::Wales => "wales",
            Location::Northernireland => "northernireland",
            Location::Other => "other",
        }
    }

    /// Label shown in the UK location selector
    pub fn label(&self) -> &'static str {
        match self {
            Location::London => "London",
            Location::Southeast => "South East",
            Location::Midlands => "Midlands",
            Location::North => "North",
            Location::Scotland => "Scotland",
            Location::Wales => "Wales",
            Location::Northernireland => "N. Ireland",
            Location::Other => "Other",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Location {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CostError::unknown_key("location", s))
    }
}

/// Hiring parameters entered by the visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Free-form, not used by the calculation
    #[serde(default)]
    pub business_name: String,
    /// Annual gross salary for one hire
    pub annual_salary: f64,
    #[serde(default)]
    pub currency: Currency,
    /// Number of agents to hire
    pub number_of_hires: u32,
    #[serde(default)]
    pub sector: Sector,
    #[serde(default)]
    pub country: Country,
    #[serde(default = "default_input_location")]
    pub location: Location,
}

/// Location preselected on the form
fn default_input_location() -> Location {
    Location::London
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            annual_salary: 35_000.0,
            currency: Currency::Gbp,
            number_of_hires: 3,
            sector: Sector::CustomerService,
            country: Country::UnitedKingdom,
            location: default_input_location(),
        }
    }
}

impl CostInputs {
    /// Location used for rate lookups. Non-UK countries always use the fallback row.
    pub fn effective_location(&self) -> Location {
        if self.country.has_regional_rates() {
            self.location
        } else {
            Location::Other
        }
    }

    /// Check the numeric fields
    pub fn validate(&self) -> Result<(), CostError> {
        if !self.annual_salary.is_finite() {
            return Err(CostError::InvalidInput {
                field: "annual_salary",
                message: format!("must be a finite number, got {}", self.annual_salary),
            });
        }
        if self.annual_salary < 0.0 {
            return Err(CostError::InvalidInput {
                field: "annual_salary",
                message: format!("must not be negative, got {}", self.annual_salary),
            });
        }
        Ok(())
    }
}

/// Input record with enumerations still as raw strings, as submitted by a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCostInputs {
    #[serde(default)]
    pub business_name: String,
    pub annual_salary: f64,
    pub currency: String,
    pub number_of_hires: u32,
    pub sector: String,
    pub country: String,
    pub location: String,
}

impl TryFrom<RawCostInputs> for CostInputs {
    type Error = CostError;

    fn try_from(raw: RawCostInputs) -> Result<Self, Self::Error> {
        let inputs = CostInputs {
            business_name: raw.business_name,
            annual_salary: raw.annual_salary,
            currency: raw.currency.parse()?,
            number_of_hires: raw.number_of_hires,
            sector: raw.sector.parse()?,
            country: raw.country.parse()?,
            location: raw.location.parse()?,
        };
        inputs.validate()?;
        Ok(inputs)
    }
}

/// Derived cost record.
///
/// Every amount is unrounded; rounding belongs to whoever displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Agent hourly rate after location and sector adjustment
    pub agent_rate: f64,
    /// Team lead hourly rate
    pub team_lead_rate: f64,
    /// Account manager hourly rate
    pub account_manager_rate: f64,
    pub agent_yearly_in_house: f64,
    pub agent_yearly_outsourced: f64,
    pub team_lead_yearly: f64,
    pub account_manager_yearly: f64,
    pub training_in_house: f64,
    pub training_outsourced: f64,
    pub direct_costs_in_house: f64,
    pub direct_costs_outsourced: f64,
    pub office_space: f64,
    pub hardware_software: f64,
    /// Benefits and insurance
    pub indirect_costs: f64,
    pub overhead_in_house: f64,
    pub total_in_house: f64,
    pub total_outsourced: f64,
    /// Annual savings, negative when outsourcing costs more
    pub savings: f64,
    /// Savings as a whole percentage of the in-house total
    pub savings_percent: i64,
    pub three_year_savings: f64,
    pub five_year_savings: f64,
}

impl CostBreakdown {
    /// Savings accumulated over an arbitrary number of years
    pub fn savings_over(&self, years: u32) -> f64 {
        self.savings * f64::from(years)
    }

    /// Hourly agent rate rounded for display
    pub fn agent_rate_display(&self) -> i64 {
        crate::core::cost::utils::round_half_up(self.agent_rate)
    }

    /// Outsourced overhead is bundled into the outsourced rate
    pub fn overhead_outsourced(&self) -> f64 {
        0.0
    }
}

/// Cost calculation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostError {
    #[error("Unknown {field}: {value:?}")]
    UnknownKey { field: &'static str, value: String },

    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl CostError {
    pub fn unknown_key(field: &'static str, value: &str) -> Self {
        CostError::UnknownKey {
            field,
            value: value.to_string(),
        }
    }
}
