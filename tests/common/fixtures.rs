//! Test fixtures and data factories
//!
//! Provides factory methods for calculator inputs with sensible defaults.

use proptest::prelude::*;
use true_cost::{CostInputs, Country, Currency, Location, Sector};

/// Factory for calculator inputs
pub struct ScenarioFactory;

impl ScenarioFactory {
    /// The default form: 3 customer service reps in London on £35,000
    pub fn london() -> CostInputs {
        CostInputs {
            business_name: "Test Co".to_string(),
            annual_salary: 35_000.0,
            currency: Currency::Gbp,
            number_of_hires: 3,
            sector: Sector::CustomerService,
            country: Country::UnitedKingdom,
            location: Location::London,
        }
    }

    /// UK scenario with the given hires, everything else default
    pub fn with_hires(number_of_hires: u32) -> CostInputs {
        CostInputs {
            number_of_hires,
            ..Self::london()
        }
    }

    /// Non-UK scenario; location is forced to `Other`
    pub fn abroad(country: Country) -> CostInputs {
        CostInputs {
            country,
            location: Location::Other,
            ..Self::london()
        }
    }
}

pub fn any_currency() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::ALL.to_vec())
}

pub fn any_sector() -> impl Strategy<Value = Sector> {
    proptest::sample::select(Sector::ALL.to_vec())
}

pub fn any_country() -> impl Strategy<Value = Country> {
    proptest::sample::select(Country::ALL.to_vec())
}

pub fn any_location() -> impl Strategy<Value = Location> {
    proptest::sample::select(Location::ALL.to_vec())
}

/// Any valid input record
pub fn any_inputs() -> impl Strategy<Value = CostInputs> {
    (
        0.0f64..250_000.0,
        any_currency(),
        0u32..500,
        any_sector(),
        any_country(),
        any_location(),
    )
        .prop_map(
            |(annual_salary, currency, number_of_hires, sector, country, location)| CostInputs {
                business_name: String::new(),
                annual_salary,
                currency,
                number_of_hires,
                sector,
                country,
                location,
            },
        )
}
