//! Calculator input flags shared by the `calculate` and `compare` commands

use clap::Args;
use tracing::warn;

use crate::config::InputDefaults;
use crate::core::CalculatorForm;
use crate::core::cost::{CostInputs, Country, Currency, Location, Sector};

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Business name shown in the report header
    #[arg(long)]
    pub business_name: Option<String>,

    /// Annual gross salary for one hire
    #[arg(short, long)]
    pub salary: Option<f64>,

    /// Salary currency (GBP, USD, EUR, AUD, CAD)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Number of agents to hire
    #[arg(short = 'n', long)]
    pub hires: Option<u32>,

    /// Industry sector, e.g. customer-service or it-support
    #[arg(long)]
    pub sector: Option<Sector>,

    /// Country, e.g. "United Kingdom" or uk
    #[arg(long)]
    pub country: Option<Country>,

    /// UK location, e.g. london or northernireland
    #[arg(short, long)]
    pub location: Option<Location>,
}

impl InputArgs {
    /// Apply the flags on top of the configured defaults.
    ///
    /// Edits go through the form so a changed country resets the location
    /// exactly as it does on the calculator page.
    pub fn resolve(&self, defaults: &InputDefaults) -> CostInputs {
        let mut form = CalculatorForm::with_inputs(CostInputs::from(defaults));

        if let Some(name) = &self.business_name {
            form.set_business_name(name.clone());
        }
        if let Some(salary) = self.salary {
            form.set_annual_salary(salary);
        }
        if let Some(currency) = self.currency {
            form.set_currency(currency);
        }
        if let Some(hires) = self.hires {
            form.set_number_of_hires(hires);
        }
        if let Some(sector) = self.sector {
            form.set_sector(sector);
        }
        if let Some(country) = self.country {
            form.set_country(country);
        }
        if let Some(location) = self.location {
            if !form.set_location(location) {
                warn!(
                    country = %form.inputs().country,
                    location = %location,
                    "--location only applies in the United Kingdom, using fallback rates"
                );
            }
        }

        form.inputs().clone()
    }
}
