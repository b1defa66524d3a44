//! Calculator form state
//!
//! Holds the editable input record between edits. The cost record is never
//! stored: [`CalculatorForm::costs`] recomputes it on every call.

use tracing::debug;

use crate::core::cost::{
    CostBreakdown, CostError, CostInputs, Country, Currency, Location, Sector, calculate_costs,
    role_name,
};

/// Editable calculator inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorForm {
    inputs: CostInputs,
}

impl CalculatorForm {
    /// Form seeded with the default scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded with the given inputs.
    ///
    /// Location is reset to `other` when the country has no regional rates.
    pub fn with_inputs(mut inputs: CostInputs) -> Self {
        if !inputs.country.has_regional_rates() {
            inputs.location = Location::Other;
        }
        Self { inputs }
    }

    pub fn inputs(&self) -> &CostInputs {
        &self.inputs
    }

    pub fn set_business_name(&mut self, name: impl Into<String>) {
        self.inputs.business_name = name.into();
    }

    pub fn set_annual_salary(&mut self, salary: f64) {
        self.inputs.annual_salary = salary;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.inputs.currency = currency;
    }

    pub fn set_number_of_hires(&mut self, hires: u32) {
        self.inputs.number_of_hires = hires;
    }

    pub fn set_sector(&mut self, sector: Sector) {
        self.inputs.sector = sector;
    }

    /// Change country. Always resets the location to `other`.
    pub fn set_country(&mut self, country: Country) {
        self.inputs.country = country;
        self.inputs.location = Location::Other;
    }

    /// Change UK location. Returns false, leaving the form untouched, when the
    /// location selector is not available for the current country.
    pub fn set_location(&mut self, location: Location) -> bool {
        if !self.location_selectable() {
            debug!(country = %self.inputs.country, "Location selector hidden, edit ignored");
            return false;
        }
        self.inputs.location = location;
        true
    }

    /// Whether the UK location selector is shown
    pub fn location_selectable(&self) -> bool {
        self.inputs.country.has_regional_rates()
    }

    /// Apply a raw edit as it arrives from a form field
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), CostError> {
        match field {
            "businessName" | "business_name" => self.set_business_name(value),
            "annualSalary" | "annual_salary" => {
                let salary = value.trim().parse::<f64>().map_err(|e| CostError::InvalidInput {
                    field: "annual_salary",
                    message: format!("{:?} is not a number: {}", value, e),
                })?;
                self.set_annual_salary(salary);
            }
            "currency" => self.set_currency(value.parse()?),
            "numberOfHires" | "number_of_hires" => {
                let hires = value.trim().parse::<u32>().map_err(|e| CostError::InvalidInput {
                    field: "number_of_hires",
                    message: format!("{:?} is not a whole number: {}", value, e),
                })?;
                self.set_number_of_hires(hires);
            }
            "sector" => self.set_sector(value.parse()?),
            "country" => self.set_country(value.parse()?),
            "location" => {
                let location = value.parse()?;
                if !self.set_location(location) {
                    return Err(CostError::InvalidInput {
                        field: "location",
                        message: format!(
                            "{} is only selectable in the United Kingdom, not {}",
                            location, self.inputs.country
                        ),
                    });
                }
            }
            _ => return Err(CostError::unknown_key("field", field)),
        }
        Ok(())
    }

    /// Job title shown for the agent row
    pub fn role_name(&self) -> &'static str {
        role_name(self.inputs.sector)
    }

    /// Recalculate the cost record from the current inputs
    pub fn costs(&self) -> Result<CostBreakdown, CostError> {
        calculate_costs(&self.inputs)
    }
}
