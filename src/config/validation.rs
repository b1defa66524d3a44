//! Configuration validation

use super::models::*;
use crate::core::cost::Location;
use tracing::debug;

/// Validation of a configuration section. Errors are human-readable messages.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for InputDefaults {
    fn validate(&self) -> Result<(), String> {
        if !self.annual_salary.is_finite() {
            return Err(format!(
                "Default annual_salary must be a finite number, got {}",
                self.annual_salary
            ));
        }
        if self.annual_salary < 0.0 {
            return Err(format!(
                "Default annual_salary must not be negative, got {}",
                self.annual_salary
            ));
        }
        if !self.country.has_regional_rates() && self.location != Location::Other {
            debug!(
                country = %self.country,
                location = %self.location,
                "Default location only applies in the United Kingdom"
            );
        }
        Ok(())
    }
}
