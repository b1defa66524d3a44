//! Calculator form integration tests
//!
//! Field edits as they arrive from the page, and the country/location rules.

#[cfg(test)]
mod tests {
    use true_cost::{CalculatorForm, CostError, Country, Currency, Location, Sector};

    #[test]
    fn test_field_edits_recalculate() {
        let mut form = CalculatorForm::new();
        let before = form.costs().unwrap();

        form.set_field("numberOfHires", "30").unwrap();
        let after = form.costs().unwrap();

        assert_eq!(form.inputs().number_of_hires, 30);
        assert!(after.total_in_house > before.total_in_house);
        assert_eq!(after.team_lead_yearly, before.team_lead_yearly * 2.0);
    }

    #[test]
    fn test_snake_and_camel_field_names() {
        let mut form = CalculatorForm::new();
        form.set_field("annualSalary", "41000").unwrap();
        assert_eq!(form.inputs().annual_salary, 41_000.0);
        form.set_field("annual_salary", "42000").unwrap();
        assert_eq!(form.inputs().annual_salary, 42_000.0);
        form.set_field("businessName", "Acme").unwrap();
        assert_eq!(form.inputs().business_name, "Acme");
    }

    #[test]
    fn test_country_then_location() {
        let mut form = CalculatorForm::new();

        form.set_field("country", "United States").unwrap();
        assert_eq!(form.inputs().location, Location::Other);
        assert!(!form.location_selectable());

        assert!(matches!(
            form.set_field("location", "london"),
            Err(CostError::InvalidInput { field: "location", .. })
        ));
        assert_eq!(form.inputs().location, Location::Other);

        form.set_field("country", "United Kingdom").unwrap();
        assert!(form.location_selectable());
        assert_eq!(form.inputs().location, Location::Other);

        form.set_field("location", "wales").unwrap();
        assert_eq!(form.inputs().location, Location::Wales);
    }

    #[test]
    fn test_currency_changes_symbol_only() {
        let mut form = CalculatorForm::new();
        let gbp = form.costs().unwrap();
        form.set_field("currency", "CAD").unwrap();

        assert_eq!(form.inputs().currency, Currency::Cad);
        assert_eq!(form.costs().unwrap(), gbp);
    }

    #[test]
    fn test_role_name_follows_sector() {
        let mut form = CalculatorForm::new();
        assert_eq!(form.role_name(), "Customer Service Rep");
        form.set_sector(Sector::DataEntry);
        assert_eq!(form.role_name(), "Data Entry Specialist");
    }

    #[test]
    fn test_bad_edits_leave_form_unchanged() {
        let mut form = CalculatorForm::new();
        let original = form.clone();

        assert!(matches!(
            form.set_field("sector", "mining"),
            Err(CostError::UnknownKey { field: "sector", .. })
        ));
        assert!(form.set_field("numberOfHires", "-3").is_err());
        assert!(form.set_field("annualSalary", "lots").is_err());
        assert!(form.set_field("favouriteColour", "blue").is_err());

        assert_eq!(form, original);
    }

    #[test]
    fn test_with_inputs_normalises_location() {
        let form = CalculatorForm::with_inputs(true_cost::CostInputs {
            country: Country::Australia,
            location: Location::Scotland,
            ..Default::default()
        });
        assert_eq!(form.inputs().location, Location::Other);
    }
}
