//! Report integration tests
//!
//! Sectioned reports and their rendered table, JSON and YAML forms.

#[cfg(test)]
mod tests {
    use crate::common::ScenarioFactory;
    use pretty_assertions::assert_eq;
    use true_cost::cli::calculate::print_report;
    use true_cost::core::cost::{format_money, format_percent};
    use true_cost::{CostReport, Currency, calculate_costs};

    #[test]
    fn test_report_sections() {
        let report = CostReport::generate(&ScenarioFactory::london()).unwrap();
        let titles: Vec<&str> = report.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Direct Employee Costs", "Hidden Overhead & Indirect Costs"]
        );

        let labels: Vec<&str> = report
            .direct_costs
            .lines
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Customer Service Rep",
                "Team Lead",
                "Account Manager",
                "Training"
            ]
        );
    }

    #[test]
    fn test_report_matches_breakdown() {
        let inputs = ScenarioFactory::with_hires(45);
        let costs = calculate_costs(&inputs).unwrap();
        let report = CostReport::from_breakdown(&inputs, &costs);

        assert_eq!(report.total_in_house, costs.total_in_house);
        assert_eq!(report.total_outsourced, costs.total_outsourced);
        assert_eq!(report.savings.annual, costs.savings);
        assert_eq!(report.savings.percent, costs.savings_percent);
        assert_eq!(report.savings.five_year, costs.five_year_savings);
        assert_eq!(report.overhead.subtotal_outsourced, 0.0);
        assert!(report.overhead.lines.iter().all(|l| l.outsourced.is_none()));
    }

    #[test]
    fn test_rendered_amounts() {
        let report = CostReport::generate(&ScenarioFactory::london()).unwrap();
        let text = print_report(&report);

        assert!(text.contains("True Cost Calculator: Test Co"));
        assert!(text.contains(&format_money(report.total_in_house, Currency::Gbp)));
        assert!(text.contains(&format_percent(report.savings.percent)));
        assert!(text.contains("£498,090"));
        assert!(text.contains("£146,940"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = CostReport::generate(&ScenarioFactory::london()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["currency"], "GBP");
        assert_eq!(json["inputs"]["country"], "United Kingdom");
        assert_eq!(json["inputs"]["sector"], "customer-service");
        assert_eq!(json["savings"]["percent"], 70);
        assert!(json["overhead"]["lines"][0]["outsourced"].is_null());
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_money(245_700.0, Currency::Gbp), "£245,700");
        assert_eq!(format_money(999.5, Currency::Usd), "$1,000");
        assert_eq!(format_money(21.875, Currency::Eur), "€22");
        assert_eq!(format_money(0.0, Currency::Aud), "A$0");
    }
}
