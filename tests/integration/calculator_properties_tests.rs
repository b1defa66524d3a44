//! Property tests for the calculator invariants

#[cfg(test)]
mod tests {
    use crate::common::CostBreakdownAssertions;
    use crate::common::fixtures::any_inputs;
    use proptest::prelude::*;
    use true_cost::core::cost::team_leads_required;
    use true_cost::{CostInputs, calculate_costs};

    proptest! {
        #[test]
        fn totals_are_never_negative(inputs in any_inputs()) {
            let costs = calculate_costs(&inputs).unwrap();
            costs.assert_non_negative_totals();
        }

        #[test]
        fn totals_are_exact_sums(inputs in any_inputs()) {
            let costs = calculate_costs(&inputs).unwrap();
            costs.assert_consistent_sums();
        }

        #[test]
        fn totals_grow_with_hires(inputs in any_inputs(), extra in 1u32..100) {
            let more = CostInputs {
                number_of_hires: inputs.number_of_hires + extra,
                ..inputs.clone()
            };
            let base = calculate_costs(&inputs).unwrap();
            let grown = calculate_costs(&more).unwrap();

            prop_assert!(grown.total_in_house >= base.total_in_house);
            prop_assert!(grown.total_outsourced >= base.total_outsourced);
        }

        #[test]
        fn calculation_is_deterministic(inputs in any_inputs()) {
            prop_assert_eq!(calculate_costs(&inputs).unwrap(), calculate_costs(&inputs).unwrap());
        }

        #[test]
        fn currency_never_changes_amounts(inputs in any_inputs()) {
            let gbp = CostInputs { currency: true_cost::Currency::Gbp, ..inputs.clone() };
            prop_assert_eq!(calculate_costs(&gbp).unwrap(), calculate_costs(&inputs).unwrap());
        }

        #[test]
        fn team_leads_cover_every_agent(hires in 0u32..10_000) {
            let leads = team_leads_required(hires);
            prop_assert!(leads * 15 >= hires);
            prop_assert!(leads == 0 || (leads - 1) * 15 < hires);
        }

        #[test]
        fn savings_percent_stays_in_range(inputs in any_inputs()) {
            let costs = calculate_costs(&inputs).unwrap();
            prop_assert!(costs.savings_percent <= 100);
        }
    }

    #[test]
    fn team_lead_step_at_sixteen_hires() {
        for hires in 1..=15 {
            assert_eq!(team_leads_required(hires), 1, "hires = {hires}");
        }
        assert_eq!(team_leads_required(16), 2);
        assert_eq!(team_leads_required(30), 2);
        assert_eq!(team_leads_required(31), 3);
    }
}
