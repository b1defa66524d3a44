//! Cost Calculator
//!
//! Pure calculation of the in-house vs outsourced cost record. Every call
//! starts from scratch; nothing is cached between evaluations.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::cost::rates::{
    AGENTS_PER_ALLOCATION_UNIT, AGENTS_PER_TEAM_LEAD, HARDWARE_SOFTWARE_PER_UNIT,
    IN_HOUSE_LOADING_FACTOR, INDIRECT_COSTS_PER_UNIT, OFFICE_SPACE_PER_UNIT,
    OUTSOURCED_MARKUP_FACTOR, TRAINING_IN_HOUSE_PER_UNIT, TRAINING_OUTSOURCED_PER_UNIT,
    WORKING_HOURS_PER_YEAR, account_manager_rate, location_multiplier, sector_multiplier,
    team_lead_rate,
};
use crate::core::cost::types::{CostBreakdown, CostError, CostInputs, Country, Location, Sector};
use crate::core::cost::utils::round_half_up;

/// Calculate the full cost record for a set of inputs
pub fn calculate_costs(inputs: &CostInputs) -> Result<CostBreakdown, CostError> {
    inputs.validate()?;

    let location = inputs.effective_location();
    if location != inputs.location {
        warn!(
            country = %inputs.country,
            requested = %inputs.location,
            "Location ignored outside the United Kingdom, using fallback rates"
        );
    }

    let hires = f64::from(inputs.number_of_hires);
    let allocation_units = hires / AGENTS_PER_ALLOCATION_UNIT;

    let adjusted_salary =
        inputs.annual_salary * location_multiplier(location) * sector_multiplier(inputs.sector);
    let agent_rate = adjusted_salary / WORKING_HOURS_PER_YEAR;
    let team_lead_rate = team_lead_rate(location);
    let account_manager_rate = account_manager_rate(location);

    let agent_yearly_in_house = hires * agent_rate * WORKING_HOURS_PER_YEAR * IN_HOUSE_LOADING_FACTOR;
    let agent_yearly_outsourced =
        hires * agent_rate * WORKING_HOURS_PER_YEAR * OUTSOURCED_MARKUP_FACTOR;
    let team_lead_yearly =
        f64::from(team_leads_required(inputs.number_of_hires)) * team_lead_rate * WORKING_HOURS_PER_YEAR;
    let account_manager_yearly = account_manager_rate * WORKING_HOURS_PER_YEAR;
    let training_in_house = allocation_units * TRAINING_IN_HOUSE_PER_UNIT;
    let training_outsourced = allocation_units * TRAINING_OUTSOURCED_PER_UNIT;

    let direct_costs_in_house =
        agent_yearly_in_house + team_lead_yearly + account_manager_yearly + training_in_house;
    let direct_costs_outsourced = agent_yearly_outsourced + training_outsourced;

    let office_space = allocation_units * OFFICE_SPACE_PER_UNIT;
    let hardware_software = allocation_units * HARDWARE_SOFTWARE_PER_UNIT;
    let indirect_costs = allocation_units * INDIRECT_COSTS_PER_UNIT;
    let overhead_in_house = office_space + hardware_software + indirect_costs;

    let total_in_house = direct_costs_in_house + overhead_in_house;
    let total_outsourced = direct_costs_outsourced;
    let savings = total_in_house - total_outsourced;

    if !(total_in_house.is_finite() && total_outsourced.is_finite() && savings.is_finite()) {
        return Err(CostError::InvalidInput {
            field: "number_of_hires",
            message: format!(
                "salary {} for {} hires is too large to cost",
                inputs.annual_salary, inputs.number_of_hires
            ),
        });
    }

    let breakdown = CostBreakdown {
        agent_rate,
        team_lead_rate,
        account_manager_rate,
        agent_yearly_in_house,
        agent_yearly_outsourced,
        team_lead_yearly,
        account_manager_yearly,
        training_in_house,
        training_outsourced,
        direct_costs_in_house,
        direct_costs_outsourced,
        office_space,
        hardware_software,
        indirect_costs,
        overhead_in_house,
        total_in_house,
        total_outsourced,
        savings,
        savings_percent: savings_percent(savings, total_in_house),
        three_year_savings: savings * 3.0,
        five_year_savings: savings * 5.0,
    };

    debug!(
        hires = inputs.number_of_hires,
        sector = %inputs.sector,
        location = %location,
        total_in_house = breakdown.total_in_house,
        total_outsourced = breakdown.total_outsourced,
        savings_percent = breakdown.savings_percent,
        "Calculated costs"
    );

    Ok(breakdown)
}

/// Team leads needed: one per 15 agents or part thereof
pub fn team_leads_required(number_of_hires: u32) -> u32 {
    number_of_hires.div_ceil(AGENTS_PER_TEAM_LEAD)
}

/// Savings as a whole percentage of the in-house total.
///
/// Zero when the in-house total is zero.
pub fn savings_percent(savings: f64, total_in_house: f64) -> i64 {
    if total_in_house == 0.0 {
        return 0;
    }
    round_half_up(savings / total_in_house * 100.0)
}

/// One scenario of a comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// Table key that varied, e.g. `london` or `finance`
    pub key: String,
    /// Display label of that key
    pub label: String,
    pub total_in_house: f64,
    pub total_outsourced: f64,
    pub savings: f64,
    pub savings_percent: i64,
}

impl ScenarioComparison {
    fn from_breakdown(key: &str, label: &str, breakdown: &CostBreakdown) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            total_in_house: breakdown.total_in_house,
            total_outsourced: breakdown.total_outsourced,
            savings: breakdown.savings,
            savings_percent: breakdown.savings_percent,
        }
    }
}

/// Run the scenario once per UK location, highest savings first.
///
/// The country is pinned to the United Kingdom so every row uses its own rates.
pub fn compare_locations(inputs: &CostInputs) -> Result<Vec<ScenarioComparison>, CostError> {
    let mut comparisons = Location::ALL
        .into_iter()
        .map(|location| {
            let scenario = CostInputs {
                country: Country::UnitedKingdom,
                location,
                ..inputs.clone()
            };
            calculate_costs(&scenario).map(|breakdown| {
                ScenarioComparison::from_breakdown(location.key(), location.label(), &breakdown)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    sort_by_savings(&mut comparisons);
    Ok(comparisons)
}

/// Run the scenario once per sector, highest savings first
pub fn compare_sectors(inputs: &CostInputs) -> Result<Vec<ScenarioComparison>, CostError> {
    let mut comparisons = Sector::ALL
        .into_iter()
        .map(|sector| {
            let scenario = CostInputs {
                sector,
                ..inputs.clone()
            };
            calculate_costs(&scenario).map(|breakdown| {
                ScenarioComparison::from_breakdown(sector.key(), sector.label(), &breakdown)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    sort_by_savings(&mut comparisons);
    Ok(comparisons)
}

fn sort_by_savings(comparisons: &mut [ScenarioComparison]) {
    comparisons.sort_by(|a, b| {
        b.savings
            .partial_cmp(&a.savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
