//! Cost report
//!
//! Groups a cost record into the sections the calculator page shows:
//! direct employee costs, hidden overhead, totals and savings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::cost::{
    CostBreakdown, CostError, CostInputs, Currency, calculate_costs, role_name,
};

/// A line of a report table.
///
/// `outsourced` is `None` when the cost is bundled into the outsourced rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<f64>,
    pub in_house: f64,
    pub outsourced: Option<f64>,
}

impl ReportLine {
    fn new(label: &str, hourly: Option<f64>, in_house: f64, outsourced: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            hourly,
            in_house,
            outsourced,
        }
    }
}

/// A titled group of lines with its subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<ReportLine>,
    pub subtotal_in_house: f64,
    pub subtotal_outsourced: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub annual: f64,
    pub percent: i64,
    pub three_year: f64,
    pub five_year: f64,
}

/// Full calculator report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub business_name: String,
    pub currency: Currency,
    pub role_name: String,
    pub inputs: CostInputs,
    pub direct_costs: ReportSection,
    pub overhead: ReportSection,
    pub total_in_house: f64,
    pub total_outsourced: f64,
    pub savings: SavingsSummary,
    pub generated_at: DateTime<Utc>,
}

impl CostReport {
    /// Calculate and group the costs for `inputs`
    pub fn generate(inputs: &CostInputs) -> Result<Self, CostError> {
        let costs = calculate_costs(inputs)?;
        Ok(Self::from_breakdown(inputs, &costs))
    }

    /// Group an already calculated cost record
    pub fn from_breakdown(inputs: &CostInputs, costs: &CostBreakdown) -> Self {
        let role = role_name(inputs.sector);

        let direct_costs = ReportSection {
            title: "Direct Employee Costs".to_string(),
            lines: vec![
                ReportLine::new(
                    role,
                    Some(costs.agent_rate),
                    costs.agent_yearly_in_house,
                    Some(costs.agent_yearly_outsourced),
                ),
                ReportLine::new(
                    "Team Lead",
                    Some(costs.team_lead_rate),
                    costs.team_lead_yearly,
                    None,
                ),
                ReportLine::new(
                    "Account Manager",
                    Some(costs.account_manager_rate),
                    costs.account_manager_yearly,
                    None,
                ),
                ReportLine::new(
                    "Training",
                    None,
                    costs.training_in_house,
                    Some(costs.training_outsourced),
                ),
            ],
            subtotal_in_house: costs.direct_costs_in_house,
            subtotal_outsourced: costs.direct_costs_outsourced,
        };

        let overhead = ReportSection {
            title: "Hidden Overhead & Indirect Costs".to_string(),
            lines: vec![
                ReportLine::new("Office Space", None, costs.office_space, None),
                ReportLine::new("Hardware & IT", None, costs.hardware_software, None),
                ReportLine::new("Benefits & Insurance", None, costs.indirect_costs, None),
            ],
            subtotal_in_house: costs.overhead_in_house,
            subtotal_outsourced: costs.overhead_outsourced(),
        };

        Self {
            business_name: inputs.business_name.clone(),
            currency: inputs.currency,
            role_name: role.to_string(),
            inputs: inputs.clone(),
            direct_costs,
            overhead,
            total_in_house: costs.total_in_house,
            total_outsourced: costs.total_outsourced,
            savings: SavingsSummary {
                annual: costs.savings,
                percent: costs.savings_percent,
                three_year: costs.three_year_savings,
                five_year: costs.five_year_savings,
            },
            generated_at: Utc::now(),
        }
    }

    pub fn sections(&self) -> [&ReportSection; 2] {
        [&self.direct_costs, &self.overhead]
    }
}
