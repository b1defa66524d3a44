//! `calculate` command: full cost report for one scenario

use clap::Args;
use comfy_table::{Cell, CellAlignment, Color, Table, presets::UTF8_FULL};
use tracing::info;

use super::inputs::InputArgs;
use super::output::render;
use crate::config::{Config, OutputFormat};
use crate::core::cost::utils::INCLUDED;
use crate::core::cost::{Currency, format_hourly, format_money, format_percent};
use crate::core::{CostReport, ReportSection};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

pub fn execute(args: &CalculateArgs, config: &Config, format: OutputFormat) -> Result<String> {
    let inputs = args.inputs.resolve(&config.defaults);
    info!(
        hires = inputs.number_of_hires,
        sector = %inputs.sector,
        location = %inputs.location,
        "Calculating true cost"
    );

    let report = CostReport::generate(&inputs)?;
    render(&report, format, print_report)
}

fn amount_cell(amount: f64, currency: Currency) -> Cell {
    Cell::new(format_money(amount, currency)).set_alignment(CellAlignment::Right)
}

fn outsourced_cell(amount: Option<f64>, currency: Currency) -> Cell {
    match amount {
        Some(amount) => amount_cell(amount, currency),
        None => Cell::new(INCLUDED)
            .fg(Color::Blue)
            .set_alignment(CellAlignment::Right),
    }
}

fn section_table(section: &ReportSection, currency: Currency, with_hourly: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    if with_hourly {
        table.set_header(vec!["Role", "Hourly", "In-House", "Outsourced"]);
    } else {
        table.set_header(vec!["Cost Category", "In-House", "Outsourced"]);
    }

    for line in &section.lines {
        let mut row = vec![Cell::new(&line.label)];
        if with_hourly {
            let hourly = line
                .hourly
                .map(|rate| format_hourly(rate, currency))
                .unwrap_or_default();
            row.push(Cell::new(hourly).set_alignment(CellAlignment::Right));
        }
        row.push(amount_cell(line.in_house, currency));
        row.push(outsourced_cell(line.outsourced, currency));
        table.add_row(row);
    }

    let mut subtotal = vec![Cell::new("Subtotal").fg(Color::Cyan)];
    if with_hourly {
        subtotal.push(Cell::new(""));
    }
    subtotal.push(amount_cell(section.subtotal_in_house, currency).fg(Color::Cyan));
    subtotal.push(amount_cell(section.subtotal_outsourced, currency).fg(Color::Cyan));
    table.add_row(subtotal);

    table
}

/// Render a report as text tables
pub fn print_report(report: &CostReport) -> String {
    let currency = report.currency;
    let mut out = String::new();

    if !report.business_name.is_empty() {
        out.push_str(&format!("True Cost Calculator: {}\n\n", report.business_name));
    } else {
        out.push_str("True Cost Calculator\n\n");
    }
    out.push_str(&format!(
        "{} × {} ({}, {}), salary {}\n\n",
        report.inputs.number_of_hires,
        report.role_name,
        report.inputs.effective_location().label(),
        report.inputs.country,
        format_money(report.inputs.annual_salary, currency),
    ));

    out.push_str(&format!("{}\n", report.direct_costs.title));
    out.push_str(&format!(
        "{}\n\n",
        section_table(&report.direct_costs, currency, true)
    ));

    out.push_str(&format!("{}\n", report.overhead.title));
    out.push_str(&format!(
        "{}\n\n",
        section_table(&report.overhead, currency, false)
    ));

    let mut totals = Table::new();
    totals.load_preset(UTF8_FULL);
    totals.set_header(vec!["", "In-House", "Outsourced"]);
    totals.add_row(vec![
        Cell::new("Total Costs"),
        amount_cell(report.total_in_house, currency),
        amount_cell(report.total_outsourced, currency),
    ]);
    out.push_str(&format!("{}\n\n", totals));

    let mut savings = Table::new();
    savings.load_preset(UTF8_FULL);
    savings.set_header(vec!["Savings", ""]);
    savings.add_row(vec![
        Cell::new("Your Annual Savings"),
        amount_cell(report.savings.annual, currency).fg(Color::Green),
    ]);
    savings.add_row(vec![
        Cell::new("Reduced Hiring Costs"),
        Cell::new(format_percent(report.savings.percent))
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);
    savings.add_row(vec![
        Cell::new("3-Year Savings"),
        amount_cell(report.savings.three_year, currency),
    ]);
    savings.add_row(vec![
        Cell::new("5-Year Savings"),
        amount_cell(report.savings.five_year, currency),
    ]);
    out.push_str(&format!("{}\n", savings));

    out
}
