//! `compare` command: the same hiring inputs across every location or sector

use clap::{Args, ValueEnum};
use comfy_table::{Cell, CellAlignment, Color, Table, presets::UTF8_FULL};
use tracing::info;

use super::inputs::InputArgs;
use super::output::render;
use crate::config::{Config, OutputFormat};
use crate::core::cost::{
    Currency, ScenarioComparison, compare_locations, compare_sectors, format_money,
    format_percent,
};
use crate::utils::error::Result;

/// Dimension to vary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CompareBy {
    #[default]
    Location,
    Sector,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CompareArgs {
    /// Vary the UK location or the sector
    #[arg(long, value_enum, default_value_t = CompareBy::Location)]
    pub by: CompareBy,

    #[command(flatten)]
    pub inputs: InputArgs,
}

pub fn execute(args: &CompareArgs, config: &Config, format: OutputFormat) -> Result<String> {
    let inputs = args.inputs.resolve(&config.defaults);
    info!(by = ?args.by, hires = inputs.number_of_hires, "Comparing scenarios");

    let rows = match args.by {
        CompareBy::Location => compare_locations(&inputs)?,
        CompareBy::Sector => compare_sectors(&inputs)?,
    };

    let currency = inputs.currency;
    render(rows.as_slice(), format, |rows| {
        comparison_table(rows, args.by, currency)
    })
}

fn comparison_table(rows: &[ScenarioComparison], by: CompareBy, currency: Currency) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let first = match by {
        CompareBy::Location => "Location",
        CompareBy::Sector => "Sector",
    };
    table.set_header(vec![first, "In-House", "Outsourced", "Savings", "Saving %"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(format_money(row.total_in_house, currency))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_money(row.total_outsourced, currency))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_money(row.savings, currency))
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
            Cell::new(format_percent(row.savings_percent)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n", table)
}
