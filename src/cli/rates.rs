//! `rates` command: dump the compiled-in rate tables

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use serde::Serialize;

use super::output::render;
use crate::config::OutputFormat;
use crate::core::cost::{
    Currency, LocationRates, SectorRates, format_hourly, rate_table, sector_table,
};
use crate::utils::error::Result;

#[derive(Debug, Serialize)]
pub struct RateTables {
    pub locations: Vec<LocationRates>,
    pub sectors: Vec<SectorRates>,
}

impl RateTables {
    pub fn load() -> Self {
        Self {
            locations: rate_table(),
            sectors: sector_table(),
        }
    }
}

pub fn execute(currency: Currency, format: OutputFormat) -> Result<String> {
    let tables = RateTables::load();
    render(&tables, format, |tables| print_rates(tables, currency))
}

fn print_rates(tables: &RateTables, currency: Currency) -> String {
    let mut locations = Table::new();
    locations.load_preset(UTF8_FULL);
    locations.set_header(vec![
        "Location",
        "Key",
        "Salary Multiplier",
        "Team Lead",
        "Account Manager",
    ]);
    for row in &tables.locations {
        locations.add_row(vec![
            Cell::new(row.label),
            Cell::new(row.location.key()),
            Cell::new(format!("{:.2}", row.multiplier)).set_alignment(CellAlignment::Right),
            Cell::new(format_hourly(row.team_lead_rate, currency))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_hourly(row.account_manager_rate, currency))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    let mut sectors = Table::new();
    sectors.load_preset(UTF8_FULL);
    sectors.set_header(vec!["Sector", "Key", "Role", "Salary Multiplier"]);
    for row in &tables.sectors {
        sectors.add_row(vec![
            Cell::new(row.label),
            Cell::new(row.sector.key()),
            Cell::new(row.role_name),
            Cell::new(format!("{:.2}", row.multiplier)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n\n{}\n", locations, sectors)
}
