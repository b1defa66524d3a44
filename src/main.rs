//! True Cost - in-house vs outsourced hiring cost calculator
//!
//! Prints a cost report, a scenario comparison or the rate tables

use clap::Parser;
use std::process::ExitCode;
use true_cost::cli::{self, Cli};

fn main() -> ExitCode {
    // Optional .env with TRUE_COST_* overrides
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli::run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
