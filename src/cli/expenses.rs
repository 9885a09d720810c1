//! CLI commands for the expense ledger

use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::flights::create_file;
use crate::config::Settings;
use crate::display::format_trip_list;
use crate::error::TravelResult;
use crate::reports::{ExpenseOverviewReport, TripDetailReport};
use crate::services::ExpenseService;
use crate::storage::ExpenseSource;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Spending across every trip
    Summary {
        /// Export trip category totals to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Category breakdown of one trip
    Trip {
        /// Trip name as it appears in the ledger
        name: String,

        /// Export the breakdown to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Table of every trip
    Trips,
}

/// Handle expense commands
pub fn handle_expense_command(
    source: &ExpenseSource,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TravelResult<()> {
    let expenses = source.load()?;
    let service = ExpenseService::new(&expenses);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Summary { output } => {
            let report = ExpenseOverviewReport::generate(&service);

            if let Some(path) = output {
                report.export_csv(BufWriter::new(create_file(&path)?))?;
                println!(
                    "Exported {} trips to: {}",
                    report.trip_count,
                    path.display()
                );
            } else {
                print!("{}", report.format_terminal(symbol));
            }
        }
        ExpenseCommands::Trip { name, output } => {
            let report = TripDetailReport::generate(&service, &name)?;

            if let Some(path) = output {
                report.export_csv(BufWriter::new(create_file(&path)?))?;
                println!("Exported '{}' to: {}", report.trip_name, path.display());
            } else {
                print!("{}", report.format_terminal(symbol));
            }
        }
        ExpenseCommands::Trips => {
            println!("{}", format_trip_list(&service.trip_summaries(), symbol));
        }
    }

    Ok(())
}
