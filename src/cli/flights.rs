//! CLI commands for the flight history
//!
//! Statistics, the international overview, listings and map data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_airport_list, format_flight_list};
use crate::error::{TravelError, TravelResult};
use crate::reports::{FlightOverviewReport, FlightStatsReport, RouteMap};
use crate::services::FlightAnalyzer;
use crate::storage::FlightSource;

/// Flight subcommands
#[derive(Subcommand, Debug)]
pub enum FlightCommands {
    /// Statistics over every flight
    Stats,

    /// List flights with their classification
    List {
        /// Show international flights only
        #[arg(short, long)]
        international: bool,

        /// Show at most this many flights
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// International flights and their connecting legs
    #[command(alias = "international")]
    Overview {
        /// Export the overview flights to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Route map data as JSON
    Map {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Great-circle distance between two airports
    Distance {
        /// Origin airport code
        from: String,
        /// Destination airport code
        to: String,
    },

    /// List the airports Wayfarer knows
    Airports,
}

/// Handle flight commands
pub fn handle_flight_command(
    source: &FlightSource,
    analyzer: &FlightAnalyzer<'_>,
    settings: &Settings,
    cmd: FlightCommands,
) -> TravelResult<()> {
    match cmd {
        FlightCommands::Stats => {
            let flights = source.load(analyzer)?;
            let report = FlightStatsReport::generate(analyzer, &flights);
            print!("{}", report.format_terminal());
        }
        FlightCommands::List {
            international,
            limit,
        } => {
            let mut flights = source.load(analyzer)?;
            // Sets the connecting flags shown in the Type column
            analyzer.find_connecting_flights(&mut flights);

            if international {
                flights.retain(|f| f.is_international);
            }
            if let Some(limit) = limit {
                flights.truncate(limit);
            }

            println!("{}", format_flight_list(&flights, &settings.date_format));
        }
        FlightCommands::Overview { output } => {
            let mut flights = source.load(analyzer)?;
            let report = FlightOverviewReport::generate(analyzer, &mut flights);

            if let Some(path) = output {
                let file = create_file(&path)?;
                report.export_csv(BufWriter::new(file))?;
                println!(
                    "Exported {} flights to: {}",
                    report.flights.len(),
                    path.display()
                );
            } else {
                print!("{}", report.format_terminal());
            }
        }
        FlightCommands::Map { output, pretty } => {
            let mut flights = source.load(analyzer)?;
            let relevant = analyzer.find_connecting_flights(&mut flights);
            let json = RouteMap::generate(analyzer, &relevant).to_json(pretty)?;

            if let Some(path) = output {
                let mut writer = BufWriter::new(create_file(&path)?);
                writeln!(writer, "{}", json)?;
                writer.flush()?;
                println!("Route map written to: {}", path.display());
            } else {
                println!("{}", json);
            }
        }
        FlightCommands::Distance { from, to } => {
            let directory = analyzer.directory();
            for code in [&from, &to] {
                if directory.get(code).is_none() {
                    println!("Note: {} is not in the airport directory", code);
                }
            }

            let miles = analyzer.distance(&from, &to);
            println!(
                "{} → {}: {:.0} miles",
                from.to_uppercase(),
                to.to_uppercase(),
                miles
            );
        }
        FlightCommands::Airports => {
            let airports = analyzer.directory().sorted();
            println!("{}", format_airport_list(&airports));
            println!("{} airports", airports.len());
        }
    }

    Ok(())
}

pub(crate) fn create_file(path: &Path) -> TravelResult<File> {
    File::create(path).map_err(|e| {
        TravelError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}
