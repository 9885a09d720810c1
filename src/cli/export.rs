//! CLI command for data export
//!
//! Exports whatever sources are available in one of three formats.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::warn;

use super::flights::create_file;
use crate::error::{TravelError, TravelResult};
use crate::export::{csv, json, yaml, ExpenseSection, FlightSection, TravelExport};
use crate::services::FlightAnalyzer;
use crate::storage::Sources;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (classified flights only)
    Csv,
    /// JSON format (full export)
    Json,
    /// YAML format (full export, human-readable)
    Yaml,
}

/// Arguments for `wayfarer export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    sources: &Sources,
    analyzer: &FlightAnalyzer<'_>,
    args: ExportArgs,
) -> TravelResult<()> {
    match args.format {
        ExportFormat::Csv => export_flights_csv(sources, analyzer, &args.output),
        ExportFormat::Json | ExportFormat::Yaml => export_full(sources, analyzer, &args),
    }
}

fn export_flights_csv(
    sources: &Sources,
    analyzer: &FlightAnalyzer<'_>,
    output: &Path,
) -> TravelResult<()> {
    let mut flights = sources.flights.load(analyzer)?;
    analyzer.find_connecting_flights(&mut flights);

    let mut writer = BufWriter::new(create_file(output)?);
    csv::write_flights_csv(&flights, &mut writer)?;
    writer.flush()?;

    println!("Exported {} flights to: {}", flights.len(), output.display());
    println!("Note: CSV format exports flights only. Use JSON or YAML for a full export.");
    Ok(())
}

fn export_full(
    sources: &Sources,
    analyzer: &FlightAnalyzer<'_>,
    args: &ExportArgs,
) -> TravelResult<()> {
    let flights = match sources.flights.load(analyzer) {
        Ok(flights) => Some(flights),
        Err(e) if e.is_source_unavailable() => {
            warn!(error = %e, "exporting without flight history");
            None
        }
        Err(e) => return Err(e),
    };
    let expenses = match sources.expenses.load() {
        Ok(expenses) => Some(expenses),
        Err(e) if e.is_source_unavailable() => {
            warn!(error = %e, "exporting without expense ledger");
            None
        }
        Err(e) => return Err(e),
    };

    if flights.is_none() && expenses.is_none() {
        return Err(TravelError::Export(
            "Neither a flight history nor an expense ledger is available".to_string(),
        ));
    }

    let export = TravelExport::new(
        flights.map(|f| FlightSection::build(analyzer, f)),
        expenses.as_deref().map(ExpenseSection::build),
    );

    let mut writer = BufWriter::new(create_file(&args.output)?);
    if args.format == ExportFormat::Yaml {
        yaml::export_yaml(&export, &mut writer)?;
    } else {
        json::export_json(&export, &mut writer, args.pretty)?;
    }
    writer.flush()?;

    println!("Travel data exported to: {}", args.output.display());
    Ok(())
}
