//! JSON Export functionality
//!
//! Exports everything Wayfarer derives from its sources to JSON with schema
//! versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TravelError, TravelResult};
use crate::models::{ExpenseRecord, FlightRecord, Money};
use crate::reports::FlightOverviewReport;
use crate::services::{ExpenseService, FlightAnalyzer, FlightStats, TripSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Flight analysis; absent when no flight history was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights: Option<FlightSection>,

    /// Expense rollup; absent when no ledger was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<ExpenseSection>,
}

/// Flight part of an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSection {
    pub stats: FlightStats,
    pub overview: FlightOverviewReport,
    /// Every flight, classified and with connecting flags set
    pub flights: Vec<FlightRecord>,
}

/// Expense part of an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSection {
    pub total_spent: Money,
    pub average_trip_cost: f64,
    pub trips: Vec<TripSummary>,
}

impl FlightSection {
    /// Analyze a flight history
    pub fn build(analyzer: &FlightAnalyzer<'_>, mut flights: Vec<FlightRecord>) -> Self {
        let stats = analyzer.aggregate(&flights);
        let overview = FlightOverviewReport::generate(analyzer, &mut flights);
        Self {
            stats,
            overview,
            flights,
        }
    }
}

impl ExpenseSection {
    /// Roll up an expense ledger
    pub fn build(expenses: &[ExpenseRecord]) -> Self {
        let service = ExpenseService::new(expenses);
        Self {
            total_spent: service.total_spent(),
            average_trip_cost: service.average_trip_cost(),
            trips: service.trip_summaries(),
        }
    }
}

impl TravelExport {
    /// Create an export from whichever sections are available
    pub fn new(flights: Option<FlightSection>, expenses: Option<ExpenseSection>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            flights,
            expenses,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if let Some(section) = &self.flights {
            if section.stats.total_flights != section.flights.len() {
                return Err(format!(
                    "Flight count mismatch: stats report {}, export holds {}",
                    section.stats.total_flights,
                    section.flights.len()
                ));
            }
        }

        if let Some(section) = &self.expenses {
            if section.trips.is_empty() && section.average_trip_cost != 0.0 {
                return Err("Average trip cost without any trips".to_string());
            }
        }

        Ok(())
    }
}

/// Write an export as JSON
pub fn export_json<W: Write>(export: &TravelExport, writer: W, pretty: bool) -> TravelResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| TravelError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> TravelResult<TravelExport> {
    let export: TravelExport = serde_json::from_str(json_str)?;
    export.validate().map_err(TravelError::Validation)?;
    Ok(export)
}
