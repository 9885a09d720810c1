//! Export module for Wayfarer
//!
//! Provides data export in multiple formats:
//! - CSV: classified flights and trip category totals (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{write_flights_csv, write_trips_csv};
pub use json::{
    export_json, import_from_json, ExpenseSection, FlightSection, TravelExport,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_yaml, import_from_yaml};
