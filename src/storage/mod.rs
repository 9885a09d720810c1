//! Source layer for Wayfarer
//!
//! Locates and reads the two inputs: the flight history export and the
//! expense ledger. This is the only place Wayfarer touches the filesystem for
//! input; everything downstream works on in-memory records.

pub mod expenses;
pub mod flights;

pub use expenses::{parse_expenses_csv, parse_expenses_json, ExpenseSource, LedgerFormat};
pub use flights::FlightSource;

use std::path::PathBuf;

use crate::config::{Settings, WayfarerPaths};

/// Both input sources, resolved from CLI overrides, settings and defaults
#[derive(Debug, Clone)]
pub struct Sources {
    pub flights: FlightSource,
    pub expenses: ExpenseSource,
}

impl Sources {
    /// Resolve source paths
    pub fn resolve(
        paths: &WayfarerPaths,
        settings: &Settings,
        flights_override: Option<PathBuf>,
        expenses_override: Option<PathBuf>,
    ) -> Self {
        Self {
            flights: FlightSource::new(settings.resolve_flights_file(paths, flights_override)),
            expenses: ExpenseSource::new(settings.resolve_expenses_file(paths, expenses_override)),
        }
    }
}
