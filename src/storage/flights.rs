//! Flight history source
//!
//! Reads the flight export from disk and hands the text to the analyzer.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{TravelError, TravelResult};
use crate::models::FlightRecord;
use crate::services::FlightAnalyzer;

/// Reads a flight history export
#[derive(Debug, Clone)]
pub struct FlightSource {
    path: PathBuf,
}

impl FlightSource {
    /// Create a source for the given export path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the export
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw export text
    ///
    /// Fails only when the file is missing or unreadable; the content itself
    /// is never validated here.
    pub fn read_raw(&self) -> TravelResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| TravelError::SourceUnavailable {
            source_kind: "Flight history",
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse the export into classified flights
    pub fn load(&self, analyzer: &FlightAnalyzer<'_>) -> TravelResult<Vec<FlightRecord>> {
        let raw = self.read_raw()?;
        let flights = analyzer.parse(&raw);
        info!(
            path = %self.path.display(),
            flights = flights.len(),
            "loaded flight history"
        );
        Ok(flights)
    }
}
