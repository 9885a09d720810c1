//! Flight record model
//!
//! One row of a flight history export. The derived fields (`distance_miles`,
//! `is_international`, `is_connecting`) are filled in by the analyzer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Accepted timestamp layouts, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// One historical flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Date text as it appeared in the export
    pub date: String,
    /// Parsed date, if the text was recognizable
    pub timestamp: Option<NaiveDateTime>,
    /// Carrier code
    pub airline: String,
    /// Flight number, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    /// Origin airport code
    pub from: String,
    /// Destination airport code
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_scheduled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_actual: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_scheduled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_actual: Option<String>,
    /// Aircraft type, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    /// Great-circle distance; 0 when either airport is unknown
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub is_international: bool,
    #[serde(default)]
    pub is_connecting: bool,
}

impl FlightRecord {
    /// Create a flight with only the required fields; derived fields start cleared
    pub fn new(
        date: impl Into<String>,
        airline: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let date = date.into();
        Self {
            timestamp: parse_flight_timestamp(&date),
            date,
            airline: airline.into(),
            flight_number: None,
            from: from.into(),
            to: to.into(),
            departure_scheduled: None,
            departure_actual: None,
            arrival_scheduled: None,
            arrival_actual: None,
            aircraft: None,
            distance_miles: 0.0,
            is_international: false,
            is_connecting: false,
        }
    }

    /// Route key, e.g. `ABQ-DEN`
    pub fn route(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }

    /// Whether this is a domestic (or unknown-country) flight
    pub fn is_domestic(&self) -> bool {
        !self.is_international
    }
}

/// Parse the date column of a flight export
///
/// Accepts RFC 3339, `YYYY-MM-DD` with an optional `T`/space separated time,
/// and `MM/DD/YYYY`. Date-only values are taken as midnight.
pub fn parse_flight_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
