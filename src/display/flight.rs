//! Flight display formatting
//!
//! Table views for flight lists and the airport directory.

use std::fmt::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::format_miles;
use crate::models::{airline_display_name, Airport, FlightRecord};

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Airline")]
    airline: String,
    #[tabled(rename = "Flight")]
    flight: String,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Miles")]
    miles: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
}

impl FlightRow {
    fn new(flight: &FlightRecord, date_format: &str) -> Self {
        let kind = if flight.is_international {
            "International"
        } else if flight.is_connecting {
            "Connecting"
        } else {
            "Domestic"
        };

        Self {
            date: format_date(flight, date_format),
            airline: airline_display_name(&flight.airline),
            flight: flight.flight_number.clone().unwrap_or_default(),
            route: format!("{} → {}", flight.from, flight.to),
            miles: format_miles(flight.distance_miles.round() as u64),
            kind,
        }
    }
}

/// Render the flight date with `date_format`
///
/// Falls back to the raw export text when the date was not parsed or the
/// format string is not a valid strftime pattern.
fn format_date(flight: &FlightRecord, date_format: &str) -> String {
    let Some(ts) = flight.timestamp else {
        return flight.date.clone();
    };

    let mut out = String::new();
    match write!(out, "{}", ts.format(date_format)) {
        Ok(()) => out,
        Err(_) => flight.date.clone(),
    }
}

/// Format a list of flights as a table
///
/// Dates are shown with `date_format` when they could be parsed, and as the
/// raw export text otherwise.
pub fn format_flight_list(flights: &[FlightRecord], date_format: &str) -> String {
    if flights.is_empty() {
        return "No flights found.".to_string();
    }

    let rows: Vec<FlightRow> = flights
        .iter()
        .map(|f| FlightRow::new(f, date_format))
        .collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n{} flight(s)\n", flights.len()));
    output
}

#[derive(Tabled)]
struct AirportRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Country")]
    country: &'static str,
    #[tabled(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    longitude: String,
}

/// Format the airport directory as a table
pub fn format_airport_list(airports: &[&Airport]) -> String {
    if airports.is_empty() {
        return "No airports known.".to_string();
    }

    let rows: Vec<AirportRow> = airports
        .iter()
        .map(|a| AirportRow {
            code: a.code,
            country: a.country,
            latitude: format!("{:.4}", a.latitude),
            longitude: format!("{:.4}", a.longitude),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}
