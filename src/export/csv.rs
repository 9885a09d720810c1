//! CSV Export functionality
//!
//! Exports classified flights and per-trip category totals to CSV.

use std::io::Write;

use crate::error::{TravelError, TravelResult};
use crate::models::{FlightRecord, Money};
use crate::services::TripSummary;

const FLIGHT_HEADER: [&str; 8] = [
    "Date",
    "Airline",
    "Flight",
    "From",
    "To",
    "Distance (mi)",
    "International",
    "Connecting",
];

const TRIP_HEADER: [&str; 4] = ["Trip", "Category", "Total", "Count"];

/// Export flights with their derived fields
pub fn write_flights_csv<W: Write>(flights: &[FlightRecord], writer: W) -> TravelResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(FLIGHT_HEADER)?;

    for flight in flights {
        writer.write_record([
            flight.date.as_str(),
            flight.airline.as_str(),
            flight.flight_number.as_deref().unwrap_or(""),
            flight.from.as_str(),
            flight.to.as_str(),
            &format!("{:.0}", flight.distance_miles),
            yes_no(flight.is_international),
            yes_no(flight.is_connecting),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| TravelError::Export(e.to_string()))?;
    Ok(())
}

/// Export one row per trip and category
pub fn write_trips_csv<W: Write>(trips: &[TripSummary], writer: W) -> TravelResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(TRIP_HEADER)?;

    for trip in trips {
        for category in &trip.categories {
            writer.write_record([
                trip.trip_name.as_str(),
                category.category.as_str(),
                &decimal(category.total),
                &category.count.to_string(),
            ])?;
        }
    }

    writer
        .flush()
        .map_err(|e| TravelError::Export(e.to_string()))?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.cents() as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CategoryBreakdown;

    #[test]
    fn test_flights_csv() {
        let mut flight = FlightRecord::new("2024-01-01", "UAL", "ABQ", "DEN");
        flight.flight_number = Some("UA 12".into());
        flight.distance_miles = 349.4;
        flight.is_connecting = true;

        let mut buffer = Vec::new();
        write_flights_csv(&[flight], &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Airline,Flight,From,To,Distance (mi),International,Connecting")
        );
        assert_eq!(lines.next(), Some("2024-01-01,UAL,UA 12,ABQ,DEN,349,No,Yes"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_trips_csv_quotes_names() {
        let trip = TripSummary {
            trip_name: "Rome, Florence".into(),
            total_cost: Money::from_cents(12_345),
            expense_count: 1,
            categories: vec![CategoryBreakdown {
                category: "Food".into(),
                total: Money::from_cents(12_345),
                count: 1,
            }],
        };

        let mut buffer = Vec::new();
        write_trips_csv(&[trip], &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "Trip,Category,Total,Count\n\"Rome, Florence\",Food,123.45,1\n"
        );
    }
}
