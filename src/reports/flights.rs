//! Flight reports
//!
//! Two views over a flight history: plain statistics over every flight, and
//! the overview of international travel with its connecting domestic legs.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::display::report::{format_miles, separator};
use crate::error::TravelResult;
use crate::models::{airline_display_name, FlightRecord};
use crate::services::{FlightAnalyzer, FlightStats};

const WIDTH: usize = 60;

/// Statistics over every flight in the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightStatsReport {
    pub stats: FlightStats,
}

impl FlightStatsReport {
    /// Generate statistics for a set of flights
    pub fn generate(analyzer: &FlightAnalyzer<'_>, flights: &[FlightRecord]) -> Self {
        Self {
            stats: analyzer.aggregate(flights),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let stats = &self.stats;
        let mut output = String::new();

        output.push_str("Flight Statistics\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>10}\n", "Total flights:", stats.total_flights));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "International:", stats.international_flights
        ));
        output.push_str(&format!("{:<24} {:>10}\n", "Domestic:", stats.domestic_flights));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "Miles flown:",
            format_miles(stats.total_distance_miles)
        ));
        output.push_str(&format!("{:<24} {:>10}\n", "Countries:", stats.countries.len()));
        output.push_str(&format!("{:<24} {:>10}\n", "Airlines:", stats.airlines.len()));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "Aircraft types:",
            stats.aircraft_types.len()
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        if let Some(route) = &stats.most_frequent_route {
            output.push_str(&format!(
                "Most frequent route: {} ({} flights)\n",
                route.route, route.count
            ));
        }
        if let Some(airline) = &stats.most_used_airline {
            output.push_str(&format!(
                "Most used airline:   {} ({} flights)\n",
                airline_display_name(&airline.airline),
                airline.count
            ));
        }
        if let Some(longest) = &stats.longest_flight {
            output.push_str(&format!(
                "Longest flight:      {} on {} ({} mi)\n",
                longest.route(),
                longest.date,
                format_miles(longest.distance_miles.round() as u64)
            ));
        }

        if !stats.countries.is_empty() {
            output.push_str(&format!("\nCountries: {}\n", stats.countries.join(", ")));
        }

        output
    }
}

/// How often one airline appears in the overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineUsage {
    pub code: String,
    pub name: String,
    pub count: usize,
}

/// International flights and the domestic legs connecting to them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOverviewReport {
    /// International plus connecting flights, by date
    pub flights: Vec<FlightRecord>,
    pub international_count: usize,
    pub connecting_count: usize,
    /// Countries touched by international flights, sorted
    pub countries: Vec<String>,
    /// Per-airline counts over `flights`, sorted by code
    pub airlines: Vec<AirlineUsage>,
    /// Miles over `flights`, rounded
    pub total_distance_miles: u64,
}

impl FlightOverviewReport {
    /// Generate the overview; flags connecting flights in `flights` as a side effect
    pub fn generate(analyzer: &FlightAnalyzer<'_>, flights: &mut [FlightRecord]) -> Self {
        let relevant = analyzer.find_connecting_flights(flights);

        let countries: BTreeSet<String> = relevant
            .iter()
            .filter(|f| f.is_international)
            .flat_map(|f| [f.from.as_str(), f.to.as_str()])
            .filter_map(|code| analyzer.directory().country(code))
            .map(str::to_string)
            .collect();

        let mut airline_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for flight in &relevant {
            *airline_counts.entry(flight.airline.as_str()).or_insert(0) += 1;
        }
        let airlines = airline_counts
            .into_iter()
            .map(|(code, count)| AirlineUsage {
                code: code.to_string(),
                name: airline_display_name(code),
                count,
            })
            .collect();

        let total_distance: f64 = relevant.iter().map(|f| f.distance_miles).sum();

        Self {
            international_count: relevant.iter().filter(|f| f.is_international).count(),
            connecting_count: relevant.iter().filter(|f| f.is_connecting).count(),
            countries: countries.into_iter().collect(),
            airlines,
            total_distance_miles: total_distance.round() as u64,
            flights: relevant,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("International Travel Overview\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>10}\n", "Total flights:", self.flights.len()));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "International:", self.international_count
        ));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "Connecting flights:", self.connecting_count
        ));
        output.push_str(&format!("{:<24} {:>10}\n", "Countries:", self.countries.len()));
        output.push_str(&format!("{:<24} {:>10}\n", "Airlines:", self.airlines.len()));
        output.push_str(&format!(
            "{:<24} {:>10}\n",
            "Miles flown:",
            format_miles(self.total_distance_miles)
        ));

        if !self.countries.is_empty() {
            output.push_str("\nCountries flown to\n");
            output.push_str(&separator(WIDTH));
            output.push('\n');
            output.push_str(&format!("{}\n", self.countries.join(", ")));
        }

        if !self.airlines.is_empty() {
            output.push_str("\nAirlines flown\n");
            output.push_str(&separator(WIDTH));
            output.push('\n');
            for airline in &self.airlines {
                output.push_str(&format!(
                    "  {:<6} {:<28} {:>4} flights\n",
                    airline.code, airline.name, airline.count
                ));
            }
        }

        output
    }

    /// Export the overview flights to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TravelResult<()> {
        crate::export::csv::write_flights_csv(&self.flights, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(
        analyzer: &FlightAnalyzer<'_>,
        rows: &[(&str, &str, &str, &str)],
    ) -> Vec<FlightRecord> {
        rows.iter()
            .map(|(date, airline, from, to)| {
                let mut f = FlightRecord::new(*date, *airline, *from, *to);
                f.is_international = analyzer.classify(&f);
                f.distance_miles = analyzer.distance(from, to);
                f
            })
            .collect()
    }

    #[test]
    fn test_stats_report_terminal() {
        let analyzer = FlightAnalyzer::default();
        let flights = classified(
            &analyzer,
            &[
                ("2024-01-01", "UAL", "ABQ", "DEN"),
                ("2024-01-09", "UAL", "DEN", "ABQ"),
            ],
        );
        let report = FlightStatsReport::generate(&analyzer, &flights);
        let text = report.format_terminal();

        assert_eq!(report.stats.total_flights, 2);
        assert!(text.contains("Flight Statistics"));
        assert!(text.contains("United Airlines (2 flights)"));
        assert!(text.contains("Countries: United States"));
    }

    #[test]
    fn test_overview() {
        let analyzer = FlightAnalyzer::default();
        let mut flights = classified(
            &analyzer,
            &[
                ("2024-01-01", "UAL", "ABQ", "LAX"),
                ("2024-01-01", "TZP", "LAX", "NRT"),
                ("2024-01-10", "TZP", "NRT", "LAX"),
                ("2024-03-01", "SWA", "ABQ", "PHX"),
            ],
        );

        let report = FlightOverviewReport::generate(&analyzer, &mut flights);

        assert_eq!(report.flights.len(), 3);
        assert_eq!(report.international_count, 2);
        assert_eq!(report.connecting_count, 1);
        assert_eq!(report.countries, vec!["Japan", "United States"]);
        assert_eq!(
            report.airlines,
            vec![
                AirlineUsage {
                    code: "TZP".into(),
                    name: "ZIPAIR".into(),
                    count: 2
                },
                AirlineUsage {
                    code: "UAL".into(),
                    name: "United Airlines".into(),
                    count: 1
                },
            ]
        );
        assert!(flights[0].is_connecting);
        assert!(!flights[3].is_connecting);

        let expected: f64 = report.flights.iter().map(|f| f.distance_miles).sum();
        assert_eq!(report.total_distance_miles, expected.round() as u64);
        assert!(report.format_terminal().contains("Connecting flights:"));
    }

    #[test]
    fn test_overview_no_international() {
        let analyzer = FlightAnalyzer::default();
        let mut flights = classified(&analyzer, &[("2024-01-01", "SWA", "ABQ", "PHX")]);
        let report = FlightOverviewReport::generate(&analyzer, &mut flights);

        assert!(report.flights.is_empty());
        assert!(report.countries.is_empty());
        assert_eq!(report.total_distance_miles, 0);
    }
}
