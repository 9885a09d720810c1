//! Flight analysis service
//!
//! Turns a raw flight history export into classified flights and summary
//! statistics. Every operation here is total: unknown airports, short rows
//! and unreadable dates degrade to zero/false/skip instead of failing.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::Duration;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{AirportDirectory, FlightRecord};

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Default window around an international flight for connecting detection
pub const DEFAULT_CONNECTING_WINDOW_HOURS: i64 = 24;

/// Rows shorter than this are skipped
const MIN_FIELDS: usize = 5;

/// Field positions in a flight history export
mod field {
    pub const DATE: usize = 0;
    pub const AIRLINE: usize = 1;
    pub const FLIGHT_NUMBER: usize = 2;
    pub const FROM: usize = 3;
    pub const TO: usize = 4;
    pub const DEPARTURE_SCHEDULED: usize = 11;
    pub const DEPARTURE_ACTUAL: usize = 12;
    pub const ARRIVAL_SCHEDULED: usize = 17;
    pub const ARRIVAL_ACTUAL: usize = 18;
    pub const AIRCRAFT: usize = 19;
}

/// A route and how many times it was flown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCount {
    pub route: String,
    pub count: usize,
}

/// An airline and how many flights it operated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineCount {
    pub airline: String,
    pub count: usize,
}

/// Aggregate statistics over a set of flights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    pub total_flights: usize,
    pub international_flights: usize,
    pub domestic_flights: usize,
    /// Distinct countries touched, in first-seen order
    pub countries: Vec<String>,
    /// Distinct airline codes, in first-seen order
    pub airlines: Vec<String>,
    /// Distinct aircraft types, in first-seen order
    pub aircraft_types: Vec<String>,
    /// Sum of distances, rounded to whole miles
    pub total_distance_miles: u64,
    pub longest_flight: Option<FlightRecord>,
    pub most_frequent_route: Option<RouteCount>,
    pub most_used_airline: Option<AirlineCount>,
}

/// Service for analyzing flight history
pub struct FlightAnalyzer<'a> {
    directory: &'a AirportDirectory,
    connecting_window: Duration,
}

impl Default for FlightAnalyzer<'static> {
    fn default() -> Self {
        Self::new(AirportDirectory::global())
    }
}

impl<'a> FlightAnalyzer<'a> {
    /// Create an analyzer over an airport directory with the default 24 hour window
    pub fn new(directory: &'a AirportDirectory) -> Self {
        Self {
            directory,
            connecting_window: Duration::hours(DEFAULT_CONNECTING_WINDOW_HOURS),
        }
    }

    /// Use a different connecting window
    pub fn with_connecting_window(mut self, window: Duration) -> Self {
        self.connecting_window = window;
        self
    }

    /// The airport directory used for lookups
    pub fn directory(&self) -> &'a AirportDirectory {
        self.directory
    }

    /// Parse a flight history export into classified flights
    ///
    /// The first line is a header and is discarded. Blank rows, rows with
    /// fewer than five fields and rows without both airports are skipped, so
    /// a file with some corrupt rows still yields all the good ones.
    pub fn parse(&self, raw_text: &str) -> Vec<FlightRecord> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(raw_text.as_bytes());

        let mut flights = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let line = idx + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    debug!(line, error = %e, "skipping unreadable flight row");
                    continue;
                }
            };

            match self.parse_record(&record) {
                Some(flight) => flights.push(flight),
                None => debug!(line, fields = record.len(), "skipping malformed flight row"),
            }
        }

        flights
    }

    fn parse_record(&self, record: &StringRecord) -> Option<FlightRecord> {
        if record.len() < MIN_FIELDS {
            return None;
        }

        let from = record.get(field::FROM)?;
        let to = record.get(field::TO)?;
        if from.is_empty() || to.is_empty() {
            return None;
        }

        let optional = |idx: usize| {
            record
                .get(idx)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let mut flight = FlightRecord::new(
            record.get(field::DATE).unwrap_or_default(),
            record.get(field::AIRLINE).unwrap_or_default(),
            from,
            to,
        );
        flight.flight_number = optional(field::FLIGHT_NUMBER);
        flight.departure_scheduled = optional(field::DEPARTURE_SCHEDULED);
        flight.departure_actual = optional(field::DEPARTURE_ACTUAL);
        flight.arrival_scheduled = optional(field::ARRIVAL_SCHEDULED);
        flight.arrival_actual = optional(field::ARRIVAL_ACTUAL);
        flight.aircraft = optional(field::AIRCRAFT);

        flight.is_international = self.classify(&flight);
        flight.distance_miles = self.distance(&flight.from, &flight.to);

        Some(flight)
    }

    /// Great-circle distance between two airports in miles
    ///
    /// Returns 0 when either code is not in the directory; callers must read
    /// 0 as "unknown", not "adjacent".
    pub fn distance(&self, from: &str, to: &str) -> f64 {
        let (Some(a), Some(b)) = (self.directory.get(from), self.directory.get(to)) else {
            return 0.0;
        };

        haversine_miles(a.latitude, a.longitude, b.latitude, b.longitude)
    }

    /// Whether a flight crosses a border
    ///
    /// True only when both airports have a known country and the countries
    /// differ. Unknown airports count as domestic so nothing is overcounted.
    pub fn classify(&self, flight: &FlightRecord) -> bool {
        match (
            self.directory.country(&flight.from),
            self.directory.country(&flight.to),
        ) {
            (Some(from), Some(to)) => from != to,
            _ => false,
        }
    }

    /// International flights plus the domestic legs that probably connect to them
    ///
    /// A domestic flight is flagged `is_connecting` when its timestamp is
    /// within the connecting window (inclusive, either direction) of any
    /// international flight's timestamp. This is a heuristic: long layovers
    /// are missed and unrelated same-day flights are caught. Flights with an
    /// unreadable date never match.
    ///
    /// The result holds every international flight and every flagged flight
    /// once, sorted by date ascending (undated flights last).
    pub fn find_connecting_flights(&self, flights: &mut [FlightRecord]) -> Vec<FlightRecord> {
        let international_times: Vec<_> = flights
            .iter()
            .filter(|f| f.is_international)
            .map(|f| f.timestamp)
            .collect();

        let mut relevant: Vec<FlightRecord> = flights
            .iter()
            .filter(|f| f.is_international)
            .cloned()
            .collect();

        for flight in flights.iter_mut().filter(|f| f.is_domestic()) {
            let Some(time) = flight.timestamp else {
                continue;
            };

            let within_window = international_times
                .iter()
                .flatten()
                .any(|intl| (time - *intl).abs() <= self.connecting_window);

            if within_window {
                flight.is_connecting = true;
                relevant.push(flight.clone());
            }
        }

        relevant.sort_by(|a, b| compare_dates(a, b));
        relevant
    }

    /// Summary statistics over a set of flights
    ///
    /// Ties for most frequent route/airline go to whichever reached the
    /// leading count first in input order: a later entry only takes over when
    /// its count is strictly greater.
    pub fn aggregate(&self, flights: &[FlightRecord]) -> FlightStats {
        let mut countries = FirstSeen::default();
        let mut airlines = FirstSeen::default();
        let mut aircraft_types = FirstSeen::default();
        let mut routes = Tally::default();
        let mut airline_counts = Tally::default();

        let mut total_distance = 0.0;
        let mut international = 0;
        let mut longest: Option<&FlightRecord> = None;

        for flight in flights {
            for code in [&flight.from, &flight.to] {
                match self.directory.country(code) {
                    Some(country) => countries.insert(country),
                    None => warn!(airport = %code, "airport not in directory"),
                }
            }

            airlines.insert(&flight.airline);
            airline_counts.add(&flight.airline);

            if let Some(aircraft) = &flight.aircraft {
                aircraft_types.insert(aircraft);
            }

            routes.add(&flight.route());

            total_distance += flight.distance_miles;
            if flight.distance_miles > longest.map_or(0.0, |f| f.distance_miles) {
                longest = Some(flight);
            }

            if flight.is_international {
                international += 1;
            }
        }

        FlightStats {
            total_flights: flights.len(),
            international_flights: international,
            domestic_flights: flights.len() - international,
            countries: countries.into_vec(),
            airlines: airlines.into_vec(),
            aircraft_types: aircraft_types.into_vec(),
            total_distance_miles: total_distance.round() as u64,
            longest_flight: longest.cloned(),
            most_frequent_route: routes
                .leader()
                .map(|(route, count)| RouteCount { route, count }),
            most_used_airline: airline_counts
                .leader()
                .map(|(airline, count)| AirlineCount { airline, count }),
        }
    }
}

/// Haversine great-circle distance in miles between two points in degrees
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

fn compare_dates(a: &FlightRecord, b: &FlightRecord) -> Ordering {
    match (a.timestamp, b.timestamp) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct values in insertion order
#[derive(Default)]
struct FirstSeen {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl FirstSeen {
    fn insert(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.order.push(value.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Occurrence counts that remember first-seen order
#[derive(Default)]
struct Tally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        if *count == 0 {
            self.order.push(key.to_string());
        }
        *count += 1;
    }

    /// Highest count; the first key in insertion order wins ties
    fn leader(&self) -> Option<(String, usize)> {
        let mut best: Option<(&String, usize)> = None;
        for key in &self.order {
            let count = self.counts[key];
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((key, count));
            }
        }
        best.map(|(key, count)| (key.clone(), count))
    }
}
