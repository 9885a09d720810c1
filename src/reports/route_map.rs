//! Route map data
//!
//! Polylines, airport markers and a bounding box for drawing flights on a
//! map. Flights whose airports have no coordinates are left off the map.

use serde::{Deserialize, Serialize};

use crate::error::TravelResult;
use crate::models::FlightRecord;
use crate::services::FlightAnalyzer;

/// Line color for international routes
pub const INTERNATIONAL_ROUTE_COLOR: &str = "#a85c5c";
/// Line color for domestic routes
pub const DOMESTIC_ROUTE_COLOR: &str = "#4a8585";

/// One flight drawn as a line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRoute {
    pub from: String,
    pub to: String,
    /// `[lat, lon]`
    pub from_coords: [f64; 2],
    /// `[lat, lon]`
    pub to_coords: [f64; 2],
    pub airline: String,
    pub date: String,
    pub is_international: bool,
    pub color: String,
}

/// One airport marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapAirport {
    pub code: String,
    pub coords: [f64; 2],
}

/// South-west and north-east corners enclosing every marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

/// Everything a map front end needs to draw the flight history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMap {
    pub routes: Vec<MapRoute>,
    /// Distinct airports in first-seen order
    pub airports: Vec<MapAirport>,
    pub bounds: Option<MapBounds>,
}

impl RouteMap {
    /// Build map data for a set of flights
    pub fn generate(analyzer: &FlightAnalyzer<'_>, flights: &[FlightRecord]) -> Self {
        let directory = analyzer.directory();
        let mut routes = Vec::new();
        let mut airports: Vec<MapAirport> = Vec::new();

        for flight in flights {
            let (Some(from), Some(to)) = (directory.get(&flight.from), directory.get(&flight.to))
            else {
                continue;
            };

            for airport in [from, to] {
                if !airports.iter().any(|a| a.code == airport.code) {
                    airports.push(MapAirport {
                        code: airport.code.to_string(),
                        coords: airport.coords(),
                    });
                }
            }

            let color = if flight.is_international {
                INTERNATIONAL_ROUTE_COLOR
            } else {
                DOMESTIC_ROUTE_COLOR
            };

            routes.push(MapRoute {
                from: from.code.to_string(),
                to: to.code.to_string(),
                from_coords: from.coords(),
                to_coords: to.coords(),
                airline: flight.airline.clone(),
                date: flight.date.clone(),
                is_international: flight.is_international,
                color: color.to_string(),
            });
        }

        let bounds = bounds_of(&airports);
        Self {
            routes,
            airports,
            bounds,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> TravelResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn bounds_of(airports: &[MapAirport]) -> Option<MapBounds> {
    let first = airports.first()?;
    let mut bounds = MapBounds {
        south_west: first.coords,
        north_east: first.coords,
    };

    for airport in &airports[1..] {
        let [lat, lon] = airport.coords;
        bounds.south_west[0] = bounds.south_west[0].min(lat);
        bounds.south_west[1] = bounds.south_west[1].min(lon);
        bounds.north_east[0] = bounds.north_east[0].max(lat);
        bounds.north_east[1] = bounds.north_east[1].max(lon);
    }

    Some(bounds)
}
