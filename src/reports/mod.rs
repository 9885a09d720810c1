//! Reports module for Wayfarer
//!
//! Flight statistics, the international travel overview, route map data, and
//! the expense overview and trip breakdown.

pub mod expenses;
pub mod flights;
pub mod route_map;

pub use expenses::{
    ExpenseOverviewReport, TripBar, TripCategoryRow, TripDetailReport, CHART_LABEL_CHARS,
    TRIP_PALETTE,
};
pub use flights::{AirlineUsage, FlightOverviewReport, FlightStatsReport};
pub use route_map::{
    MapAirport, MapBounds, MapRoute, RouteMap, DOMESTIC_ROUTE_COLOR, INTERNATIONAL_ROUTE_COLOR,
};
