//! Service layer for Wayfarer
//!
//! The analysis logic: flight classification and statistics, and expense
//! rollups. Services borrow already-loaded records and never perform I/O.

pub mod expense;
pub mod flight;

pub use expense::{
    category_color, parse_cost, CategoryBreakdown, ExpenseService, TripSummary,
    DEFAULT_CATEGORY_COLOR,
};
pub use flight::{
    haversine_miles, AirlineCount, FlightAnalyzer, FlightStats, RouteCount, EARTH_RADIUS_MILES,
};
