//! Display formatting for terminal output
//!
//! Tables for flights, airports and trips, plus the text helpers the reports
//! share.

pub mod expense;
pub mod flight;
pub mod report;

pub use expense::format_trip_list;
pub use flight::{format_airport_list, format_flight_list};
