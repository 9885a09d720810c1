//! Core data models for Wayfarer
//!
//! Flight and expense records as they arrive from their exports, plus the
//! static reference tables (airports, airlines) used to enrich them.

pub mod airline;
pub mod airport;
pub mod expense;
pub mod flight;
pub mod money;

pub use airline::{airline_display_name, airline_name};
pub use airport::{Airport, AirportDirectory, AIRPORTS};
pub use expense::ExpenseRecord;
pub use flight::{parse_flight_timestamp, FlightRecord};
pub use money::Money;
