//! Wayfarer - travel history analysis from the terminal
//!
//! This library turns a flight history export and a trip expense ledger into
//! statistics and reports: great-circle distances, international and
//! connecting flights, per-trip spending and category breakdowns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Flight and expense records, airports, money
//! - `services`: Flight analyzer and expense aggregator
//! - `storage`: Reading the source exports
//! - `reports`: Report generation for terminal and CSV
//! - `display`: Terminal tables and formatting helpers
//! - `export`: JSON, YAML and CSV exports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use wayfarer::services::FlightAnalyzer;
//!
//! let analyzer = FlightAnalyzer::default();
//! let flights = analyzer.parse("Date,Airline,Flight,From,To\n2024-05-01,UAL,UA1,ABQ,DEN\n");
//! let stats = analyzer.aggregate(&flights);
//! assert_eq!(stats.total_flights, 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TravelError, TravelResult};
