//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and services.

pub mod expenses;
pub mod export;
pub mod flights;

pub use expenses::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use flights::{handle_flight_command, FlightCommands};
