//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::TripSummary;

#[derive(Tabled)]
struct TripRow {
    #[tabled(rename = "Trip")]
    trip: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "Categories")]
    categories: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Largest")]
    largest: String,
}

/// Format trip summaries as a table
pub fn format_trip_list(trips: &[TripSummary], symbol: &str) -> String {
    if trips.is_empty() {
        return "No trips found.".to_string();
    }

    let rows: Vec<TripRow> = trips
        .iter()
        .map(|trip| TripRow {
            trip: trip.trip_name.clone(),
            expenses: trip.expense_count,
            categories: trip.categories.len(),
            total: trip.total_cost.format_with_symbol(symbol),
            largest: trip
                .categories
                .first()
                .map(|c| c.category.clone())
                .unwrap_or_default(),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use crate::services::ExpenseService;

    #[test]
    fn test_trip_list() {
        let expenses = vec![
            ExpenseRecord::new("Morocco", "Hotel", "$1,100"),
            ExpenseRecord::new("Morocco", "Food", "$90"),
        ];
        let trips = ExpenseService::new(&expenses).trip_summaries();

        let output = format_trip_list(&trips, "€");
        assert!(output.contains("Morocco"));
        assert!(output.contains("€1,190.00"));
        assert!(output.contains("Hotel"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_trip_list(&[], "$"), "No trips found.");
    }
}
