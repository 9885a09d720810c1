//! Expense reports
//!
//! The overview across every trip in the ledger, and the category breakdown
//! of a single trip.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::display::report::{format_bar, format_percentage, separator, shorten};
use crate::error::{TravelError, TravelResult};
use crate::models::Money;
use crate::services::{category_color, ExpenseService, TripSummary};

/// Colors assigned to trip bars, cycled in report order
pub const TRIP_PALETTE: [&str; 8] = [
    "#3b82f6", "#8b5cf6", "#22c55e", "#f59e0b", "#ec4899", "#14b8a6", "#ef4444", "#6366f1",
];

/// Characters of a trip name kept on a chart label
pub const CHART_LABEL_CHARS: usize = 15;

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;

/// One bar of the per-trip chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBar {
    /// Short label for the axis
    pub label: String,
    pub full_name: String,
    pub cost: Money,
    pub color: String,
}

/// Spending across every trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseOverviewReport {
    /// Total spent divided by trip count, in dollars
    pub average_trip_cost: f64,
    pub total_spent: Money,
    pub trip_count: usize,
    /// Most expensive first
    pub trips: Vec<TripSummary>,
    pub chart: Vec<TripBar>,
}

impl ExpenseOverviewReport {
    /// Generate the overview for a ledger
    pub fn generate(service: &ExpenseService<'_>) -> Self {
        let trips = service.trip_summaries();

        let chart = trips
            .iter()
            .enumerate()
            .map(|(idx, trip)| TripBar {
                label: shorten(&trip.trip_name, CHART_LABEL_CHARS),
                full_name: trip.trip_name.clone(),
                cost: trip.total_cost,
                color: TRIP_PALETTE[idx % TRIP_PALETTE.len()].to_string(),
            })
            .collect();

        Self {
            average_trip_cost: service.average_trip_cost(),
            total_spent: service.total_spent(),
            trip_count: trips.len(),
            trips,
            chart,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Travel Expenses\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Average per trip: {}\n",
            Money::from_dollars(self.average_trip_cost).format_whole(symbol)
        ));
        output.push_str(&format!(
            "Total spent:      {}\n",
            self.total_spent.format_whole(symbol)
        ));
        output.push_str(&format!("Trips:            {}\n\n", self.trip_count));

        if self.chart.is_empty() {
            output.push_str("No trips recorded.\n");
            return output;
        }

        let max = self
            .chart
            .iter()
            .map(|bar| bar.cost.cents())
            .max()
            .unwrap_or(0) as f64;

        output.push_str(&format!(
            "{:<20} {:>12}  {}\n",
            "Trip", "Cost", "Share of largest"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for bar in &self.chart {
            output.push_str(&format!(
                "{:<20} {:>12}  {}\n",
                bar.label,
                bar.cost.format_whole(symbol),
                format_bar(bar.cost.cents() as f64, max, BAR_WIDTH)
            ));
        }

        output
    }

    /// Export every trip's category rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TravelResult<()> {
        crate::export::csv::write_trips_csv(&self.trips, writer)
    }
}

/// One category row of a trip detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCategoryRow {
    pub category: String,
    pub color: String,
    pub total: Money,
    pub count: usize,
    /// Share of the trip total, rounded to one decimal
    pub percentage: f64,
}

/// Category breakdown of a single trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetailReport {
    pub trip_name: String,
    pub expense_count: usize,
    pub total: Money,
    pub categories: Vec<TripCategoryRow>,
}

impl TripDetailReport {
    /// Generate the detail for one trip
    ///
    /// Fails with `NotFound` when no record carries the trip name.
    pub fn generate(service: &ExpenseService<'_>, trip_name: &str) -> TravelResult<Self> {
        if !service.has_trip(trip_name) {
            return Err(TravelError::trip_not_found(trip_name));
        }

        let total = service.trip_total(trip_name);
        let categories = service
            .category_breakdown(trip_name)
            .into_iter()
            .map(|c| TripCategoryRow {
                color: category_color(&c.category).to_string(),
                percentage: (c.percentage_of(total) * 10.0).round() / 10.0,
                total: c.total,
                count: c.count,
                category: c.category,
            })
            .collect();

        Ok(Self {
            trip_name: trip_name.to_string(),
            expense_count: service.trip_expenses(trip_name).len(),
            total,
            categories,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Trip: {}\n", self.trip_name));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{} expenses across {} categories, {} total\n\n",
            self.expense_count,
            self.categories.len(),
            self.total.format_whole(symbol)
        ));

        output.push_str(&format!(
            "{:<24} {:>12} {:>6} {:>7}  {}\n",
            "Category", "Total", "Count", "%", "Color"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>12} {:>6} {:>7}  {}\n",
                row.category,
                row.total.format_whole(symbol),
                row.count,
                format_percentage(row.percentage),
                row.color
            ));
        }

        output
    }

    /// Export the category rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TravelResult<()> {
        let summary = TripSummary {
            trip_name: self.trip_name.clone(),
            total_cost: self.total,
            expense_count: self.expense_count,
            categories: self
                .categories
                .iter()
                .map(|row| crate::services::CategoryBreakdown {
                    category: row.category.clone(),
                    total: row.total,
                    count: row.count,
                })
                .collect(),
        };
        crate::export::csv::write_trips_csv(std::slice::from_ref(&summary), writer)
    }
}
