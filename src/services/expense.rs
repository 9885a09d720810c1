//! Expense aggregation service
//!
//! Rolls a flat expense ledger up into per-trip and per-category summaries.
//! Nothing is cached: every call recomputes from the records it is given.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Color for labels not in the table
pub const DEFAULT_CATEGORY_COLOR: &str = "#9ca3af";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Flights", "#3b82f6"),
    ("Hotel", "#8b5cf6"),
    ("Lodging", "#8b5cf6"),
    ("Food", "#22c55e"),
    ("Transportation", "#f59e0b"),
    ("Activities", "#ec4899"),
    ("Entertainment", "#ec4899"),
    ("Shopping", "#14b8a6"),
    ("Other", "#6b7280"),
];

/// Spending on one expense label within one trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

impl CategoryBreakdown {
    /// Share of `trip_total` in percent; 0 when the trip total is zero
    pub fn percentage_of(&self, trip_total: Money) -> f64 {
        if trip_total.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / trip_total.cents() as f64 * 100.0
        }
    }
}

/// Rollup of every expense sharing a trip name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_name: String,
    pub total_cost: Money,
    pub expense_count: usize,
    /// Sorted by total, highest first
    pub categories: Vec<CategoryBreakdown>,
}

/// Parse a cost cell; see [`Money::parse_cost`]
pub fn parse_cost(raw: &str) -> Money {
    Money::parse_cost(raw)
}

/// Display color for an expense label
///
/// Well-known labels get a fixed color so the same kind of spending looks the
/// same in every chart; anything else is neutral gray.
pub fn category_color(label: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// Service for aggregating an expense ledger
pub struct ExpenseService<'a> {
    expenses: &'a [ExpenseRecord],
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over a set of records
    pub fn new(expenses: &'a [ExpenseRecord]) -> Self {
        Self { expenses }
    }

    /// The records this service aggregates
    pub fn expenses(&self) -> &'a [ExpenseRecord] {
        self.expenses
    }

    fn for_trip<'s>(&'s self, trip_name: &'s str) -> impl Iterator<Item = &'a ExpenseRecord> + 's {
        let trip_name = trip_name.trim();
        self.expenses
            .iter()
            .filter(move |e| e.trip_name() == trip_name)
    }

    /// Distinct non-empty trip names, sorted
    ///
    /// Names are trimmed the same way expense labels are, so `" Japan"` and
    /// `"Japan"` are one trip.
    pub fn trip_names(&self) -> Vec<String> {
        self.expenses
            .iter()
            .map(ExpenseRecord::trip_name)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether any record belongs to `trip_name`
    pub fn has_trip(&self, trip_name: &str) -> bool {
        self.for_trip(trip_name).next().is_some()
    }

    /// Expenses recorded against one trip
    pub fn trip_expenses(&self, trip_name: &str) -> Vec<&'a ExpenseRecord> {
        self.for_trip(trip_name).collect()
    }

    /// Total cost of one trip
    pub fn trip_total(&self, trip_name: &str) -> Money {
        self.for_trip(trip_name).map(ExpenseRecord::parsed_cost).sum()
    }

    /// Spending per expense label within one trip, highest total first
    ///
    /// Groups by the short label (`Expense` column), not the free-text
    /// `Category` column; blank labels group under "Other". Labels with equal
    /// totals keep first-seen order.
    pub fn category_breakdown(&self, trip_name: &str) -> Vec<CategoryBreakdown> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

        for expense in self.for_trip(trip_name) {
            let label = expense.label();
            let cost = expense.parsed_cost();

            match index.get(label) {
                Some(&i) => {
                    breakdown[i].total += cost;
                    breakdown[i].count += 1;
                }
                None => {
                    index.insert(label, breakdown.len());
                    breakdown.push(CategoryBreakdown {
                        category: label.to_string(),
                        total: cost,
                        count: 1,
                    });
                }
            }
        }

        breakdown.sort_by(|a, b| b.total.cmp(&a.total));
        breakdown
    }

    /// One summary per trip, most expensive first
    pub fn trip_summaries(&self) -> Vec<TripSummary> {
        let mut summaries: Vec<TripSummary> = self
            .trip_names()
            .into_iter()
            .map(|trip_name| TripSummary {
                total_cost: self.trip_total(&trip_name),
                expense_count: self.for_trip(&trip_name).count(),
                categories: self.category_breakdown(&trip_name),
                trip_name,
            })
            .collect();

        summaries.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
        summaries
    }

    /// Sum of every record's cost, including records with no trip
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(ExpenseRecord::parsed_cost).sum()
    }

    /// Total spend divided by the number of distinct trips
    ///
    /// This is not the mean of the per-trip totals: records without a trip
    /// name still count toward the numerator. Zero when there are no trips.
    pub fn average_trip_cost(&self) -> f64 {
        let trips = self.trip_names().len();
        if trips == 0 {
            return 0.0;
        }
        self.total_spent().as_dollars() / trips as f64
    }
}
