//! Expense record model
//!
//! One line item from the travel expense sheet. Field names on the wire are
//! the sheet's column headers, so the same struct reads both the JSON feed and
//! a CSV download of the sheet.

use serde::{Deserialize, Serialize};

use super::Money;

/// One line-item expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Short label of the purchase, e.g. "Flights" or "Hotel"
    #[serde(rename = "Expense", default)]
    pub expense_name: String,

    /// Free-text sub-description
    #[serde(rename = "Category", default)]
    pub category: String,

    /// Cost as displayed, e.g. "$1,234.50"
    #[serde(rename = "Cost", default)]
    pub cost: String,

    #[serde(rename = "Points", default)]
    pub points: String,

    #[serde(rename = "Amount Paid", default)]
    pub amount_paid: String,

    #[serde(rename = "Notes", default)]
    pub notes: String,

    /// Name of the trip this expense belongs to
    #[serde(rename = "Trip", default)]
    pub trip: String,
}

impl ExpenseRecord {
    /// Create an expense with the fields the aggregations use
    pub fn new(
        trip: impl Into<String>,
        expense_name: impl Into<String>,
        cost: impl Into<String>,
    ) -> Self {
        Self {
            trip: trip.into(),
            expense_name: expense_name.into(),
            cost: cost.into(),
            ..Self::default()
        }
    }

    /// Parsed cost; malformed values are zero
    pub fn parsed_cost(&self) -> Money {
        Money::parse_cost(&self.cost)
    }

    /// Trip name without surrounding whitespace; empty when unassigned
    pub fn trip_name(&self) -> &str {
        self.trip.trim()
    }

    /// Grouping label, `"Other"` when the sheet left it blank
    pub fn label(&self) -> &str {
        let label = self.expense_name.trim();
        if label.is_empty() {
            "Other"
        } else {
            label
        }
    }
}
