//! Expense ledger source
//!
//! The ledger is either the JSON array served by the expense sheet feed or a
//! CSV download of the same sheet. Rows that cannot be read are skipped; only
//! a missing or entirely unreadable file is an error.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{TravelError, TravelResult};
use crate::models::ExpenseRecord;

/// On-disk format of an expense ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Json,
    Csv,
}

impl LedgerFormat {
    /// Guess the format from a file extension; anything but `.csv` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Reads an expense ledger
#[derive(Debug, Clone)]
pub struct ExpenseSource {
    path: PathBuf,
    format: LedgerFormat,
}

impl ExpenseSource {
    /// Create a source, inferring the format from the extension
    pub fn new(path: PathBuf) -> Self {
        let format = LedgerFormat::from_path(&path);
        Self { path, format }
    }

    /// Path of the ledger
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format the ledger will be read as
    pub fn format(&self) -> LedgerFormat {
        self.format
    }

    /// Read every readable record
    pub fn load(&self) -> TravelResult<Vec<ExpenseRecord>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;

        let expenses = match self.format {
            LedgerFormat::Json => parse_expenses_json(&raw).map_err(|e| self.unavailable(e))?,
            LedgerFormat::Csv => parse_expenses_csv(raw.as_bytes()).map_err(|e| self.unavailable(e))?,
        };

        info!(
            path = %self.path.display(),
            expenses = expenses.len(),
            "loaded expense ledger"
        );
        Ok(expenses)
    }

    fn unavailable(&self, reason: impl ToString) -> TravelError {
        TravelError::SourceUnavailable {
            source_kind: "Expense ledger",
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Parse a JSON array of ledger rows, skipping elements that are not rows
///
/// Cells are read as text: `null` is blank and numbers or booleans keep their
/// JSON spelling, so a feed that sends `"Points": 1500` loses nothing.
pub fn parse_expenses_json(raw: &str) -> TravelResult<Vec<ExpenseRecord>> {
    let values: Vec<Value> = serde_json::from_str(raw)?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let Value::Object(cells) = value else {
                debug!(index = idx, "skipping expense row that is not an object");
                return None;
            };
            match serde_json::from_value(Value::Object(text_cells(cells))) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(index = idx, error = %e, "skipping unreadable expense row");
                    None
                }
            }
        })
        .collect())
}

fn text_cells(cells: Map<String, Value>) -> Map<String, Value> {
    cells
        .into_iter()
        .filter_map(|(column, cell)| {
            let text = match cell {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((column, Value::String(text)))
        })
        .collect()
}

/// Parse a CSV ledger with the sheet's column headers
pub fn parse_expenses_csv<R: Read>(reader: R) -> TravelResult<Vec<ExpenseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // An unreadable header means there is nothing to map rows onto
    reader.headers()?;

    let mut expenses = Vec::new();
    for (idx, result) in reader.deserialize::<ExpenseRecord>().enumerate() {
        match result {
            Ok(record) => expenses.push(record),
            Err(e) => debug!(row = idx + 2, error = %e, "skipping unreadable expense row"),
        }
    }
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(LedgerFormat::from_path(Path::new("a.csv")), LedgerFormat::Csv);
        assert_eq!(LedgerFormat::from_path(Path::new("a.CSV")), LedgerFormat::Csv);
        assert_eq!(LedgerFormat::from_path(Path::new("a.json")), LedgerFormat::Json);
        assert_eq!(LedgerFormat::from_path(Path::new("ledger")), LedgerFormat::Json);
    }

    #[test]
    fn test_parse_json_skips_bad_rows() {
        let raw = r#"[
            {"Expense": "Flights", "Cost": "$900", "Trip": "Morocco"},
            42,
            {"Expense": "Food", "Cost": "$20", "Trip": "Morocco", "Extra": "ignored"}
        ]"#;
        let expenses = parse_expenses_json(raw).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[1].expense_name, "Food");
    }

    #[test]
    fn test_parse_json_tolerates_null_and_numeric_cells() {
        let raw = r#"[
            {"Expense": "Hotel", "Cost": "$500", "Notes": null, "Trip": "Japan"},
            {"Expense": "Food", "Cost": 20.5, "Points": 1500, "Trip": "Japan"},
            {"Expense": "Train", "Cost": "$30", "Notes": ["JR", "pass"], "Trip": "Japan"}
        ]"#;
        let expenses = parse_expenses_json(raw).unwrap();
        assert_eq!(expenses.len(), 3);
        assert!(expenses[0].notes.is_empty());
        assert_eq!(expenses[1].points, "1500");
        assert_eq!(expenses[1].parsed_cost().cents(), 2050);
        assert!(expenses[2].notes.is_empty());

        let total: i64 = expenses.iter().map(|e| e.parsed_cost().cents()).sum();
        assert_eq!(total, 55_050);
    }

    #[test]
    fn test_parse_json_not_an_array() {
        assert!(parse_expenses_json("{\"error\": \"quota\"}").is_err());
    }

    #[test]
    fn test_parse_csv() {
        let raw = "Expense,Category,Cost,Points,Amount Paid,Notes,Trip\n\
                   Flights,Round trip,\"$1,234.50\",,,,Japan\n\
                   Hotel,Ryokan,$600,,,2 nights,Japan\n";
        let expenses = parse_expenses_csv(raw.as_bytes()).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].parsed_cost().cents(), 123_450);
        assert_eq!(expenses[1].notes, "2 nights");
    }

    #[test]
    fn test_parse_csv_missing_columns_default() {
        let raw = "Trip,Expense,Cost\nIceland,Activities,$80\n";
        let expenses = parse_expenses_csv(raw.as_bytes()).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].trip, "Iceland");
        assert!(expenses[0].notes.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = ExpenseSource::new(temp_dir.path().join("expenses.json"));
        assert!(source.load().unwrap_err().is_source_unavailable());
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, r#"[{"Expense": "Food", "Cost": "$5", "Trip": "Spain"}]"#).unwrap();

        let expenses = ExpenseSource::new(path).load().unwrap();
        assert_eq!(expenses.len(), 1);
    }
}
