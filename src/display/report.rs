//! Report formatting utilities for terminal output
//!
//! Small text helpers shared by the flight and expense reports.

use crate::models::money::group_thousands;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Whole miles with thousands separators
pub fn format_miles(miles: u64) -> String {
    group_thousands(miles)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Keep the first `keep` characters, appending `...` when anything was cut
///
/// The result can be up to `keep + 3` characters long.
pub fn shorten(s: &str, keep: usize) -> String {
    if s.chars().count() <= keep {
        s.to_string()
    } else {
        let head: String = s.chars().take(keep).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.54), "5.5%");
        assert_eq!(format_percentage(50.0), "50.0%");
    }

    #[test]
    fn test_format_miles() {
        assert_eq!(format_miles(0), "0");
        assert_eq!(format_miles(12_345), "12,345");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("Japan", 15), "Japan");
        assert_eq!(shorten("Spain and Portugal 2024", 15), "Spain and Portu...");
        assert_eq!(shorten("Ísland og Færeyjar", 6), "Ísland...");
    }
}
