//! User settings for Wayfarer
//!
//! Where the source exports live and how the analyses are tuned.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::WayfarerPaths;
use crate::error::TravelError;

/// User settings for Wayfarer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Flight history export (CSV); defaults to `data/flights.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights_file: Option<PathBuf>,

    /// Expense ledger (JSON or CSV); defaults to `data/expenses.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,

    /// Window around an international flight in which a domestic flight
    /// counts as connecting
    #[serde(default = "default_connecting_window_hours")]
    pub connecting_window_hours: u32,

    /// Currency symbol used when formatting costs
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_connecting_window_hours() -> u32 {
    24
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            flights_file: None,
            expenses_file: None,
            connecting_window_hours: default_connecting_window_hours(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WayfarerPaths) -> Result<Self, TravelError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TravelError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TravelError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WayfarerPaths) -> Result<(), TravelError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TravelError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TravelError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the flight history path: explicit override, then settings, then default
    pub fn resolve_flights_file(&self, paths: &WayfarerPaths, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.flights_file.clone())
            .unwrap_or_else(|| paths.flights_file())
    }

    /// Resolve the expense ledger path: explicit override, then settings, then default
    pub fn resolve_expenses_file(&self, paths: &WayfarerPaths, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.expenses_file.clone())
            .unwrap_or_else(|| paths.expenses_file())
    }

    /// Connecting window as a chrono duration
    pub fn connecting_window(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.connecting_window_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.connecting_window_hours, 24);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.flights_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WayfarerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            connecting_window_hours: 36,
            flights_file: Some(PathBuf::from("/srv/flighty.csv")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.connecting_window_hours, 36);
        assert_eq!(loaded.flights_file, Some(PathBuf::from("/srv/flighty.csv")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WayfarerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.connecting_window_hours, 24);
    }

    #[test]
    fn test_resolve_order() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WayfarerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_flights_file(&paths, None), paths.flights_file());

        settings.flights_file = Some(PathBuf::from("from-settings.csv"));
        assert_eq!(
            settings.resolve_flights_file(&paths, None),
            PathBuf::from("from-settings.csv")
        );
        assert_eq!(
            settings.resolve_flights_file(&paths, Some(PathBuf::from("cli.csv"))),
            PathBuf::from("cli.csv")
        );
    }
}
