//! Path management for Wayfarer
//!
//! ## Path Resolution Order
//!
//! 1. `WAYFARER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `wayfarer` (e.g. `~/.config/wayfarer`
//!    on Linux, `%APPDATA%\wayfarer\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TravelError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WAYFARER_DATA_DIR";

/// Manages all paths used by Wayfarer
#[derive(Debug, Clone)]
pub struct WayfarerPaths {
    /// Base directory for all Wayfarer files
    base_dir: PathBuf,
}

impl WayfarerPaths {
    /// Create a new WayfarerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, TravelError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WayfarerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory, where source exports live by default
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the flight history export
    pub fn flights_file(&self) -> PathBuf {
        self.data_dir().join("flights.csv")
    }

    /// Default location of the expense ledger
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TravelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TravelError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TravelError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Wayfarer has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TravelError> {
    ProjectDirs::from("", "", "wayfarer")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TravelError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WayfarerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.flights_file(),
            temp_dir.path().join("data").join("flights.csv")
        );
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = WayfarerPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WayfarerPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
