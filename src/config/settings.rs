//! User settings for the budget tracker
//!
//! Settings live in `config.json` next to the key-value store. Every field has a
//! serde default so older or hand-edited files keep loading, and a file that
//! cannot be parsed at all is ignored in favour of the defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ask on stdin before deleting from the command line
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,

    /// tracing filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_confirm_deletes() -> bool {
    true
}

fn default_log_filter() -> String {
    "monthly_budget=info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            confirm_deletes: default_confirm_deletes(),
            log_filter: default_log_filter(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Read the settings file; `None` when there is none yet
    pub fn load(paths: &BudgetPaths) -> Result<Option<Self>, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Load settings, writing the defaults on first run
    ///
    /// An unreadable or malformed file is left alone and the defaults are used.
    pub fn load_or_create(paths: &BudgetPaths) -> Self {
        match Self::load(paths) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let settings = Settings::default();
                if let Err(e) = settings.save(paths) {
                    warn!(error = %e, "could not write default settings");
                }
                settings
            }
            Err(e) => {
                warn!(error = %e, "ignoring settings file, using defaults");
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.confirm_deletes);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.log_filter, "monthly_budget=info");
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths);
        assert_eq!(loaded, Settings::default());
        assert!(paths.settings_file().exists());
        assert_eq!(Settings::load(&paths).unwrap(), Some(Settings::default()));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            confirm_deletes: false,
            tick_rate_ms: 100,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"confirm_deletes": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths);
        assert!(!loaded.confirm_deletes);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));

        assert_eq!(Settings::load_or_create(&paths), Settings::default());
        // Left for the user to fix
        let contents = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert_eq!(contents, "{ nope");
    }
}
