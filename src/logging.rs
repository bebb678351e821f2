//! Tracing setup
//!
//! Logs go to `budget.log` in the data directory so they never draw over the
//! TUI. `RUST_LOG` wins over the filter in the settings file.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;

static TRACING_INIT: Once = Once::new();

/// Build the filter: `RUST_LOG`, else `debug` when verbose, else the settings
pub fn build_filter(settings: &Settings, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directive = if verbose {
        "monthly_budget=debug"
    } else {
        settings.log_filter.as_str()
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("monthly_budget=info"))
}

/// Install the global subscriber, appending to the log file
pub fn init_tracing(paths: &BudgetPaths, settings: &Settings, verbose: bool) -> BudgetResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;
    let filter = build_filter(settings, verbose);

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        init_tracing(&paths, &Settings::default(), false).unwrap();
        assert!(paths.log_file().exists());
    }

    #[test]
    fn test_bad_directive_falls_back() {
        let settings = Settings {
            log_filter: "[[not a filter".to_string(),
            ..Settings::default()
        };
        // Must not panic
        let _ = build_filter(&settings, false);
    }
}
