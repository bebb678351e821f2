//! Monthly Budget - terminal budget tracker
//!
//! Income, a display currency and a list of categories, each planned and
//! actual, sorted into three groups: Needs, Wants and Savings. Totals, the
//! remaining balance and the invested share are derived on every change, and
//! every change is written straight to a local key-value store.
//!
//! # Architecture
//!
//! - `models`: categories, groups, currency and the budget record
//! - `services`: the state store and the derived summary
//! - `charts`: donut and bar geometry
//! - `storage`: key-value backends and budget persistence
//! - `display`: plain-text output for the command line
//! - `export`: JSON, YAML and CSV exports
//! - `cli`: command handlers
//! - `tui`: the interactive dashboard
//! - `config`: paths and settings
//!
//! # Example
//!
//! ```rust
//! use monthly_budget::services::BudgetStore;
//! use monthly_budget::storage::MemoryStore;
//!
//! let mut store = BudgetStore::open(MemoryStore::new());
//! assert_eq!(store.summary().remaining, 850.0);
//!
//! store.set_income(4000.0);
//! assert_eq!(store.summary().remaining, 1850.0);
//! assert_eq!(store.summary().invested_percent(), Some(15.0));
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
