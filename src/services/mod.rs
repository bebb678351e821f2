//! Service layer for the budget tracker
//!
//! The state store applies edits and persists them; the summary derives totals
//! from whatever the store holds.

pub mod store;
pub mod summary;

pub use store::{Answer, BudgetStore, Confirm, DELETE_PROMPT};
pub use summary::{GroupTotals, Summary};
