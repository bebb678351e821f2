//! Budget-level CLI commands
//!
//! Dashboard output, income and currency changes, and reset.

use super::prompt::StdinConfirm;
use crate::display::format_dashboard;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Currency;
use crate::services::{BudgetStore, Confirm};
use crate::storage::KeyValueStore;

/// Print the dashboard
pub fn handle_show<S: KeyValueStore>(store: &BudgetStore<S>) -> BudgetResult<()> {
    print!("{}", format_dashboard(store.budget()));
    Ok(())
}

/// Set the monthly income; non-numeric input becomes 0
pub fn handle_income<S: KeyValueStore>(store: &mut BudgetStore<S>, amount: &str) -> BudgetResult<()> {
    store.set_income_input(amount);
    let summary = store.summary();
    println!("Income set to {}", store.currency().format(store.income()));
    println!("Remaining: {}", store.currency().format(summary.remaining));
    Ok(())
}

/// Switch the display currency by symbol or ISO code
pub fn handle_currency<S: KeyValueStore>(store: &mut BudgetStore<S>, input: &str) -> BudgetResult<()> {
    let currency = Currency::parse(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Unknown currency '{}' (expected £, $, €, GBP, USD or EUR)",
            input
        ))
    })?;

    store.set_currency(currency);
    println!("Currency set to {} ({})", currency.symbol(), currency.iso_code());
    Ok(())
}

/// Restore the default budget after confirmation
pub fn handle_reset<S: KeyValueStore>(store: &mut BudgetStore<S>, yes: bool) -> BudgetResult<()> {
    let confirmed = yes || StdinConfirm.confirm("Reset the budget to its defaults?");
    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    store.reset();
    println!("Budget reset to defaults.");
    Ok(())
}
