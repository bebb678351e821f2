//! Budget codec over a key-value store
//!
//! The budget is spread across three keys. Loading never fails: every key that
//! is missing, unreadable or malformed falls back to its default on its own.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::error::{BudgetError, BudgetResult};
use crate::models::amount::finite_or_zero;
use crate::models::{default_categories, Budget, Category, CategoryId, Currency, DEFAULT_INCOME};

pub const INCOME_KEY: &str = "budget_income";
pub const CURRENCY_KEY: &str = "budget_currency";
pub const CATEGORIES_KEY: &str = "budget_categories";

/// Every key the budget occupies
pub const KEYS: [&str; 3] = [CATEGORIES_KEY, INCOME_KEY, CURRENCY_KEY];

/// Load the budget, substituting defaults key by key
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Budget {
    let income = read_key(store, INCOME_KEY)
        .and_then(|raw| {
            let decoded = decode_income(&raw);
            if decoded.is_none() {
                warn!(key = INCOME_KEY, "stored income is not a number, using default");
            }
            decoded
        })
        .unwrap_or(DEFAULT_INCOME);

    let currency = read_key(store, CURRENCY_KEY)
        .map(|raw| decode_currency(&raw))
        .unwrap_or_default();

    let categories = read_key(store, CATEGORIES_KEY)
        .and_then(|raw| {
            let decoded = decode_categories(&raw);
            if decoded.is_none() {
                warn!(key = CATEGORIES_KEY, "stored categories are unusable, using defaults");
            }
            decoded
        })
        .unwrap_or_else(default_categories);

    debug!(
        income,
        currency = currency.symbol(),
        categories = categories.len(),
        "loaded budget"
    );

    Budget::new(income, currency, categories)
}

/// Write all three keys
///
/// Stops at the first failing write and returns its error.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, budget: &Budget) -> BudgetResult<()> {
    let categories = serde_json::to_string(&budget.categories)
        .map_err(|e| BudgetError::Storage(format!("Failed to encode categories: {}", e)))?;
    store.write(CATEGORIES_KEY, &categories)?;

    let income = serde_json::to_string(&finite_or_zero(budget.income))
        .map_err(|e| BudgetError::Storage(format!("Failed to encode income: {}", e)))?;
    store.write(INCOME_KEY, &income)?;

    store.write(CURRENCY_KEY, budget.currency.symbol())?;
    Ok(())
}

/// Remove every budget key
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> BudgetResult<()> {
    for key in KEYS {
        store.remove(key)?;
    }
    Ok(())
}

fn read_key<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.read(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            None
        }
    }
}

/// Income is a JSON number; a numeric JSON string is accepted too
///
/// Zero is a valid stored income and is kept.
pub fn decode_income(raw: &str) -> Option<f64> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Currency is stored as the raw symbol; empty means unset
pub fn decode_currency(raw: &str) -> Currency {
    if raw.is_empty() {
        Currency::default()
    } else {
        Currency::from_symbol_lossy(raw)
    }
}

/// Decode the category array
///
/// `None` when the value is not JSON, `null`, or not an array. Records that are
/// not objects or carry no usable id are dropped; duplicate ids are reassigned.
pub fn decode_categories(raw: &str) -> Option<Vec<Category>> {
    let items = match serde_json::from_str::<Value>(raw).ok()? {
        Value::Array(items) => items,
        _ => return None,
    };

    let mut categories: Vec<Category> = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, "dropping stored category that is not an object");
            continue;
        }
        match serde_json::from_value::<Category>(item) {
            Ok(category) => categories.push(category),
            Err(e) => warn!(index, error = %e, "dropping malformed stored category"),
        }
    }

    dedupe_ids(&mut categories);
    Some(categories)
}

/// Give every repeated id after the first a fresh one
fn dedupe_ids(categories: &mut [Category]) {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for (index, category) in categories.iter().enumerate() {
        if !seen.insert(category.id) {
            duplicates.push(index);
        }
    }

    for index in duplicates {
        let fresh = CategoryId::generate(categories.iter().map(|c| c.id));
        warn!(old = %categories[index].id, new = %fresh, "reassigning duplicate category id");
        categories[index].id = fresh;
    }
}
