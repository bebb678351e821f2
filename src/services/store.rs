//! Budget state store
//!
//! Owns the budget and the backend it persists to. Every mutation saves all
//! keys straight away. Saving is best-effort: a failed write is logged and the
//! in-memory state stays authoritative.

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use super::summary::Summary;
use crate::error::{BudgetError, BudgetResult};
use crate::models::amount::finite_or_zero;
use crate::models::{
    parse_or_zero, Budget, Category, CategoryField, CategoryId, Currency, Group,
};
use crate::storage::{persistence, KeyValueStore};

/// Prompt shown before a category is deleted
pub const DELETE_PROMPT: &str = "Delete this item?";

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer, for callers that already asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// The budget plus its persistence backend
pub struct BudgetStore<S: KeyValueStore> {
    budget: Budget,
    store: S,
    last_saved: Option<DateTime<Local>>,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Load from `store` (defaults for anything missing) and write back
    pub fn open(store: S) -> Self {
        let budget = persistence::load(&store);
        let mut this = Self {
            budget,
            store,
            last_saved: None,
        };
        info!(
            categories = this.budget.categories.len(),
            "opened budget store"
        );
        this.persist();
        this
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn categories(&self) -> &[Category] {
        &self.budget.categories
    }

    pub fn currency(&self) -> Currency {
        self.budget.currency
    }

    pub fn income(&self) -> f64 {
        self.budget.income
    }

    /// Derived totals for the current state
    pub fn summary(&self) -> Summary {
        Summary::for_budget(&self.budget)
    }

    /// When the last successful save happened
    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn set_income(&mut self, income: f64) {
        self.budget.income = finite_or_zero(income);
        debug!(income = self.budget.income, "set income");
        self.persist();
    }

    /// Set income from raw text; anything non-numeric becomes 0
    pub fn set_income_input(&mut self, input: &str) {
        self.set_income(parse_or_zero(input));
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.budget.currency = currency;
        debug!(currency = currency.symbol(), "set currency");
        self.persist();
    }

    /// Step to the next currency and return it
    pub fn cycle_currency(&mut self) -> Currency {
        let next = self.budget.currency.next();
        self.set_currency(next);
        next
    }

    /// Append a blank category to `group` and return its id
    pub fn add_category(&mut self, group: Group) -> CategoryId {
        let id = CategoryId::generate(self.budget.ids());
        self.budget.categories.push(Category::placeholder(id, group));
        debug!(%id, group = group.name(), "added category");
        self.persist();
        id
    }

    /// Replace one field of a category from user input
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for a group value that names
    /// no known group. State is unchanged on error.
    pub fn try_update_category(
        &mut self,
        id: CategoryId,
        field: CategoryField,
        value: &str,
    ) -> BudgetResult<&Category> {
        let index = self
            .position(id)
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        let updated = self.budget.categories[index]
            .with_field(field, value)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.budget.categories[index] = updated;
        debug!(%id, field = field.name(), "updated category");
        self.persist();

        Ok(&self.budget.categories[index])
    }

    /// Like [`try_update_category`](Self::try_update_category), but a no-op
    /// returning `false` when the edit cannot be applied
    pub fn update_category(&mut self, id: CategoryId, field: CategoryField, value: &str) -> bool {
        match self.try_update_category(id, field, value) {
            Ok(_) => true,
            Err(e) => {
                warn!(%id, field = field.name(), error = %e, "category update ignored");
                false
            }
        }
    }

    /// Remove a category if `confirm` agrees
    ///
    /// Unknown ids return `false` without asking.
    pub fn delete_category(&mut self, id: CategoryId, confirm: &mut dyn Confirm) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        if !confirm.confirm(DELETE_PROMPT) {
            debug!(%id, "delete declined");
            return false;
        }

        let removed = self.budget.categories.remove(index);
        debug!(%id, name = %removed.name, "deleted category");
        self.persist();
        true
    }

    /// Drop all stored values and return to the default budget
    pub fn reset(&mut self) {
        if let Err(e) = persistence::clear(&mut self.store) {
            error!(error = %e, "failed to clear stored budget");
        }
        self.budget = Budget::default();
        info!("reset budget to defaults");
        self.persist();
    }

    fn position(&self, id: CategoryId) -> Option<usize> {
        self.budget.categories.iter().position(|c| c.id == id)
    }

    fn persist(&mut self) {
        match persistence::save(&mut self.store, &self.budget) {
            Ok(()) => self.last_saved = Some(Local::now()),
            Err(e) => error!(error = %e, "failed to save budget"),
        }
    }
}
