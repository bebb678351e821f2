//! The persisted budget
//!
//! Income, currency and the ordered category list are the whole of the saved
//! state. Everything else is derived.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::currency::Currency;
use super::group::Group;
use super::ids::CategoryId;

/// Income used when nothing has been saved yet
pub const DEFAULT_INCOME: f64 = 3000.0;

/// The entire persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub income: f64,
    pub currency: Currency,
    pub categories: Vec<Category>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME,
            currency: Currency::default(),
            categories: default_categories(),
        }
    }
}

impl Budget {
    pub fn new(income: f64, currency: Currency, categories: Vec<Category>) -> Self {
        Self {
            income,
            currency,
            categories,
        }
    }

    /// Find a category by id
    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories belonging to a group, in insertion order
    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.is_in(group))
    }

    /// Records whose group is not one of the known buckets
    pub fn unassigned(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.known_group().is_none())
    }

    pub fn ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().map(|c| c.id)
    }
}

/// Starter categories for a fresh budget
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), Group::Needs, "Rent / Mortgage", 1000.0, 1000.0),
        Category::new(CategoryId::new(2), Group::Needs, "Utilities", 150.0, 150.0),
        Category::new(CategoryId::new(3), Group::Needs, "Groceries", 300.0, 280.0),
        Category::new(CategoryId::new(8), Group::Savings, "Stocks & Shares ISA", 400.0, 400.0),
        Category::new(CategoryId::new(9), Group::Savings, "Emergency Fund", 200.0, 200.0),
        Category::new(CategoryId::new(12), Group::Wants, "Dining Out", 100.0, 120.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupTag;

    #[test]
    fn test_default_budget() {
        let budget = Budget::default();
        assert_eq!(budget.income, 3000.0);
        assert_eq!(budget.currency, Currency::Pound);
        assert_eq!(budget.categories.len(), 6);

        let ids: Vec<u64> = budget.ids().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 8, 9, 12]);
    }

    #[test]
    fn test_in_group_keeps_order() {
        let budget = Budget::default();
        let needs: Vec<&str> = budget
            .in_group(Group::Needs)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(needs, vec!["Rent / Mortgage", "Utilities", "Groceries"]);
        assert_eq!(budget.in_group(Group::Savings).count(), 2);
        assert_eq!(budget.in_group(Group::Wants).count(), 1);
    }

    #[test]
    fn test_find_and_unassigned() {
        let mut budget = Budget::default();
        assert_eq!(budget.find(CategoryId::new(12)).unwrap().name, "Dining Out");
        assert!(budget.find(CategoryId::new(4)).is_none());

        budget.categories.push(Category::new(
            CategoryId::new(50),
            GroupTag::Unknown("Holidays".into()),
            "Trip",
            0.0,
            500.0,
        ));
        assert_eq!(budget.unassigned().count(), 1);
    }
}
