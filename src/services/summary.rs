//! Derived budget summary
//!
//! A pure function of the category list and the income figure. Recomputed after
//! every change and never stored.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::ops::Index;

use crate::models::amount::finite_or_zero;
use crate::models::{Budget, Category, Group};

/// Planned and actual totals for one group
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GroupTotals {
    pub planned: f64,
    pub actual: f64,
}

impl GroupTotals {
    /// Planned minus actual; negative when the group ran over plan
    pub fn variance(&self) -> f64 {
        self.planned - self.actual
    }

    pub fn is_over_plan(&self) -> bool {
        self.actual > self.planned
    }
}

/// Aggregates derived from the categories and income
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(serialize_with = "serialize_groups")]
    groups: [GroupTotals; 3],
    pub income: f64,
    pub total_planned: f64,
    pub total_actual: f64,
    /// `income - total_actual`; negative means overspent
    pub remaining: f64,
}

impl Summary {
    /// Sum every category into its group and derive the totals
    ///
    /// Categories whose group is not one of the known buckets are skipped.
    pub fn derive(categories: &[Category], income: f64) -> Self {
        let mut groups = [GroupTotals::default(); 3];

        for category in categories {
            let Some(group) = category.known_group() else {
                continue;
            };
            let totals = &mut groups[group.index()];
            totals.planned += finite_or_zero(category.planned);
            totals.actual += finite_or_zero(category.actual);
        }

        let total_planned = groups.iter().map(|g| g.planned).sum();
        let total_actual: f64 = groups.iter().map(|g| g.actual).sum();

        Self {
            groups,
            income,
            total_planned,
            total_actual,
            remaining: income - total_actual,
        }
    }

    pub fn for_budget(budget: &Budget) -> Self {
        Self::derive(&budget.categories, budget.income)
    }

    pub fn group(&self, group: Group) -> GroupTotals {
        self.groups[group.index()]
    }

    /// Totals for every group in chart order
    pub fn groups(&self) -> impl Iterator<Item = (Group, GroupTotals)> + '_ {
        Group::ALL.into_iter().map(move |g| (g, self.group(g)))
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }

    /// Savings actual as a whole-number percentage of income, halves rounded up
    ///
    /// `None` when the ratio is not a finite number, which happens when income
    /// is zero. Never returns a negative zero.
    pub fn invested_percent(&self) -> Option<f64> {
        let ratio = self.group(Group::Savings).actual / self.income;
        if ratio.is_finite() {
            Some((ratio * 100.0 + 0.5).floor() + 0.0)
        } else {
            None
        }
    }
}

impl Index<Group> for Summary {
    type Output = GroupTotals;

    fn index(&self, group: Group) -> &Self::Output {
        &self.groups[group.index()]
    }
}

fn serialize_groups<S>(groups: &[GroupTotals; 3], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(groups.len()))?;
    for group in Group::ALL {
        map.serialize_entry(group.name(), &groups[group.index()])?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, GroupTag};

    fn cat(id: u64, group: impl Into<GroupTag>, planned: f64, actual: f64) -> Category {
        Category::new(CategoryId::new(id), group, format!("cat {}", id), planned, actual)
    }

    #[test]
    fn test_scenario_from_three_groups() {
        let categories = vec![
            cat(1, Group::Needs, 1000.0, 1000.0),
            cat(2, Group::Savings, 400.0, 400.0),
            cat(3, Group::Wants, 100.0, 120.0),
        ];
        let summary = Summary::derive(&categories, 3000.0);

        assert_eq!(summary.total_actual, 1520.0);
        assert_eq!(summary.remaining, 1480.0);
        assert_eq!(summary[Group::Needs].actual, 1000.0);
        assert_eq!(summary.group(Group::Wants).planned, 100.0);
        assert!(!summary.is_overspent());
    }

    #[test]
    fn test_default_budget_summary() {
        let summary = Summary::for_budget(&Budget::default());
        assert_eq!(summary.group(Group::Needs).planned, 1450.0);
        assert_eq!(summary.group(Group::Needs).actual, 1430.0);
        assert_eq!(summary.group(Group::Savings).actual, 600.0);
        assert_eq!(summary.group(Group::Wants).actual, 120.0);
        assert_eq!(summary.total_actual, 2150.0);
        assert_eq!(summary.total_planned, 2150.0);
        assert_eq!(summary.remaining, 850.0);
        assert_eq!(summary.invested_percent(), Some(20.0));
    }

    #[test]
    fn test_total_matches_known_groups_only() {
        let categories = vec![
            cat(1, Group::Needs, 0.0, 10.0),
            cat(2, GroupTag::Unknown("Holidays".into()), 0.0, 500.0),
            cat(3, Group::Wants, 0.0, 5.5),
            cat(4, Group::Savings, 0.0, 2.0),
        ];
        let summary = Summary::derive(&categories, 100.0);

        let expected: f64 = categories
            .iter()
            .filter(|c| c.known_group().is_some())
            .map(|c| c.actual)
            .sum();
        assert_eq!(summary.total_actual, expected);
        assert_eq!(summary.total_actual, 17.5);
    }

    #[test]
    fn test_negative_remaining() {
        let categories = vec![cat(1, Group::Needs, 0.0, 3500.0)];
        let summary = Summary::derive(&categories, 3000.0);
        assert_eq!(summary.remaining, -500.0);
        assert!(summary.is_overspent());
    }

    #[test]
    fn test_non_finite_amounts_count_as_zero() {
        let categories = vec![
            cat(1, Group::Needs, f64::NAN, f64::INFINITY),
            cat(2, Group::Needs, 10.0, 20.0),
        ];
        let summary = Summary::derive(&categories, 100.0);
        assert_eq!(summary.group(Group::Needs).planned, 10.0);
        assert_eq!(summary.group(Group::Needs).actual, 20.0);
    }

    #[test]
    fn test_empty_list() {
        let summary = Summary::derive(&[], 1200.0);
        assert_eq!(summary.total_actual, 0.0);
        assert_eq!(summary.remaining, 1200.0);
        assert_eq!(summary.invested_percent(), Some(0.0));
    }

    #[test]
    fn test_invested_percent_with_zero_income() {
        let categories = vec![cat(1, Group::Savings, 0.0, 400.0)];
        assert_eq!(Summary::derive(&categories, 0.0).invested_percent(), None);
        assert_eq!(Summary::derive(&[], 0.0).invested_percent(), None);
    }

    #[test]
    fn test_invested_percent_rounds_half_up() {
        let up = Summary::derive(&[cat(1, Group::Savings, 0.0, 12.5)], 100.0);
        assert_eq!(up.invested_percent(), Some(13.0));

        let down = Summary::derive(&[cat(1, Group::Savings, 0.0, -12.5)], 100.0);
        assert_eq!(down.invested_percent(), Some(-12.0));
    }

    #[test]
    fn test_invested_percent_never_negative_zero() {
        let summary = Summary::derive(&[cat(1, Group::Savings, 0.0, 0.0)], -100.0);
        let percent = summary.invested_percent().unwrap();
        assert_eq!(percent, 0.0);
        assert!(percent.is_sign_positive());

        let tiny = Summary::derive(&[cat(1, Group::Savings, 0.0, -0.1)], 100.0);
        assert!(tiny.invested_percent().unwrap().is_sign_positive());
    }

    #[test]
    fn test_variance() {
        let totals = GroupTotals {
            planned: 100.0,
            actual: 120.0,
        };
        assert_eq!(totals.variance(), -20.0);
        assert!(totals.is_over_plan());
    }

    #[test]
    fn test_serializes_groups_by_name() {
        let summary = Summary::for_budget(&Budget::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["groups"]["Savings"]["actual"], 600.0);
        assert_eq!(json["remaining"], 850.0);
    }
}
