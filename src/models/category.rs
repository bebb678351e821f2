//! Category model
//!
//! A category is one row of the budget: a name inside a group with a planned
//! and an actual amount. Records are treated as values. An edit builds a new
//! record that replaces the old one in place.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::amount::{deserialize_amount, parse_or_zero};
use super::group::{Group, GroupTag};
use super::ids::CategoryId;

/// Name given to categories created with Add
pub const PLACEHOLDER_NAME: &str = "New Item";

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// The bucket this category is counted in
    #[serde(default)]
    pub group: GroupTag,

    /// Category name
    #[serde(default, deserialize_with = "deserialize_name")]
    pub name: String,

    /// Budgeted amount
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub planned: f64,

    /// Realized spend or contribution
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub actual: f64,
}

impl Category {
    /// Create a category
    pub fn new(
        id: CategoryId,
        group: impl Into<GroupTag>,
        name: impl Into<String>,
        planned: f64,
        actual: f64,
    ) -> Self {
        Self {
            id,
            group: group.into(),
            name: name.into(),
            planned,
            actual,
        }
    }

    /// Create the blank row appended by Add
    pub fn placeholder(id: CategoryId, group: Group) -> Self {
        Self::new(id, group, PLACEHOLDER_NAME, 0.0, 0.0)
    }

    /// The group this category counts towards, if it is a known one
    pub fn known_group(&self) -> Option<Group> {
        self.group.group()
    }

    pub fn is_in(&self, group: Group) -> bool {
        self.known_group() == Some(group)
    }

    /// Build a copy with one field replaced from user input
    ///
    /// Numeric fields go through [`parse_or_zero`]. A group value that does
    /// not name a known group is rejected.
    pub fn with_field(&self, field: CategoryField, value: &str) -> Result<Self, CategoryEditError> {
        let mut updated = self.clone();
        match field {
            CategoryField::Name => updated.name = value.to_string(),
            CategoryField::Planned => updated.planned = parse_or_zero(value),
            CategoryField::Actual => updated.actual = parse_or_zero(value),
            CategoryField::Group => {
                let group = value
                    .parse::<Group>()
                    .map_err(|_| CategoryEditError::UnknownGroup(value.to_string()))?;
                updated.group = GroupTag::Known(group);
            }
        }
        Ok(updated)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}

/// An editable field of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    Name,
    Planned,
    Actual,
    Group,
}

impl CategoryField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Planned => "planned",
            Self::Actual => "actual",
            Self::Group => "group",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Planned | Self::Actual)
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CategoryField {
    type Err = CategoryEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "planned" | "plan" => Ok(Self::Planned),
            "actual" => Ok(Self::Actual),
            "group" => Ok(Self::Group),
            _ => Err(CategoryEditError::UnknownField(s.to_string())),
        }
    }
}

/// Errors from building an edited category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEditError {
    UnknownField(String),
    UnknownGroup(String),
}

impl fmt::Display for CategoryEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(field) => write!(
                f,
                "Unknown field '{}' (expected name, planned, actual or group)",
                field
            ),
            Self::UnknownGroup(group) => write!(
                f,
                "Unknown group '{}' (expected needs, wants or savings)",
                group
            ),
        }
    }
}

impl std::error::Error for CategoryEditError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Category {
        Category::new(CategoryId::new(3), Group::Needs, "Groceries", 300.0, 280.0)
    }

    #[test]
    fn test_placeholder() {
        let cat = Category::placeholder(CategoryId::new(99), Group::Wants);
        assert_eq!(cat.name, "New Item");
        assert_eq!(cat.planned, 0.0);
        assert_eq!(cat.actual, 0.0);
        assert!(cat.is_in(Group::Wants));
    }

    #[test]
    fn test_with_field_numeric_coerces() {
        let cat = groceries();
        let updated = cat.with_field(CategoryField::Actual, "abc").unwrap();
        assert_eq!(updated.actual, 0.0);
        assert_eq!(updated.planned, 300.0);

        let updated = cat.with_field(CategoryField::Planned, "325.5").unwrap();
        assert_eq!(updated.planned, 325.5);
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let cat = groceries();
        let updated = cat.with_field(CategoryField::Name, "Food shop").unwrap();
        assert_eq!(updated.name, "Food shop");
        assert_eq!(cat.name, "Groceries");
        assert_eq!(updated.id, cat.id);
    }

    #[test]
    fn test_with_field_group() {
        let cat = groceries();
        let moved = cat.with_field(CategoryField::Group, "wants").unwrap();
        assert!(moved.is_in(Group::Wants));

        let err = cat.with_field(CategoryField::Group, "bills").unwrap_err();
        assert_eq!(err, CategoryEditError::UnknownGroup("bills".into()));
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Actual".parse::<CategoryField>().unwrap(), CategoryField::Actual);
        assert_eq!("plan".parse::<CategoryField>().unwrap(), CategoryField::Planned);
        assert!("colour".parse::<CategoryField>().is_err());
        assert!(CategoryField::Planned.is_numeric());
        assert!(!CategoryField::Name.is_numeric());
    }

    #[test]
    fn test_serialization_layout() {
        let json = serde_json::to_value(groceries()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "group": "Needs",
                "name": "Groceries",
                "planned": 300.0,
                "actual": 280.0
            })
        );
    }

    #[test]
    fn test_lenient_deserialization() {
        let cat: Category = serde_json::from_str(
            r#"{"id": 5, "group": "Other", "name": null, "planned": "x", "actual": "40"}"#,
        )
        .unwrap();
        assert_eq!(cat.known_group(), None);
        assert_eq!(cat.group.as_str(), "Other");
        assert_eq!(cat.name, "");
        assert_eq!(cat.planned, 0.0);
        assert_eq!(cat.actual, 40.0);

        let cat: Category = serde_json::from_str(r#"{"id": 6}"#).unwrap();
        assert_eq!(cat.known_group(), None);
        assert_eq!(cat.actual, 0.0);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<Category>(r#"{"name": "x"}"#).is_err());
    }
}
