//! Budget groups
//!
//! Every category belongs to one of three fixed buckets. Records read from the
//! store may carry a group name we do not know; those keep their raw tag and are
//! left out of every aggregate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A plain 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex representation, e.g. `#60a5fa`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour used for records whose group is not recognised
pub const UNKNOWN_GROUP_COLOR: Rgb = Rgb::new(0x9c, 0xa3, 0xaf);

/// One of the three fixed budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    Needs,
    Wants,
    Savings,
}

impl Group {
    /// All groups in chart order
    pub const ALL: [Group; 3] = [Group::Needs, Group::Wants, Group::Savings];

    /// Order of the editable group sections
    pub const SECTION_ORDER: [Group; 3] = [Group::Needs, Group::Savings, Group::Wants];

    /// Name as persisted in category records
    pub fn name(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }

    /// Heading shown above the group's section
    pub fn title(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Investments",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Self::Needs => Rgb::new(0x60, 0xa5, 0xfa),
            Self::Wants => Rgb::new(0xa7, 0x8b, 0xfa),
            Self::Savings => Rgb::new(0x34, 0xd3, 0x99),
        }
    }

    /// Stable index into per-group arrays
    pub const fn index(&self) -> usize {
        match self {
            Self::Needs => 0,
            Self::Wants => 1,
            Self::Savings => 2,
        }
    }

    /// Exact match against the persisted name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when user input does not name a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParseError(pub String);

impl fmt::Display for GroupParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown group '{}' (expected needs, wants or savings)",
            self.0
        )
    }
}

impl std::error::Error for GroupParseError {}

impl FromStr for Group {
    type Err = GroupParseError;

    /// Lenient parse for user input: case-insensitive, accepts section titles
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" | "need" => Ok(Self::Needs),
            "wants" | "want" => Ok(Self::Wants),
            "savings" | "saving" | "investments" | "investment" => Ok(Self::Savings),
            _ => Err(GroupParseError(s.to_string())),
        }
    }
}

/// The group carried by a stored category record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupTag {
    Known(Group),
    Unknown(String),
}

impl GroupTag {
    /// The known group, if any
    pub fn group(&self) -> Option<Group> {
        match self {
            Self::Known(group) => Some(*group),
            Self::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(group) => group.name(),
            Self::Unknown(raw) => raw,
        }
    }

    pub fn color(&self) -> Rgb {
        self.group().map(|g| g.color()).unwrap_or(UNKNOWN_GROUP_COLOR)
    }
}

impl Default for GroupTag {
    fn default() -> Self {
        GroupTag::Unknown(String::new())
    }
}

impl From<Group> for GroupTag {
    fn from(group: Group) -> Self {
        Self::Known(group)
    }
}

impl From<String> for GroupTag {
    fn from(raw: String) -> Self {
        match Group::from_name(&raw) {
            Some(group) => Self::Known(group),
            None => Self::Unknown(raw),
        }
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for GroupTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GroupTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(raw)) => GroupTag::from(raw),
            Some(other) => GroupTag::Unknown(other.to_string()),
            None => GroupTag::Unknown(String::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_titles() {
        assert_eq!(Group::Needs.name(), "Needs");
        assert_eq!(Group::Savings.name(), "Savings");
        assert_eq!(Group::Savings.title(), "Investments");
        assert_eq!(Group::Wants.title(), "Wants");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Group::Needs.color().hex(), "#60a5fa");
        assert_eq!(Group::Savings.color().hex(), "#34d399");
        assert_eq!(Group::Wants.color().hex(), "#a78bfa");
        assert_eq!(GroupTag::Unknown("Misc".into()).color().hex(), "#9ca3af");
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 3];
        for group in Group::ALL {
            assert!(!seen[group.index()]);
            seen[group.index()] = true;
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("needs".parse::<Group>().unwrap(), Group::Needs);
        assert_eq!(" WANTS ".parse::<Group>().unwrap(), Group::Wants);
        assert_eq!("Investments".parse::<Group>().unwrap(), Group::Savings);
        assert!("bills".parse::<Group>().is_err());
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Group::from_name("Needs"), Some(Group::Needs));
        assert_eq!(Group::from_name("needs"), None);
    }

    #[test]
    fn test_tag_serde() {
        let tag: GroupTag = serde_json::from_str(r#""Savings""#).unwrap();
        assert_eq!(tag, GroupTag::Known(Group::Savings));

        let tag: GroupTag = serde_json::from_str(r#""Holidays""#).unwrap();
        assert_eq!(tag, GroupTag::Unknown("Holidays".into()));
        assert_eq!(serde_json::to_string(&tag).unwrap(), r#""Holidays""#);

        let tag: GroupTag = serde_json::from_str("7").unwrap();
        assert_eq!(tag.group(), None);
    }
}
