//! Category identifiers
//!
//! Ids are plain integers on disk so existing stored arrays keep loading. New
//! ids come from the wall clock in milliseconds and are bumped past the largest
//! id already in use.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a category record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Generate an id that does not collide with any of `existing`
    pub fn generate<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = CategoryId>,
    {
        let taken: HashSet<u64> = existing.into_iter().map(|id| id.0).collect();
        let now = Utc::now().timestamp_millis().max(0) as u64;
        match taken.iter().max() {
            Some(&max) if max >= now => match max.checked_add(1) {
                Some(next) => Self(next),
                None => Self::lowest_free(&taken),
            },
            _ => Self(now),
        }
    }

    /// Smallest value not in `taken`
    fn lowest_free(taken: &HashSet<u64>) -> Self {
        let mut candidate = 0;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        Self(candidate)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for CategoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_clock() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = CategoryId::generate([CategoryId::new(1), CategoryId::new(12)]);
        assert!(id.value() >= before);
    }

    #[test]
    fn test_generate_skips_past_future_ids() {
        let far = CategoryId::new(u64::MAX / 2);
        let id = CategoryId::generate([far]);
        assert_eq!(id.value(), far.value() + 1);
    }

    #[test]
    fn test_generate_after_max_id_takes_lowest_free() {
        let id = CategoryId::generate([CategoryId::new(u64::MAX)]);
        assert_eq!(id, CategoryId::new(0));

        let id = CategoryId::generate([
            CategoryId::new(u64::MAX),
            CategoryId::new(0),
            CategoryId::new(1),
            CategoryId::new(3),
        ]);
        assert_eq!(id, CategoryId::new(2));
    }

    #[test]
    fn test_generate_twice_is_unique() {
        let first = CategoryId::generate([]);
        let second = CategoryId::generate([first]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("12".parse::<CategoryId>().unwrap(), CategoryId::new(12));
        assert_eq!("#3".parse::<CategoryId>().unwrap(), CategoryId::new(3));
        assert!("abc".parse::<CategoryId>().is_err());
        assert_eq!(CategoryId::new(8).to_string(), "8");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&CategoryId::new(1700000000000)).unwrap();
        assert_eq!(json, "1700000000000");
        let id: CategoryId = serde_json::from_str("9").unwrap();
        assert_eq!(id, CategoryId::new(9));
    }
}
