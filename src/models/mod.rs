//! Core data models
//!
//! Categories grouped into three fixed buckets, the display currency, and the
//! budget record that ties them to an income figure.

pub mod amount;
pub mod budget;
pub mod category;
pub mod currency;
pub mod group;
pub mod ids;

pub use amount::parse_or_zero;
pub use budget::{default_categories, Budget, DEFAULT_INCOME};
pub use category::{Category, CategoryEditError, CategoryField, PLACEHOLDER_NAME};
pub use currency::Currency;
pub use group::{Group, GroupTag, Rgb, UNKNOWN_GROUP_COLOR};
pub use ids::CategoryId;
