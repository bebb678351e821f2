//! Display formatting for terminal output
//!
//! Plain-text renderings of the dashboard and category tables for the
//! command line.

pub mod category;
pub mod summary;

pub use category::{format_category_details, format_category_list, format_group_tables};
pub use summary::{format_dashboard, format_invested, format_overview, render_bar, EMPTY_CHART};
