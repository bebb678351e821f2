//! Chart geometry
//!
//! Pure layout for the two dashboard visualizations. Renderers in the TUI and
//! the text output only translate these numbers into cells.

pub mod bars;
pub mod donut;

pub use bars::{group_bars, PairedBars, BAR_FLOOR};
pub use donut::{Arc, Donut, Slice, INNER_RADIUS, START_ANGLE};

use crate::services::Summary;

/// Donut input: each group's actual total, in chart order
pub fn group_slices(summary: &Summary) -> Vec<Slice> {
    summary
        .groups()
        .map(|(group, totals)| Slice::new(group.name(), totals.actual, group.color()))
        .collect()
}

/// Donut of actual spending by group
pub fn spending_donut(summary: &Summary) -> Donut {
    Donut::compute(&group_slices(summary))
}
