//! Paired planned/actual bars
//!
//! Both bars of a pair share one scale: the larger of the two values, but never
//! less than [`BAR_FLOOR`], so small amounts stay visible.

use crate::models::Group;
use crate::services::Summary;

/// Minimum scale for a bar pair
pub const BAR_FLOOR: f64 = 100.0;

/// Planned and actual bars for one group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedBars {
    pub planned: f64,
    pub actual: f64,
    pub scale: f64,
}

impl PairedBars {
    pub fn new(planned: f64, actual: f64) -> Self {
        let scale = [planned, actual, BAR_FLOOR]
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(BAR_FLOOR, f64::max);
        Self {
            planned,
            actual,
            scale,
        }
    }

    pub fn planned_ratio(&self) -> f64 {
        ratio(self.planned, self.scale)
    }

    pub fn actual_ratio(&self) -> f64 {
        ratio(self.actual, self.scale)
    }

    /// Filled cell counts for a bar `width` cells wide
    pub fn cells(&self, width: u16) -> (u16, u16) {
        (
            fill(self.planned_ratio(), width),
            fill(self.actual_ratio(), width),
        )
    }
}

/// One bar pair per group, in chart order
pub fn group_bars(summary: &Summary) -> Vec<(Group, PairedBars)> {
    summary
        .groups()
        .map(|(group, totals)| (group, PairedBars::new(totals.planned, totals.actual)))
        .collect()
}

fn ratio(value: f64, scale: f64) -> f64 {
    if !value.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    (value / scale).clamp(0.0, 1.0)
}

fn fill(ratio: f64, width: u16) -> u16 {
    (ratio * f64::from(width)).round() as u16
}
