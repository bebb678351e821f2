//! Donut chart geometry
//!
//! Angles are in radians in screen orientation (y grows downwards), so
//! increasing angles run clockwise. The first slice starts at twelve o'clock.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::models::Rgb;

/// Where the first slice begins
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// Radius of the hole as a fraction of the outer radius
pub const INNER_RADIUS: f64 = 0.65;

/// One input value for the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64, color: Rgb) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }

    /// Negative and non-finite values do not take up any of the circle
    fn weight(&self) -> f64 {
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            0.0
        }
    }
}

/// A slice placed on the circle
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
    pub start: f64,
    pub sweep: f64,
}

impl Arc {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    /// Fraction of the full circle, 0.0 to 1.0
    pub fn share(&self) -> f64 {
        self.sweep / TAU
    }

    pub fn start_point(&self) -> (f64, f64) {
        (self.start.cos(), self.start.sin())
    }

    pub fn end_point(&self) -> (f64, f64) {
        (self.end().cos(), self.end().sin())
    }

    pub fn large_arc(&self) -> bool {
        self.sweep > PI
    }

    /// SVG path for this wedge on the unit circle
    pub fn path(&self) -> String {
        let (x1, y1) = self.start_point();
        let (x2, y2) = self.end_point();
        format!(
            "M 0 0 L {} {} A 1 1 0 {} 1 {} {} Z",
            x1,
            y1,
            u8::from(self.large_arc()),
            x2,
            y2
        )
    }

    /// Whether a screen-space angle falls inside this wedge
    pub fn contains(&self, angle: f64) -> bool {
        if self.sweep <= 0.0 {
            return false;
        }
        let relative = (angle - self.start).rem_euclid(TAU);
        relative < self.sweep
    }
}

/// Computed chart: either empty, or arcs covering the full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Donut {
    pub total: f64,
    pub arcs: Vec<Arc>,
}

impl Donut {
    /// Lay the slices out in input order starting at [`START_ANGLE`]
    ///
    /// A zero total yields no arcs; callers render a placeholder instead.
    pub fn compute(slices: &[Slice]) -> Self {
        let total: f64 = slices.iter().map(Slice::weight).sum();
        if total <= 0.0 {
            return Self {
                total: 0.0,
                arcs: Vec::new(),
            };
        }

        let mut angle = START_ANGLE;
        let arcs = slices
            .iter()
            .map(|slice| {
                let sweep = slice.weight() / total * TAU;
                let arc = Arc {
                    label: slice.label.clone(),
                    value: slice.value,
                    color: slice.color,
                    start: angle,
                    sweep,
                };
                angle += sweep;
                arc
            })
            .collect();

        Self { total, arcs }
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The arc covering a screen-space angle
    pub fn arc_at(&self, angle: f64) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.contains(angle))
    }

    /// The arc under a point of the unit square, or `None` in the hole/outside
    pub fn arc_at_point(&self, x: f64, y: f64) -> Option<&Arc> {
        let radius = (x * x + y * y).sqrt();
        if !(INNER_RADIUS..=1.0).contains(&radius) {
            return None;
        }
        self.arc_at(y.atan2(x))
    }
}
