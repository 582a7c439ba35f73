use glam::IVec2;

use super::{Rasterize, Shape, ShapeKind};
use crate::defaults::{CIRCLE_FILL_INSET, CIRCLE_RING_TOLERANCE};
use crate::errors::{Result, check_anchor, check_size};
use crate::sink::CanvasSink;

/// A circle drawn on cells twice as tall as they are wide.
///
/// Columns are sampled at half scale, so the circle spans `4 * radius + 1`
/// columns and `2 * radius + 1` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleShape {
    pub anchor: IVec2,
    pub radius: i32,
}

impl CircleShape {
    pub fn new(anchor: IVec2, radius: i32) -> Result<Self> {
        let circle = Self { anchor, radius };
        circle.validate()?;
        Ok(circle)
    }

    /// Distance of the cell at `(dx, dy)` from the centre, halving the column
    /// offset with integer division.
    pub fn distance(dx: i32, dy: i32) -> f64 {
        let half = dx / 2;
        f64::from(half * half + dy * dy).sqrt()
    }

    /// Whether the offset lies on the ring (ignoring column parity)
    pub fn on_ring(&self, dx: i32, dy: i32) -> bool {
        (Self::distance(dx, dy) - f64::from(self.radius)).abs() < CIRCLE_RING_TOLERANCE
    }

    /// Whether the offset lies strictly inside the ring
    pub fn inside(&self, dx: i32, dy: i32) -> bool {
        Self::distance(dx, dy) < f64::from(self.radius) - CIRCLE_FILL_INSET
    }
}

impl Shape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn anchor(&self) -> IVec2 {
        self.anchor
    }

    fn validate(&self) -> Result<()> {
        check_size(ShapeKind::Circle, "radius", self.radius)?;
        check_anchor(ShapeKind::Circle, self.anchor, self.reach())
    }
}

impl Rasterize for CircleShape {
    fn reach(&self) -> i32 {
        2 * self.radius
    }

    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let r = self.radius;
        for dy in -r..=r {
            for dx in (-2 * r..=2 * r).step_by(2) {
                if self.on_ring(dx, dy) {
                    sink.set_cell(self.anchor + IVec2::new(dx, dy), glyph);
                }
            }
        }
    }

    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let r = self.radius;
        for dy in -r..=r {
            for dx in -2 * r..=2 * r {
                if self.inside(dx, dy) {
                    sink.set_cell(self.anchor + IVec2::new(dx, dy), glyph);
                }
            }
        }
    }
}
