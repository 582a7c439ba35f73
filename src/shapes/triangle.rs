use glam::{DVec2, IVec2};

use super::{Rasterize, Shape, ShapeKind};
use crate::errors::{Result, ShapeError, check_anchor, check_size};
use crate::line::{draw_line, x_at_row};
use crate::sink::CanvasSink;

/// A triangle given by its three side lengths.
///
/// The base runs right from the anchor along its row; `left` joins the
/// anchor to the apex and `right` joins the far base corner to the apex. The
/// apex sits above the base (smaller row numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleShape {
    pub anchor: IVec2,
    pub left: i32,
    pub right: i32,
    pub base: i32,
}

/// Derived placement of a triangle's apex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    /// Perpendicular distance from the base to the apex
    pub height: f64,
    /// Horizontal distance from the anchor to the foot of the height
    pub offset: f64,
    /// Apex before truncation to the grid
    pub apex_exact: DVec2,
    /// Apex cell, each coordinate truncated toward zero
    pub apex: IVec2,
}

impl TriangleShape {
    pub fn new(anchor: IVec2, left: i32, right: i32, base: i32) -> Result<Self> {
        let triangle = Self {
            anchor,
            left,
            right,
            base,
        };
        triangle.validate()?;
        Ok(triangle)
    }

    /// Far end of the base
    pub fn base_end(&self) -> IVec2 {
        self.anchor + IVec2::new(self.base, 0)
    }

    /// Locate the apex using Heron's formula for the height and the law of
    /// cosines for its horizontal offset.
    pub fn geometry(&self) -> TriangleGeometry {
        let (a, d, c) = (
            f64::from(self.left),
            f64::from(self.right),
            f64::from(self.base),
        );
        let p = (a + d + c) / 2.0;
        let area = (p * (p - a) * (p - d) * (p - c)).sqrt();
        let height = 2.0 * area / c;
        let offset = (a * a - d * d + c * c) / (2.0 * c);

        let apex_exact = self.anchor.as_dvec2() + DVec2::new(offset, -height);
        TriangleGeometry {
            height,
            offset,
            apex_exact,
            apex: IVec2::new(apex_exact.x as i32, apex_exact.y as i32),
        }
    }
}

impl Shape for TriangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn anchor(&self) -> IVec2 {
        self.anchor
    }

    fn validate(&self) -> Result<()> {
        check_size(ShapeKind::Triangle, "left side", self.left)?;
        check_size(ShapeKind::Triangle, "right side", self.right)?;
        check_size(ShapeKind::Triangle, "base", self.base)?;

        let (a, d, c) = (self.left, self.right, self.base);
        if a + d <= c || a + c <= d || d + c <= a {
            return Err(ShapeError::DegenerateTriangle {
                left: a,
                right: d,
                base: c,
            });
        }
        check_anchor(ShapeKind::Triangle, self.anchor, self.reach())
    }
}

impl Rasterize for TriangleShape {
    fn reach(&self) -> i32 {
        self.left.max(self.right).max(self.base)
    }

    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let apex = self.geometry().apex;
        for dx in 0..=self.base {
            sink.set_cell(self.anchor + IVec2::new(dx, 0), glyph);
        }
        draw_line(self.anchor, apex, glyph, sink);
        draw_line(self.base_end(), apex, glyph, sink);
    }

    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let apex = self.geometry().apex;
        let base_end = self.base_end();
        for y in (apex.y..self.anchor.y).rev() {
            let left = x_at_row(self.anchor, apex, y);
            let right = x_at_row(base_end, apex, y);
            for x in left + 1..right {
                sink.set_cell(IVec2::new(x, y), glyph);
            }
        }
    }
}
