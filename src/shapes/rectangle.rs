use glam::IVec2;

use super::{Rasterize, Shape, ShapeKind};
use crate::errors::{Result, check_anchor, check_size};
use crate::sink::CanvasSink;

/// An axis-aligned rectangle centred horizontally on its anchor.
///
/// Columns run from `-half_width` to `half_width`; rows from `-height / 2` to
/// `height - height / 2`, so odd heights put the extra row below the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleShape {
    pub anchor: IVec2,
    pub half_width: i32,
    pub height: i32,
}

impl RectangleShape {
    pub fn new(anchor: IVec2, half_width: i32, height: i32) -> Result<Self> {
        let rect = Self {
            anchor,
            half_width,
            height,
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Row offset of the top edge
    pub fn top(&self) -> i32 {
        -(self.height / 2)
    }

    /// Row offset of the bottom edge
    pub fn bottom(&self) -> i32 {
        self.height - self.height / 2
    }
}

impl Shape for RectangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn anchor(&self) -> IVec2 {
        self.anchor
    }

    fn validate(&self) -> Result<()> {
        check_size(ShapeKind::Rectangle, "half width", self.half_width)?;
        check_size(ShapeKind::Rectangle, "height", self.height)?;
        check_anchor(ShapeKind::Rectangle, self.anchor, self.reach())
    }
}

impl Rasterize for RectangleShape {
    fn reach(&self) -> i32 {
        self.half_width.max(self.height)
    }

    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let a = self.half_width;
        let (top, bottom) = (self.top(), self.bottom());

        // Horizontal edges take every other column
        for dx in (-a..=a).step_by(2) {
            sink.set_cell(self.anchor + IVec2::new(dx, top), glyph);
            sink.set_cell(self.anchor + IVec2::new(dx, bottom), glyph);
        }
        for dy in top..=bottom {
            sink.set_cell(self.anchor + IVec2::new(a, dy), glyph);
            sink.set_cell(self.anchor + IVec2::new(-a, dy), glyph);
        }
    }

    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let a = self.half_width;
        for dx in -a + 1..a {
            for dy in self.top() + 1..self.bottom() {
                sink.set_cell(self.anchor + IVec2::new(dx, dy), glyph);
                sink.set_cell(self.anchor + IVec2::new(-dx, dy), glyph);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Canvas, CellWrite};
    use glam::ivec2;

    #[test]
    fn edges_split_height() {
        let even = RectangleShape::new(ivec2(0, 0), 3, 4).unwrap();
        assert_eq!((even.top(), even.bottom()), (-2, 2));

        let odd = RectangleShape::new(ivec2(0, 0), 3, 5).unwrap();
        assert_eq!((odd.top(), odd.bottom()), (-2, 3));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(RectangleShape::new(ivec2(0, 0), 0, 4).is_err());
        assert!(RectangleShape::new(ivec2(0, 0), 3, 0).is_err());
        assert!(RectangleShape::new(ivec2(0, 0), 3, -1).is_err());
    }

    #[test]
    fn outline_emission_order() {
        let rect = RectangleShape::new(ivec2(0, 0), 1, 1).unwrap();
        let mut writes: Vec<CellWrite> = Vec::new();
        rect.outline('o', &mut writes);
        let cells: Vec<_> = writes.iter().map(|w| (w.cell.x, w.cell.y)).collect();
        assert_eq!(
            cells,
            vec![(-1, 0), (-1, 1), (1, 0), (1, 1), (1, 0), (-1, 0), (1, 1), (-1, 1)]
        );
    }

    #[test]
    fn fill_is_open_interior() {
        let rect = RectangleShape::new(ivec2(5, 5), 3, 4).unwrap();
        let mut canvas = Canvas::new();
        rect.fill('.', &mut canvas);
        assert_eq!(canvas.len(), 5 * 3);
        for (cell, _) in canvas.cells() {
            assert!((3..=7).contains(&cell.x), "column {} outside interior", cell.x);
            assert!((4..=6).contains(&cell.y), "row {} outside interior", cell.y);
        }
    }

    #[test]
    fn thin_rectangle_has_no_interior() {
        let rect = RectangleShape::new(ivec2(0, 0), 1, 1).unwrap();
        let mut writes: Vec<CellWrite> = Vec::new();
        rect.fill('.', &mut writes);
        assert!(writes.is_empty());
    }
}
