use glam::IVec2;

use super::{Rasterize, Shape, ShapeKind};
use crate::errors::{Result, check_anchor, check_size};
use crate::sink::CanvasSink;

/// A heart whose lobes meet at the anchor's column.
///
/// The lobes occupy rows `anchor.y - 2 * size + 1` to `anchor.y - size`, the
/// straight sides continue down to the anchor row, and the lower point ends
/// `2 * size + 1` rows below it. The heart is `8 * size + 1` columns wide.
///
/// A fill also marks the two lobe tops and the cleft centre `(0, -size)` so
/// that an outline followed by a fill leaves no gap between the lobes. All
/// three use the glyph of the fill call, not a fixed `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartShape {
    pub anchor: IVec2,
    pub size: i32,
}

impl HeartShape {
    pub fn new(anchor: IVec2, size: i32) -> Result<Self> {
        let heart = Self { anchor, size };
        heart.validate()?;
        Ok(heart)
    }

    fn put(&self, sink: &mut dyn CanvasSink, dx: i32, dy: i32, glyph: char) {
        sink.set_cell(self.anchor + IVec2::new(dx, dy), glyph);
    }
}

impl Shape for HeartShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Heart
    }

    fn anchor(&self) -> IVec2 {
        self.anchor
    }

    fn validate(&self) -> Result<()> {
        check_size(ShapeKind::Heart, "size", self.size)?;
        check_anchor(ShapeKind::Heart, self.anchor, self.reach())
    }
}

impl Rasterize for HeartShape {
    fn reach(&self) -> i32 {
        4 * self.size
    }

    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let a = self.size;
        let mut x = 0;

        // Lobes: inner and outer slopes of both arcs, widening upward
        for y in a..2 * a {
            self.put(sink, -x, -y, glyph);
            self.put(sink, x, -y, glyph);
            self.put(sink, -4 * a + x, -y, glyph);
            self.put(sink, 4 * a - x, -y, glyph);
            x += 2;
        }

        // Lobe tops
        self.put(sink, -x, -2 * a + 1, glyph);
        self.put(sink, x, -2 * a + 1, glyph);

        for i in 0..=a {
            self.put(sink, -4 * a, -a + i, glyph);
            self.put(sink, 4 * a, -a + i, glyph);
        }

        // Lower point
        for y in 1..=2 * a + 1 {
            self.put(sink, -2 * a - x, y, glyph);
            self.put(sink, 2 * a + x, y, glyph);
            x -= 2;
        }
    }

    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let a = self.size;
        let mut x = 0;

        for y in a..2 * a {
            for i in x + 4..4 * a - x {
                self.put(sink, -i, -y, glyph);
                self.put(sink, i, -y, glyph);
                self.put(sink, -4 * a + i, -y, glyph);
                self.put(sink, 4 * a - i, -y, glyph);
            }
            x += 2;
        }

        self.put(sink, -x, -2 * a + 1, glyph);
        self.put(sink, x, -2 * a + 1, glyph);

        // Body between the straight sides
        for i in 0..=a {
            for j in 1..4 * a + 2 {
                self.put(sink, -4 * a + j, -a + i, glyph);
                self.put(sink, 4 * a - j, -a + i, glyph);
            }
        }

        for y in 1..=2 * a + 1 {
            for i in 0..2 * x {
                self.put(sink, -i, y, glyph);
                self.put(sink, i, y, glyph);
            }
            x -= 1;
        }

        // Closes the cleft between the lobes, in the fill's own glyph
        self.put(sink, 0, -a, glyph);
    }
}
