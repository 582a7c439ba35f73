use glam::IVec2;

use super::{Rasterize, Shape, ShapeKind, quad};
use crate::defaults::{STAR_NARROW_STEP, STAR_TUNING_MODULUS, STAR_TUNING_OFFSET, STAR_WIDE_STEP};
use crate::errors::{Result, check_anchor, check_size};
use crate::sink::CanvasSink;

/// A four-pointed star centred on its anchor.
///
/// The vertical points reach `size` rows above and below the anchor, the
/// horizontal points about `2 * size` columns to either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarShape {
    pub anchor: IVec2,
    pub size: i32,
}

impl StarShape {
    pub fn new(anchor: IVec2, size: i32) -> Result<Self> {
        let star = Self { anchor, size };
        star.validate()?;
        Ok(star)
    }

    /// Columns skipped between the inner slopes and the outer arms
    pub fn arm_step(&self) -> i32 {
        if (self.size - STAR_TUNING_OFFSET) % STAR_TUNING_MODULUS == 0 {
            STAR_WIDE_STEP
        } else {
            STAR_NARROW_STEP
        }
    }
}

impl Shape for StarShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Star
    }

    fn anchor(&self) -> IVec2 {
        self.anchor
    }

    fn validate(&self) -> Result<()> {
        check_size(ShapeKind::Star, "size", self.size)?;
        check_anchor(ShapeKind::Star, self.anchor, self.reach())
    }
}

impl Rasterize for StarShape {
    fn reach(&self) -> i32 {
        2 * self.size
    }

    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let mut x = 0;
        let mut y = self.size;

        // Steep slopes from the vertical points
        while y > x / 2 {
            quad(sink, self.anchor, IVec2::new(x, y), glyph);
            x += 2;
            y -= 2;
        }

        if y < x / 2 {
            quad(sink, self.anchor, IVec2::new(x, y + 1), glyph);
            x += self.arm_step();
        }

        // Shallow arms out to the horizontal points
        while x <= 2 * self.size {
            quad(sink, self.anchor, IVec2::new(x, y), glyph);
            y -= 1;
            x += 4;
        }
    }

    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink) {
        let mut x = 0;
        let mut y = self.size;

        while y >= x / 2 {
            for i in 0..x {
                quad(sink, self.anchor, IVec2::new(i, y), glyph);
            }
            x += 1;
            y -= 1;
        }

        // Solid core between the slopes and the arms
        if y < x / 2 {
            for i in 0..x {
                for j in 0..=y {
                    quad(sink, self.anchor, IVec2::new(i, j), glyph);
                }
            }
        }

        while x < 2 * self.size {
            for i in 0..=x {
                quad(sink, self.anchor, IVec2::new(i, y), glyph);
            }
            x += 4;
            y -= 1;
        }
    }
}
