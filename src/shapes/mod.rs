//! Shape types for cell rasterization
//!
//! Each shape is its own type that knows how to:
//! - Validate its parameters
//! - Emit its outline cells
//! - Emit its interior cells
//!
//! `ShapeEnum` closes the set of shapes; calls on it dispatch statically to
//! the variant's `Shape` impl.

mod circle;
mod heart;
mod rectangle;
mod star;
mod triangle;

pub use circle::CircleShape;
pub use heart::HeartShape;
pub use rectangle::RectangleShape;
pub use star::StarShape;
pub use triangle::{TriangleGeometry, TriangleShape};

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::errors::Result;
use crate::sink::CanvasSink;

/// Common behavior for all shapes.
///
/// Emitting cells is not part of the public trait: the only way to draw a
/// shape is through [`render`](crate::render::render) and the types built on
/// it, which validate first.
///
/// ```compile_fail
/// use celldraw::{CellWrite, TriangleShape};
/// use glam::ivec2;
///
/// let tri = TriangleShape { anchor: ivec2(0, 0), left: 1, right: 1, base: 5 };
/// let mut writes: Vec<CellWrite> = Vec::new();
/// tri.outline('o', &mut writes);
/// ```
#[enum_dispatch]
pub trait Shape {
    /// Which family this shape belongs to
    fn kind(&self) -> ShapeKind;

    /// The grid position the shape's geometry is measured from
    fn anchor(&self) -> IVec2;

    /// Reject parameters the rasterizers cannot handle
    fn validate(&self) -> Result<()>;
}

/// Cell emission, reachable from outside the crate only through `render`,
/// which validates first.
#[enum_dispatch]
pub(crate) trait Rasterize {
    /// Largest distance from the anchor, on either axis, of any emitted cell.
    ///
    /// Only meaningful once the sizes have passed `check_size`.
    fn reach(&self) -> i32;

    /// Emit the boundary cells. Assumes `validate` succeeded.
    fn outline(&self, glyph: char, sink: &mut dyn CanvasSink);

    /// Emit the interior cells. Assumes `validate` succeeded.
    fn fill(&self, glyph: char, sink: &mut dyn CanvasSink);
}

/// Discriminant of a shape, used in errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Heart,
    Star,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape, Rasterize)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeEnum {
    Circle(CircleShape),
    Rectangle(RectangleShape),
    Triangle(TriangleShape),
    Heart(HeartShape),
    Star(StarShape),
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Write the four mirror images of `offset` around `anchor`
fn quad(sink: &mut dyn CanvasSink, anchor: IVec2, offset: IVec2, glyph: char) {
    let (x, y) = (offset.x, offset.y);
    sink.set_cell(anchor + IVec2::new(x, y), glyph);
    sink.set_cell(anchor + IVec2::new(-x, y), glyph);
    sink.set_cell(anchor + IVec2::new(x, -y), glyph);
    sink.set_cell(anchor + IVec2::new(-x, -y), glyph);
}
