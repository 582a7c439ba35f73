//! Rasterize circles, rectangles, triangles, hearts and stars onto a
//! character grid, either as one-cell-thick outlines or as solid fills.
//!
//! ```
//! use celldraw::{CircleShape, RenderMode, rasterize};
//! use glam::ivec2;
//!
//! let circle = CircleShape::new(ivec2(0, 0), 2)?;
//! let canvas = rasterize(circle, RenderMode::Outline, 'o')?;
//! assert_eq!(canvas.get(ivec2(0, -2)), Some('o'));
//! # Ok::<(), celldraw::ShapeError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod figure;
pub mod line;
mod log;
pub mod render;
pub mod shapes;
pub mod sink;

pub use errors::{Result, ShapeError};
pub use figure::Figure;
pub use render::{Filler, Outliner, RenderMode, RenderState, render};
pub use shapes::{
    CircleShape, HeartShape, RectangleShape, Shape, ShapeEnum, ShapeKind, StarShape,
    TriangleGeometry, TriangleShape,
};
pub use sink::{Canvas, CanvasSink, CellWrite};

/// Render a single shape onto a fresh unbounded canvas.
pub fn rasterize(shape: impl Into<ShapeEnum>, mode: RenderMode, glyph: char) -> Result<Canvas> {
    let mut canvas = Canvas::new();
    render(&shape.into(), mode, glyph, &mut canvas)?;
    Ok(canvas)
}
