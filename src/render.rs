//! Outline and fill rendering
//!
//! `Outliner` and `Filler` are immutable configurations (just a glyph). Every
//! call validates the shape first, so an invalid shape writes nothing, and
//! reports the annotation the render produced.

use crate::defaults;
use crate::errors::Result;
use crate::log::debug;
use crate::shapes::{Rasterize, Shape, ShapeEnum};
use crate::sink::CanvasSink;

/// Which set of cells a render emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// The one-cell-thick boundary
    #[default]
    Outline,
    /// The interior, excluding the boundary
    Fill,
}

/// Annotation left by the most recent render of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub glyph: char,
    pub mode: RenderMode,
}

impl RenderState {
    /// Whether the shape was last rendered as a solid fill
    pub fn filled(&self) -> bool {
        self.mode == RenderMode::Fill
    }
}

/// Render `shape` in `mode`, handing the annotation to `annotate` after
/// validation and before the first cell is written.
pub fn render_annotated(
    shape: &ShapeEnum,
    mode: RenderMode,
    glyph: char,
    sink: &mut dyn CanvasSink,
    annotate: impl FnOnce(RenderState),
) -> Result<RenderState> {
    shape.validate()?;
    let state = RenderState { glyph, mode };
    annotate(state);

    debug!(kind = %shape.kind(), ?mode, %glyph, "rendering shape");
    match mode {
        RenderMode::Outline => shape.outline(glyph, sink),
        RenderMode::Fill => shape.fill(glyph, sink),
    }
    Ok(state)
}

/// Render `shape` in `mode` with `glyph`
pub fn render(
    shape: &ShapeEnum,
    mode: RenderMode,
    glyph: char,
    sink: &mut dyn CanvasSink,
) -> Result<RenderState> {
    render_annotated(shape, mode, glyph, sink, |_| {})
}

/// Draws shape boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outliner {
    pub glyph: char,
}

impl Default for Outliner {
    fn default() -> Self {
        Self {
            glyph: defaults::GLYPH,
        }
    }
}

impl Outliner {
    pub fn new(glyph: char) -> Self {
        Self { glyph }
    }

    pub fn outline(&self, shape: &ShapeEnum, sink: &mut dyn CanvasSink) -> Result<RenderState> {
        self.outline_with(shape, self.glyph, sink)
    }

    /// Outline with a one-off glyph instead of the configured one
    pub fn outline_with(
        &self,
        shape: &ShapeEnum,
        glyph: char,
        sink: &mut dyn CanvasSink,
    ) -> Result<RenderState> {
        render(shape, RenderMode::Outline, glyph, sink)
    }
}

/// Paints shape interiors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filler {
    pub glyph: char,
}

impl Default for Filler {
    fn default() -> Self {
        Self {
            glyph: defaults::GLYPH,
        }
    }
}

impl Filler {
    pub fn new(glyph: char) -> Self {
        Self { glyph }
    }

    pub fn fill(&self, shape: &ShapeEnum, sink: &mut dyn CanvasSink) -> Result<RenderState> {
        self.fill_with(shape, self.glyph, sink)
    }

    /// Fill with a one-off glyph instead of the configured one
    pub fn fill_with(
        &self,
        shape: &ShapeEnum,
        glyph: char,
        sink: &mut dyn CanvasSink,
    ) -> Result<RenderState> {
        render(shape, RenderMode::Fill, glyph, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShapeError;
    use crate::shapes::{CircleShape, RectangleShape, TriangleShape};
    use crate::sink::CellWrite;
    use glam::ivec2;

    #[test]
    fn defaults_use_dot() {
        assert_eq!(Outliner::default().glyph, '.');
        assert_eq!(Filler::default().glyph, '.');
    }

    #[test]
    fn outliner_reports_state() {
        let shape: ShapeEnum = CircleShape::new(ivec2(0, 0), 2).unwrap().into();
        let mut writes: Vec<CellWrite> = Vec::new();
        let state = Outliner::new('o').outline(&shape, &mut writes).unwrap();
        assert_eq!(state, RenderState { glyph: 'o', mode: RenderMode::Outline });
        assert!(!state.filled());
        assert!(writes.iter().all(|w| w.glyph == 'o'));
    }

    #[test]
    fn per_call_glyph_overrides_config() {
        let shape: ShapeEnum = RectangleShape::new(ivec2(0, 0), 3, 4).unwrap().into();
        let filler = Filler::new('#');
        let mut writes: Vec<CellWrite> = Vec::new();
        let state = filler.fill_with(&shape, '~', &mut writes).unwrap();
        assert!(state.filled());
        assert_eq!(state.glyph, '~');
        assert!(writes.iter().all(|w| w.glyph == '~'));
        // The configured glyph is untouched
        assert_eq!(filler.glyph, '#');
    }

    #[test]
    fn invalid_shape_writes_nothing() {
        let shape = ShapeEnum::Triangle(TriangleShape {
            anchor: ivec2(0, 0),
            left: 1,
            right: 1,
            base: 5,
        });
        let mut writes: Vec<CellWrite> = Vec::new();
        let mut annotated = false;
        let result = render_annotated(&shape, RenderMode::Fill, '.', &mut writes, |_| {
            annotated = true
        });
        assert!(matches!(result, Err(ShapeError::DegenerateTriangle { .. })));
        assert!(writes.is_empty());
        assert!(!annotated);
    }

    #[test]
    fn invalid_radius_is_invalid_parameter() {
        let shape = ShapeEnum::Circle(CircleShape {
            anchor: ivec2(0, 0),
            radius: 0,
        });
        let mut writes: Vec<CellWrite> = Vec::new();
        let err = Outliner::default().outline(&shape, &mut writes).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { name: "radius", value: 0, .. }));
        assert!(writes.is_empty());
    }
}
