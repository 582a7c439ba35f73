//! Shapes paired with their render annotation

use crate::errors::Result;
use crate::render::{RenderMode, RenderState, render_annotated};
use crate::shapes::ShapeEnum;
use crate::sink::CanvasSink;

/// A shape together with the state its most recent render left behind.
///
/// The geometry is fixed at construction; only the annotation changes, and
/// only when a render succeeds validation. Cloning copies both.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    shape: ShapeEnum,
    state: Option<RenderState>,
}

impl Figure {
    pub fn new(shape: impl Into<ShapeEnum>) -> Self {
        Self {
            shape: shape.into(),
            state: None,
        }
    }

    pub fn shape(&self) -> &ShapeEnum {
        &self.shape
    }

    /// Annotation from the last successful render, if any
    pub fn state(&self) -> Option<RenderState> {
        self.state
    }

    /// Glyph of the last render
    pub fn glyph(&self) -> Option<char> {
        self.state.map(|s| s.glyph)
    }

    /// Whether the last render was a fill
    pub fn filled(&self) -> bool {
        self.state.is_some_and(|s| s.filled())
    }

    pub fn render(
        &mut self,
        mode: RenderMode,
        glyph: char,
        sink: &mut dyn CanvasSink,
    ) -> Result<RenderState> {
        render_annotated(&self.shape, mode, glyph, sink, |state| {
            self.state = Some(state)
        })
    }

    pub fn outline(&mut self, glyph: char, sink: &mut dyn CanvasSink) -> Result<RenderState> {
        self.render(RenderMode::Outline, glyph, sink)
    }

    pub fn fill(&mut self, glyph: char, sink: &mut dyn CanvasSink) -> Result<RenderState> {
        self.render(RenderMode::Fill, glyph, sink)
    }
}
