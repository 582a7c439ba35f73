//! Error types for shape validation
//!
//! Every error is raised before a render call emits its first cell, so a
//! failed render never leaves partial output in a sink.

use glam::IVec2;
use miette::Diagnostic;
use thiserror::Error;

use crate::shapes::ShapeKind;

/// Result alias used throughout the crate
pub type Result<T, E = ShapeError> = std::result::Result<T, E>;

/// Errors raised when a shape's geometry cannot be rasterized
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("invalid {kind} {name}: {value}")]
    #[diagnostic(
        code(celldraw::shape::invalid_parameter),
        help("sizes must lie in 1..=4096, and every cell of the shape must fit in i32 coordinates")
    )]
    InvalidParameter {
        kind: ShapeKind,
        name: &'static str,
        value: i32,
    },

    #[error("degenerate triangle with sides {left}, {right} and base {base}")]
    #[diagnostic(
        code(celldraw::shape::degenerate_triangle),
        help("each side must be strictly shorter than the sum of the other two")
    )]
    DegenerateTriangle { left: i32, right: i32, base: i32 },
}

/// Check that a size parameter lies in `1..=MAX_SIZE`
pub(crate) fn check_size(kind: ShapeKind, name: &'static str, value: i32) -> Result<()> {
    if (1..=crate::defaults::MAX_SIZE).contains(&value) {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter { kind, name, value })
    }
}

/// Check that every cell within `reach` of `anchor` is representable
pub(crate) fn check_anchor(kind: ShapeKind, anchor: IVec2, reach: i32) -> Result<()> {
    let fits = |v: i32| v.checked_sub(reach).is_some() && v.checked_add(reach).is_some();
    if !fits(anchor.x) {
        return Err(ShapeError::InvalidParameter {
            kind,
            name: "anchor x",
            value: anchor.x,
        });
    }
    if !fits(anchor.y) {
        return Err(ShapeError::InvalidParameter {
            kind,
            name: "anchor y",
            value: anchor.y,
        });
    }
    Ok(())
}
