//! Default glyphs, limits and tuning constants

/// Glyph used by `Outliner` and `Filler` unless configured otherwise
pub const GLYPH: char = '.';

/// Round glyph traditionally used for outlines
pub const ROUNDED_GLYPH: char = 'o';

/// Largest accepted size parameter. Shapes reach at most `4 * MAX_SIZE` cells
/// from their anchor, so the reach itself never overflows; `validate` then
/// checks that the anchor leaves room for it.
pub const MAX_SIZE: i32 = 4096;

/// Most rows and columns `Canvas::render` lays out, matching the largest
/// bounded canvas
pub const MAX_RENDER_SPAN: i64 = u16::MAX as i64;

/// Maximum distance from the radius for a cell to belong to a circle's ring
pub const CIRCLE_RING_TOLERANCE: f64 = 0.5;

/// Inset from the radius below which a cell belongs to a circle's interior
pub const CIRCLE_FILL_INSET: f64 = 0.51;

/// Star sizes with `(size - STAR_TUNING_OFFSET) % STAR_TUNING_MODULUS == 0`
/// skip `STAR_WIDE_STEP` columns after the inner arms instead of
/// `STAR_NARROW_STEP`.
pub const STAR_TUNING_OFFSET: i32 = 7;
pub const STAR_TUNING_MODULUS: i32 = 3;
pub const STAR_WIDE_STEP: i32 = 4;
pub const STAR_NARROW_STEP: i32 = 2;
