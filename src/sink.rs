//! Cell sinks
//!
//! Rasterizers never touch a display; they hand `(cell, glyph)` pairs to a
//! [`CanvasSink`]. Two sinks ship with the crate: [`Canvas`], a
//! last-write-wins grid that renders to text, and `Vec<CellWrite>`, which
//! records every write in emission order.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use glam::IVec2;

use crate::defaults::MAX_RENDER_SPAN;
use crate::log::warn;

/// Receiver of cell writes
pub trait CanvasSink {
    /// Write `glyph` at `cell`, replacing whatever was there
    fn set_cell(&mut self, cell: IVec2, glyph: char);
}

/// A single recorded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
    pub cell: IVec2,
    pub glyph: char,
}

impl CanvasSink for Vec<CellWrite> {
    fn set_cell(&mut self, cell: IVec2, glyph: char) {
        self.push(CellWrite { cell, glyph });
    }
}

/// Character grid with last-write-wins semantics.
///
/// An unbounded canvas accepts any coordinate and renders the bounding box of
/// what was written. A bounded canvas covers `[0, width) x [0, height)` and
/// drops writes outside it.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    cells: HashMap<(i32, i32), char>,
    size: Option<IVec2>,
    clipped: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas that clips to `width` columns and `height` rows
    pub fn bounded(width: u16, height: u16) -> Self {
        Self {
            size: Some(IVec2::new(i32::from(width), i32::from(height))),
            ..Self::default()
        }
    }

    pub fn get(&self, cell: IVec2) -> Option<char> {
        self.cells.get(&(cell.x, cell.y)).copied()
    }

    /// Number of distinct cells holding a glyph
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of writes dropped because they fell outside the bounds
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    /// Every written cell with its glyph, ordered by row then column
    pub fn cells(&self) -> Vec<(IVec2, char)> {
        let mut cells: Vec<_> = self
            .cells
            .iter()
            .map(|(&(x, y), &glyph)| (IVec2::new(x, y), glyph))
            .collect();
        cells.sort_by_key(|(cell, _)| (cell.y, cell.x));
        cells
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.clipped = 0;
    }

    /// Inclusive corners of the area `render` covers, if there is one
    fn extent(&self) -> Option<(IVec2, IVec2)> {
        if let Some(size) = self.size {
            if size.x == 0 || size.y == 0 {
                return None;
            }
            return Some((IVec2::ZERO, size - IVec2::ONE));
        }
        let mut keys = self.cells.keys();
        let &(x, y) = keys.next()?;
        let first = IVec2::new(x, y);
        Some(keys.fold((first, first), |(min, max), &(x, y)| {
            let cell = IVec2::new(x, y);
            (min.min(cell), max.max(cell))
        }))
    }

    /// Render the canvas as text, one line per row, trailing blanks trimmed.
    ///
    /// The text starts at the top-left corner of the rendered area and covers
    /// at most `MAX_RENDER_SPAN` rows and columns; cells further away are
    /// left out. Only written cells are visited, so sparse canvases render in
    /// time proportional to the text produced.
    pub fn render(&self) -> String {
        let Some((min, max)) = self.extent() else {
            return String::new();
        };
        let span = |lo: i32, hi: i32| i64::from(hi) - i64::from(lo) + 1;
        let (width, height) = (span(min.x, max.x), span(min.y, max.y));
        if width > MAX_RENDER_SPAN || height > MAX_RENDER_SPAN {
            warn!(width, height, "canvas extent exceeds the render window");
        }

        let mut rows: BTreeMap<i64, BTreeMap<i64, char>> = BTreeMap::new();
        for (&(x, y), &glyph) in &self.cells {
            let col = i64::from(x) - i64::from(min.x);
            let row = i64::from(y) - i64::from(min.y);
            if col < MAX_RENDER_SPAN && row < MAX_RENDER_SPAN {
                rows.entry(row).or_default().insert(col, glyph);
            }
        }

        let mut text = String::new();
        for row in 0..height.min(MAX_RENDER_SPAN) {
            if row > 0 {
                text.push('\n');
            }
            let Some(glyphs) = rows.get(&row) else {
                continue;
            };
            let mut line = String::new();
            let mut next = 0;
            for (&col, &glyph) in glyphs {
                line.extend(std::iter::repeat_n(' ', (col - next) as usize));
                line.push(glyph);
                next = col + 1;
            }
            text.push_str(line.trim_end());
        }
        text
    }
}

impl CanvasSink for Canvas {
    fn set_cell(&mut self, cell: IVec2, glyph: char) {
        if let Some(size) = self.size {
            if cell.x < 0 || cell.y < 0 || cell.x >= size.x || cell.y >= size.y {
                warn!(x = cell.x, y = cell.y, "write outside canvas bounds dropped");
                self.clipped += 1;
                return;
            }
        }
        self.cells.insert((cell.x, cell.y), glyph);
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
