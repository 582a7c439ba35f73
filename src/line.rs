//! Integer line stepping
//!
//! Lines are walked with the classic error-accumulation algorithm: each step
//! advances whichever axes keep the accumulated error smallest, stepping both
//! on diagonals.

use glam::IVec2;

use crate::sink::CanvasSink;

/// Iterator over the cells of a digital line, start and end inclusive
#[derive(Debug, Clone)]
pub struct Line {
    cursor: IVec2,
    end: IVec2,
    delta: IVec2,
    step: IVec2,
    err: i32,
    done: bool,
}

impl Line {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        let delta = (end - start).abs();
        let step = IVec2::new(
            if start.x < end.x { 1 } else { -1 },
            if start.y < end.y { 1 } else { -1 },
        );
        Self {
            cursor: start,
            end,
            delta,
            step,
            err: delta.x - delta.y,
            done: false,
        }
    }

    /// Move the cursor one cell along the line
    fn advance(&mut self) {
        let e2 = 2 * self.err;
        if e2 > -self.delta.y {
            self.err -= self.delta.y;
            self.cursor.x += self.step.x;
        }
        if e2 < self.delta.x {
            self.err += self.delta.x;
            self.cursor.y += self.step.y;
        }
    }
}

impl Iterator for Line {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }
        let cell = self.cursor;
        if cell == self.end {
            self.done = true;
        } else {
            self.advance();
        }
        Some(cell)
    }
}

/// Column where the line from `start` to `end` crosses row `target_y`.
///
/// Returns the first matching column in stepping order. A line that never
/// reaches the row yields the column of `end`.
pub fn x_at_row(start: IVec2, end: IVec2, target_y: i32) -> i32 {
    let mut line = Line::new(start, end);
    loop {
        if line.cursor.y == target_y {
            return line.cursor.x;
        }
        if line.cursor == line.end {
            return line.cursor.x;
        }
        line.advance();
    }
}

/// Write every cell of the line to `sink`
pub fn draw_line(start: IVec2, end: IVec2, glyph: char, sink: &mut dyn CanvasSink) {
    for cell in Line::new(start, end) {
        sink.set_cell(cell, glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    fn cells(start: IVec2, end: IVec2) -> Vec<(i32, i32)> {
        Line::new(start, end).map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn single_point() {
        assert_eq!(cells(ivec2(4, 4), ivec2(4, 4)), vec![(4, 4)]);
    }

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(cells(ivec2(0, 0), ivec2(3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(cells(ivec2(0, 0), ivec2(0, -2)), vec![(0, 0), (0, -1), (0, -2)]);
    }

    #[test]
    fn diagonal_steps_both_axes() {
        assert_eq!(cells(ivec2(0, 0), ivec2(3, -3)), vec![(0, 0), (1, -1), (2, -2), (3, -3)]);
    }

    #[test]
    fn shallow_line() {
        assert_eq!(
            cells(ivec2(0, 0), ivec2(6, -3)),
            vec![(0, 0), (1, 0), (2, -1), (3, -1), (4, -2), (5, -2), (6, -3)]
        );
    }

    #[test]
    fn steep_line() {
        assert_eq!(
            cells(ivec2(0, 0), ivec2(3, -4)),
            vec![(0, 0), (1, -1), (1, -2), (2, -3), (3, -4)]
        );
    }

    #[test]
    fn reversed_line_covers_same_length() {
        let forward = cells(ivec2(6, 0), ivec2(3, -4));
        assert_eq!(forward.first(), Some(&(6, 0)));
        assert_eq!(forward.last(), Some(&(3, -4)));
        assert_eq!(forward.len(), 5);
    }

    #[test]
    fn row_lookup() {
        assert_eq!(x_at_row(ivec2(0, 0), ivec2(3, -4), -2), 1);
        assert_eq!(x_at_row(ivec2(0, 0), ivec2(3, -4), 0), 0);
        assert_eq!(x_at_row(ivec2(0, 0), ivec2(3, -4), -4), 3);
    }

    #[test]
    fn row_lookup_returns_first_hit_on_shallow_line() {
        // Row -1 is covered by x = 2 and x = 3; stepping reaches 2 first
        assert_eq!(x_at_row(ivec2(0, 0), ivec2(6, -3), -1), 2);
    }

    #[test]
    fn row_lookup_outside_line_returns_end_column() {
        assert_eq!(x_at_row(ivec2(0, 0), ivec2(3, -4), -9), 3);
        assert_eq!(x_at_row(ivec2(10, 0), ivec2(7, -2), 5), 7);
    }

    #[test]
    fn draw_line_writes_every_cell() {
        let mut writes = Vec::new();
        draw_line(ivec2(0, 0), ivec2(2, -2), '*', &mut writes);
        let written: Vec<_> = writes.iter().map(|w| (w.cell.x, w.cell.y, w.glyph)).collect();
        assert_eq!(written, vec![(0, 0, '*'), (1, -1, '*'), (2, -2, '*')]);
    }
}
