use super::cell::Cell;
use std::time::Duration;

/// Integer Bresenham walk from one cell to another, both ends included.
///
/// The error term is kept in `i64`, so any two `i32` cells can be joined.
pub struct Bresenham {
    x: i32,
    y: i32,
    end: Cell,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
    pacing: Duration,
}

impl Bresenham {
    pub fn new(start: Cell, end: Cell, pacing: Duration) -> Bresenham {
        let dx = (i64::from(end.col) - i64::from(start.col)).abs();
        let dy = (i64::from(end.row) - i64::from(start.row)).abs();

        Bresenham {
            x: start.col,
            y: start.row,
            end,
            dx,
            dy,
            sx: if start.col < end.col { 1 } else { -1 },
            sy: if start.row < end.row { 1 } else { -1 },
            err: dx - dy,
            done: false,
            pacing,
        }
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }
}

impl Iterator for Bresenham {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.done {
            return None;
        }

        let current = Cell::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 >= -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (i64::from(self.end.col) - i64::from(self.x))
            .unsigned_abs()
            .max((i64::from(self.end.row) - i64::from(self.y)).unsigned_abs())
            + 1;
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bresenham {}
