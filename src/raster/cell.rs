use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// A single square of the grid, addressed by column and row.
///
/// Row 0 is the bottom row of the grid and column 0 the leftmost one.
/// Cells with a negative component are representable (a line walk may
/// produce them) but never lie on the grid.
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }

    /// Whether both components are non-negative.
    pub fn is_valid(&self) -> bool {
        self.col >= 0 && self.row >= 0
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Cell {
        Cell { col, row }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// Parses "COL,ROW".
impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Cell, Error> {
        let invalid = || Error::InvalidLine(s.to_string());

        let (col, row) = s.split_once(',').ok_or_else(invalid)?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        let row = row.trim().parse().map_err(|_| invalid())?;

        Ok(Cell { col, row })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// The two endpoints of one requested line draw.
pub struct Segment {
    pub start: Cell,
    pub end: Cell,
}

impl Segment {
    pub fn new(start: Cell, end: Cell) -> Segment {
        Segment { start, end }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// Parses "COL,ROW:COL,ROW".
impl FromStr for Segment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Segment, Error> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidLine(s.to_string()))?;

        // Report the whole argument rather than the half that failed.
        let start = start.parse().map_err(|_| Error::InvalidLine(s.to_string()))?;
        let end = end.parse().map_err(|_| Error::InvalidLine(s.to_string()))?;

        Ok(Segment { start, end })
    }
}
