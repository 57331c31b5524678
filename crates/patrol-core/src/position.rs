//! Grid coordinates and rectangular bounds.

use crate::heading::Heading;
use std::fmt;

/// A cell on the grid, addressed as `(row, col)`.
///
/// Row 0 is the top of the map and column 0 its left edge. Ordering is
/// row-major, which matches the order cells are read from input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row index.
    pub row: i32,
    /// Zero-based column index.
    pub col: i32,
}

impl Position {
    /// Construct a position from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step along `heading`.
    ///
    /// The result may lie outside any particular [`Bounds`]; callers
    /// check containment themselves.
    pub fn offset(self, heading: Heading) -> Self {
        let (dr, dc) = heading.offset();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The neighbouring cell one step against `heading`.
    pub fn step_back(self, heading: Heading) -> Self {
        let (dr, dc) = heading.offset();
        Self::new(self.row - dr, self.col - dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Rectangular extent of a grid: `rows x cols` cells.
///
/// Valid positions satisfy `0 <= row < rows` and `0 <= col < cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl Bounds {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Construct bounds of `rows x cols` cells.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Whether `pos` lies inside these bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as u32) < self.rows && (pos.col as u32) < self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Index of the last row.
    pub fn last_row(&self) -> i32 {
        self.rows as i32 - 1
    }

    /// Index of the last column.
    pub fn last_col(&self) -> i32 {
        self.cols as i32 - 1
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
