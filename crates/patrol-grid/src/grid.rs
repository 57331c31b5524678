//! The immutable grid model and its text parser.

use crate::obstacles::{Obstacles, ObstructionSet};
use crate::symbols::GridSymbols;
use patrol_core::{Bounds, GridError, Position};
use std::str::FromStr;

/// A bounded 2D map: its extent, the obstruction layout, and the single
/// start cell.
///
/// The start cell is never an obstruction. A `Grid` is read-only once
/// built; derived layouts are either new grids
/// ([`with_obstruction`](Grid::with_obstruction)) or borrowed
/// [`Overlay`](crate::Overlay)s.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Bounds,
    start: Position,
    obstructions: ObstructionSet,
    symbols: GridSymbols,
}

impl Grid {
    /// Parse rows of text using the default [`GridSymbols`].
    ///
    /// # Examples
    ///
    /// ```
    /// use patrol_grid::{Grid, Position, Obstacles};
    ///
    /// let grid = Grid::parse(["#..", "...", ".^."]).unwrap();
    /// assert_eq!(grid.start(), Position::new(2, 1));
    /// assert_eq!(grid.obstructions().len(), 1);
    /// assert_eq!(grid.bounds().cell_count(), 9);
    /// ```
    pub fn parse<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with(rows, GridSymbols::default())
    }

    /// Parse rows of text with a custom alphabet.
    ///
    /// Scans every character in row-major order. The start marker sets
    /// the start cell (a later marker overwrites an earlier one); the
    /// obstruction marker adds a blocked cell; anything else is free.
    ///
    /// # Errors
    ///
    /// - [`GridError::SharedMarker`] if `symbols` uses one character for
    ///   both markers.
    /// - [`GridError::EmptyInput`] if there are no rows.
    /// - [`GridError::EmptyRow`] if the first row is empty.
    /// - [`GridError::RaggedRow`] if any row's length differs from the first.
    /// - [`GridError::DimensionTooLarge`] if an axis exceeds `i32::MAX`.
    /// - [`GridError::MissingStart`] if no start marker occurs.
    pub fn parse_with<I, S>(rows: I, symbols: GridSymbols) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if symbols.start == symbols.obstruction {
            return Err(GridError::SharedMarker {
                marker: symbols.start,
            });
        }
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let cols = rows.first().ok_or(GridError::EmptyInput)?.len();
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find_map(|(i, r)| (r.len() != cols).then_some((i, r.len())))
        {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        let bounds = Bounds::new(
            checked_dim("rows", rows.len())?,
            checked_dim("cols", cols)?,
        );

        let mut start = None;
        let mut obstructions = ObstructionSet::new(bounds);
        for (r, line) in rows.iter().enumerate() {
            for (c, &ch) in line.iter().enumerate() {
                let pos = Position::new(r as i32, c as i32);
                if ch == symbols.start {
                    start = Some(pos);
                } else if ch == symbols.obstruction {
                    obstructions.insert(pos)?;
                }
            }
        }
        let start = start.ok_or(GridError::MissingStart {
            marker: symbols.start,
        })?;

        Ok(Self {
            bounds,
            start,
            obstructions,
            symbols,
        })
    }

    /// Extent of the grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The agent's starting cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The obstruction layout.
    pub fn obstructions(&self) -> &ObstructionSet {
        &self.obstructions
    }

    /// The alphabet the grid was parsed with.
    pub fn symbols(&self) -> GridSymbols {
        self.symbols
    }

    /// A new grid identical to this one plus one obstruction at `pos`.
    ///
    /// # Errors
    ///
    /// [`GridError::ObstructsStart`] if `pos` is the start cell,
    /// [`GridError::OutOfBounds`] if it lies outside the grid.
    pub fn with_obstruction(&self, pos: Position) -> Result<Self, GridError> {
        if pos == self.start {
            return Err(GridError::ObstructsStart { pos });
        }
        let mut derived = self.clone();
        derived.obstructions.insert(pos)?;
        Ok(derived)
    }

    /// Draw the map with every cell for which `visited` holds marked `X`.
    ///
    /// Obstructions use the grid's obstruction symbol and free cells `.`.
    /// Rows are separated by `\n` with no trailing newline.
    pub fn render(&self, visited: impl Fn(Position) -> bool) -> String {
        let mut out = String::with_capacity(self.bounds.cell_count() + self.bounds.rows as usize);
        for r in 0..self.bounds.rows as i32 {
            if r > 0 {
                out.push('\n');
            }
            for c in 0..self.bounds.cols as i32 {
                let pos = Position::new(r, c);
                let glyph = if self.obstructions.contains(pos) {
                    self.symbols.obstruction
                } else if visited(pos) {
                    GridSymbols::VISITED
                } else {
                    GridSymbols::FREE
                };
                out.push(glyph);
            }
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Split text into lines and parse with default symbols. Blank lines
    /// are skipped and `\r\n` endings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines().filter(|line| !line.is_empty()))
    }
}

fn checked_dim(name: &'static str, value: usize) -> Result<u32, GridError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v <= Bounds::MAX_DIM)
        .ok_or(GridError::DimensionTooLarge {
            name,
            value,
            max: Bounds::MAX_DIM,
        })
}
