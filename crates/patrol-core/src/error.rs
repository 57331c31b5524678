//! Error types for grid construction.
//!
//! A malformed grid is a precondition failure: it is reported to the
//! caller before any simulation runs and is never modelled as a patrol
//! outcome.

use crate::position::{Bounds, Position};
use std::error::Error;
use std::fmt;

/// Errors arising from grid parsing or derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows.
    EmptyInput,
    /// The first row has zero columns, so the grid has no cells.
    EmptyRow,
    /// No start marker was found anywhere in the input.
    MissingStart {
        /// The marker that was searched for.
        marker: char,
    },
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A grid axis exceeds the coordinate range.
    DimensionTooLarge {
        /// Which axis (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending size.
        value: usize,
        /// The maximum allowed size.
        max: u32,
    },
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Position,
        /// The grid extent.
        bounds: Bounds,
    },
    /// The start and obstruction markers are the same character.
    SharedMarker {
        /// The character used for both.
        marker: char,
    },
    /// An obstruction was requested on the start cell.
    ObstructsStart {
        /// The start cell.
        pos: Position,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "grid input has no rows"),
            Self::EmptyRow => write!(f, "grid rows must have at least one column"),
            Self::MissingStart { marker } => {
                write!(f, "no start marker '{marker}' found in grid")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, expected {expected} (grid must be rectangular)"
            ),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} out of bounds for {bounds} grid")
            }
            Self::SharedMarker { marker } => {
                write!(f, "'{marker}' cannot mark both the start and an obstruction")
            }
            Self::ObstructsStart { pos } => {
                write!(f, "cannot place an obstruction on the start cell {pos}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(GridError::EmptyInput.to_string(), "grid input has no rows");
        let msg = GridError::MissingStart { marker: '^' }.to_string();
        assert!(msg.contains("'^'"));
        let msg = GridError::RaggedRow {
            row: 3,
            expected: 10,
            found: 9,
        }
        .to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("expected 10"));
        let msg = GridError::OutOfBounds {
            pos: Position::new(10, 0),
            bounds: Bounds::new(10, 10),
        }
        .to_string();
        assert!(msg.contains("(10, 0)"));
        assert!(msg.contains("10x10"));
        let msg = GridError::SharedMarker { marker: '#' }.to_string();
        assert!(msg.contains("'#'"));
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(GridError::EmptyRow);
        assert!(e.source().is_none());
    }
}
