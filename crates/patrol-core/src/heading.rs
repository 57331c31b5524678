//! Four-way heading with a fixed right-turn rule.

use crate::position::{Bounds, Position};
use std::fmt;

/// Direction of travel for the patrolling agent.
///
/// `turn_right` cycles `Up -> Right -> Down -> Left -> Up`. Every patrol
/// starts heading [`Heading::Up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Heading {
    /// Toward row 0 (row - 1).
    Up = 0,
    /// Toward the last column (col + 1).
    Right = 1,
    /// Toward the last row (row + 1).
    Down = 2,
    /// Toward column 0 (col - 1).
    Left = 3,
}

impl Heading {
    /// All headings in clockwise order starting from `Up`.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// The heading after a 90 degree clockwise turn.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Returns the `(row_offset, col_offset)` of one step along this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    /// `true` for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }

    /// The boundary cell reached by travelling from `from` along this
    /// heading with nothing in the way.
    ///
    /// `from` is expected to lie inside `bounds`; the returned cell then
    /// does too.
    pub fn exit_point(self, from: Position, bounds: Bounds) -> Position {
        match self {
            Heading::Up => Position::new(0, from.col),
            Heading::Right => Position::new(from.row, bounds.last_col()),
            Heading::Down => Position::new(bounds.last_row(), from.col),
            Heading::Left => Position::new(from.row, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Heading::Up => '^',
            Heading::Right => '>',
            Heading::Down => 'v',
            Heading::Left => '<',
        };
        write!(f, "{glyph}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_right_is_a_four_cycle() {
        assert_eq!(Heading::Up.turn_right(), Heading::Right);
        assert_eq!(Heading::Right.turn_right(), Heading::Down);
        assert_eq!(Heading::Down.turn_right(), Heading::Left);
        assert_eq!(Heading::Left.turn_right(), Heading::Up);
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
            assert_ne!(h.turn_right(), h);
        }
    }

    #[test]
    fn all_is_clockwise() {
        for pair in Heading::ALL.windows(2) {
            assert_eq!(pair[0].turn_right(), pair[1]);
        }
    }

    #[test]
    fn vertical_headings() {
        assert!(Heading::Up.is_vertical());
        assert!(Heading::Down.is_vertical());
        assert!(!Heading::Left.is_vertical());
        assert!(!Heading::Right.is_vertical());
    }

    #[test]
    fn exit_points_land_on_each_edge() {
        let b = Bounds::new(10, 8);
        let from = Position::new(6, 4);
        assert_eq!(Heading::Up.exit_point(from, b), Position::new(0, 4));
        assert_eq!(Heading::Down.exit_point(from, b), Position::new(9, 4));
        assert_eq!(Heading::Left.exit_point(from, b), Position::new(6, 0));
        assert_eq!(Heading::Right.exit_point(from, b), Position::new(6, 7));
    }

    #[test]
    fn exit_point_from_the_edge_is_itself() {
        let b = Bounds::new(5, 5);
        let from = Position::new(0, 2);
        assert_eq!(Heading::Up.exit_point(from, b), from);
    }

    #[test]
    fn display_glyphs() {
        let s: String = Heading::ALL.iter().map(|h| h.to_string()).collect();
        assert_eq!(s, "^>v<");
    }
}
