//! Reference grids and obstacle wrappers.
//!
//! - [`CANONICAL`]: the 10x10 reference map. Baseline visits 41 cells;
//!   six placements loop ([`CANONICAL_PLACEMENTS`]).
//! - [`CYCLIC`]: four obstructions forming a closed rectangle the agent
//!   circles forever.
//! - [`STRAIGHT_EXIT`]: nothing above the start; exits in one run.

use patrol_core::Position;
use patrol_grid::{Grid, Obstacles};

pub const CANONICAL: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

/// Row-major looping placements for [`CANONICAL`].
pub const CANONICAL_PLACEMENTS: [Position; 6] = [
    Position::new(6, 3),
    Position::new(7, 6),
    Position::new(7, 7),
    Position::new(8, 1),
    Position::new(8, 3),
    Position::new(9, 7),
];

/// Start at (3, 1). Up to (1, 1), right to (1, 3), down to (3, 3), left
/// back to (3, 1) heading up again.
pub const CYCLIC: &str = "\
.#...
....#
.....
#^...
...#.";

/// Start at (3, 2) with an empty column above it.
pub const STRAIGHT_EXIT: &str = "\
#....
...#.
.....
..^..
..#..";

pub fn canonical_grid() -> Grid {
    CANONICAL.parse().expect("canonical fixture parses")
}

pub fn cyclic_grid() -> Grid {
    CYCLIC.parse().expect("cyclic fixture parses")
}

pub fn straight_exit_grid() -> Grid {
    STRAIGHT_EXIT.parse().expect("straight-exit fixture parses")
}

/// Wrapper that hides any indexed `nearest_ahead` so the trait's default
/// full scan runs instead.
pub struct ScanOnly<'a>(pub &'a dyn Obstacles);

impl Obstacles for ScanOnly<'_> {
    fn contains(&self, pos: Position) -> bool {
        self.0.contains(pos)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        self.0.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_core::{Bounds, Heading};

    #[test]
    fn fixtures_parse() {
        assert_eq!(canonical_grid().bounds(), Bounds::new(10, 10));
        assert_eq!(cyclic_grid().start(), Position::new(3, 1));
        assert_eq!(cyclic_grid().obstructions().len(), 4);
        assert_eq!(straight_exit_grid().start(), Position::new(3, 2));
    }

    #[test]
    fn scan_only_delegates_membership() {
        let grid = canonical_grid();
        let scan = ScanOnly(grid.obstructions());
        assert_eq!(scan.len(), 8);
        assert!(scan.contains(Position::new(0, 4)));
        assert_eq!(
            scan.nearest_ahead(grid.start(), Heading::Up),
            Some(Position::new(0, 4))
        );
    }
}
