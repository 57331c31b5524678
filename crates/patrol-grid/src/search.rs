//! Nearest-obstruction search along a heading.

use crate::obstacles::Obstacles;
use patrol_core::{Heading, Position};

/// Whether `candidate` lies strictly ahead of `from` on the ray along
/// `heading`: same column for vertical headings, same row for horizontal
/// ones, and a strictly greater or smaller coordinate in the direction
/// of travel.
pub fn is_ahead(from: Position, candidate: Position, heading: Heading) -> bool {
    match heading {
        Heading::Up => candidate.col == from.col && candidate.row < from.row,
        Heading::Down => candidate.col == from.col && candidate.row > from.row,
        Heading::Left => candidate.row == from.row && candidate.col < from.col,
        Heading::Right => candidate.row == from.row && candidate.col > from.col,
    }
}

/// Number of steps from `from` to `candidate` along `heading`.
///
/// Only meaningful when [`is_ahead`] holds.
pub fn distance_ahead(from: Position, candidate: Position, heading: Heading) -> i32 {
    if heading.is_vertical() {
        (candidate.row - from.row).abs()
    } else {
        (candidate.col - from.col).abs()
    }
}

/// Full scan: filter `positions` to those strictly ahead and keep the
/// nearest. At most one obstruction occupies a cell, so ties cannot occur.
pub fn scan_nearest(
    positions: impl Iterator<Item = Position>,
    from: Position,
    heading: Heading,
) -> Option<Position> {
    positions
        .filter(|&p| is_ahead(from, p, heading))
        .min_by_key(|&p| distance_ahead(from, p, heading))
}

/// Find the nearest obstruction strictly ahead of `from` along `heading`.
///
/// Returns `None` when nothing blocks the ray, meaning the agent will
/// reach the grid edge instead.
///
/// # Examples
///
/// ```
/// use patrol_grid::{next_obstruction, Grid, Heading, Position};
///
/// let grid = Grid::parse(["..#..", ".....", "..^.."]).unwrap();
/// let hit = next_obstruction(grid.start(), Heading::Up, grid.obstructions());
/// assert_eq!(hit, Some(Position::new(0, 2)));
/// assert_eq!(next_obstruction(grid.start(), Heading::Left, grid.obstructions()), None);
/// ```
pub fn next_obstruction<O: Obstacles + ?Sized>(
    from: Position,
    heading: Heading,
    obstacles: &O,
) -> Option<Position> {
    obstacles.nearest_ahead(from, heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn ahead_requires_same_lane() {
        let from = p(5, 5);
        assert!(is_ahead(from, p(2, 5), Heading::Up));
        assert!(!is_ahead(from, p(2, 4), Heading::Up));
        assert!(!is_ahead(from, p(7, 5), Heading::Up));
        assert!(is_ahead(from, p(7, 5), Heading::Down));
        assert!(is_ahead(from, p(5, 0), Heading::Left));
        assert!(is_ahead(from, p(5, 9), Heading::Right));
        assert!(!is_ahead(from, p(5, 9), Heading::Left));
    }

    #[test]
    fn own_cell_is_never_ahead() {
        let from = p(3, 3);
        for h in Heading::ALL {
            assert!(!is_ahead(from, from, h));
        }
    }

    #[test]
    fn scan_picks_nearest() {
        let obstacles = [p(0, 4), p(3, 4), p(1, 4), p(9, 4), p(3, 3)];
        let from = p(6, 4);
        assert_eq!(
            scan_nearest(obstacles.iter().copied(), from, Heading::Up),
            Some(p(3, 4))
        );
        assert_eq!(
            scan_nearest(obstacles.iter().copied(), from, Heading::Down),
            Some(p(9, 4))
        );
        assert_eq!(
            scan_nearest(obstacles.iter().copied(), from, Heading::Right),
            None
        );
    }

    #[test]
    fn distance_counts_steps() {
        assert_eq!(distance_ahead(p(6, 4), p(3, 4), Heading::Up), 3);
        assert_eq!(distance_ahead(p(6, 4), p(6, 9), Heading::Right), 5);
    }
}
