//! Path segments: the run of cells crossed between two turns.

use patrol_core::{Bounds, Heading, Position};

/// Where a straight run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentEnd {
    /// An obstruction blocks the run; the agent stops one cell short.
    Obstruction(Position),
    /// Nothing blocks the run; the agent reaches the boundary cell.
    Edge,
}

/// A straight run of cells along one heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// The last cell occupied: one step before the obstruction, or the
    /// boundary cell.
    pub stop: Position,
    /// Every cell from the starting cell through `stop`, inclusive, in
    /// travel order. Never contains the obstruction itself.
    pub cells: Vec<Position>,
}

/// Enumerate the cells crossed travelling from `from` along `heading`
/// until `end`.
///
/// Ascending or descending order follows the heading. `from` must lie
/// inside `bounds` and, for [`SegmentEnd::Obstruction`], the obstruction
/// must lie strictly ahead on the same lane; anything else is a defect
/// in the caller.
///
/// # Examples
///
/// ```
/// use patrol_grid::{segment, Bounds, Heading, Position, SegmentEnd};
///
/// let seg = segment(
///     Position::new(6, 4),
///     SegmentEnd::Obstruction(Position::new(3, 4)),
///     Heading::Up,
///     Bounds::new(10, 10),
/// );
/// assert_eq!(seg.stop, Position::new(4, 4));
/// assert_eq!(seg.cells, vec![Position::new(6, 4), Position::new(5, 4), Position::new(4, 4)]);
/// ```
pub fn segment(from: Position, end: SegmentEnd, heading: Heading, bounds: Bounds) -> Segment {
    debug_assert!(bounds.contains(from), "segment start {from} outside {bounds}");
    let stop = match end {
        SegmentEnd::Obstruction(blocker) => blocker.step_back(heading),
        SegmentEnd::Edge => heading.exit_point(from, bounds),
    };
    debug_assert!(bounds.contains(stop), "segment stop {stop} outside {bounds}");

    let (dr, dc) = heading.offset();
    let len = (stop.row - from.row) * dr + (stop.col - from.col) * dc;
    debug_assert!(len >= 0, "segment stop {stop} lies behind {from} heading {heading}");
    debug_assert!(
        if heading.is_vertical() { stop.col == from.col } else { stop.row == from.row },
        "segment stop {stop} off the lane of {from}"
    );

    let cells = (0..=len.max(0))
        .map(|k| Position::new(from.row + k * dr, from.col + k * dc))
        .collect();
    Segment { stop, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    const B: Bounds = Bounds::new(10, 10);

    #[test]
    fn stops_short_of_obstruction_each_heading() {
        let seg = segment(p(1, 4), SegmentEnd::Obstruction(p(1, 9)), Heading::Right, B);
        assert_eq!(seg.stop, p(1, 8));
        assert_eq!(seg.cells, vec![p(1, 4), p(1, 5), p(1, 6), p(1, 7), p(1, 8)]);

        let seg = segment(p(1, 8), SegmentEnd::Obstruction(p(7, 8)), Heading::Down, B);
        assert_eq!(seg.stop, p(6, 8));
        assert_eq!(seg.cells.len(), 6);
        assert_eq!(seg.cells.first(), Some(&p(1, 8)));

        let seg = segment(p(6, 8), SegmentEnd::Obstruction(p(6, 1)), Heading::Left, B);
        assert_eq!(seg.stop, p(6, 2));
        assert_eq!(seg.cells.last(), Some(&p(6, 2)));
        assert!(!seg.cells.contains(&p(6, 1)));
    }

    #[test]
    fn adjacent_obstruction_yields_single_cell() {
        let seg = segment(p(4, 4), SegmentEnd::Obstruction(p(3, 4)), Heading::Up, B);
        assert_eq!(seg.stop, p(4, 4));
        assert_eq!(seg.cells, vec![p(4, 4)]);
    }

    #[test]
    fn edge_run_includes_boundary_cell() {
        let seg = segment(p(8, 7), SegmentEnd::Edge, Heading::Down, B);
        assert_eq!(seg.stop, p(9, 7));
        assert_eq!(seg.cells, vec![p(8, 7), p(9, 7)]);

        let seg = segment(p(3, 0), SegmentEnd::Edge, Heading::Left, B);
        assert_eq!(seg.cells, vec![p(3, 0)]);
    }

    #[test]
    fn cells_are_contiguous_and_in_travel_order() {
        let seg = segment(p(9, 2), SegmentEnd::Edge, Heading::Up, B);
        assert_eq!(seg.cells.len(), 10);
        for pair in seg.cells.windows(2) {
            assert_eq!(pair[0].offset(Heading::Up), pair[1]);
        }
    }
}
