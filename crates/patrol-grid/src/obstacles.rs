//! Obstacle sets: the parsed layout and a one-cell overlay.

use crate::search::{distance_ahead, is_ahead, scan_nearest};
use indexmap::IndexSet;
use patrol_core::{Bounds, GridError, Heading, Position};
use smallvec::SmallVec;

/// A read-only collection of blocking cells.
///
/// # Thread Safety
///
/// `Sync` is required because the loop search shares one base set across
/// every worker thread.
pub trait Obstacles: Send + Sync {
    /// Whether `pos` is blocked.
    fn contains(&self, pos: Position) -> bool;

    /// Number of distinct blocked cells.
    fn len(&self) -> usize;

    /// Whether no cell is blocked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every blocked cell, in a deterministic implementation-defined order.
    fn positions(&self) -> Box<dyn Iterator<Item = Position> + '_>;

    /// The nearest blocked cell strictly ahead of `from` along `heading`.
    ///
    /// Default implementation scans every position. Implementations
    /// should override it with an indexed lookup when they can; results
    /// must be identical to the scan.
    fn nearest_ahead(&self, from: Position, heading: Heading) -> Option<Position> {
        scan_nearest(self.positions(), from, heading)
    }
}

/// Sorted coordinates of the obstructions in one row or column.
type Lane = SmallVec<[i32; 8]>;

/// The obstruction layout of a grid.
///
/// Cells are kept in insertion order (row-major when built by the
/// parser). Each row and column additionally keeps a sorted lane of
/// obstruction coordinates so [`nearest_ahead`](Obstacles::nearest_ahead)
/// is a binary search rather than a scan.
#[derive(Clone, Debug)]
pub struct ObstructionSet {
    bounds: Bounds,
    cells: IndexSet<Position>,
    /// `by_row[r]` holds the blocked columns of row `r`, ascending.
    by_row: Vec<Lane>,
    /// `by_col[c]` holds the blocked rows of column `c`, ascending.
    by_col: Vec<Lane>,
}

impl ObstructionSet {
    /// Create an empty set sized for `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: IndexSet::new(),
            by_row: vec![Lane::new(); bounds.rows as usize],
            by_col: vec![Lane::new(); bounds.cols as usize],
        }
    }

    /// Build a set from an iterator of positions. Duplicates collapse.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for any position outside
    /// `bounds`.
    pub fn from_positions(
        bounds: Bounds,
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GridError> {
        let mut set = Self::new(bounds);
        for pos in positions {
            set.insert(pos)?;
        }
        Ok(set)
    }

    /// Add an obstruction. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, pos: Position) -> Result<bool, GridError> {
        if !self.bounds.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                bounds: self.bounds,
            });
        }
        if !self.cells.insert(pos) {
            return Ok(false);
        }
        insert_sorted(&mut self.by_row[pos.row as usize], pos.col);
        insert_sorted(&mut self.by_col[pos.col as usize], pos.row);
        Ok(true)
    }

    /// Extent the set was sized for.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Iterate cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    fn row_lane(&self, row: i32) -> Option<&Lane> {
        usize::try_from(row).ok().and_then(|r| self.by_row.get(r))
    }

    fn col_lane(&self, col: i32) -> Option<&Lane> {
        usize::try_from(col).ok().and_then(|c| self.by_col.get(c))
    }
}

fn insert_sorted(lane: &mut Lane, value: i32) {
    let idx = lane.partition_point(|&v| v < value);
    lane.insert(idx, value);
}

/// Largest lane value strictly below `limit`.
fn nearest_below(lane: &Lane, limit: i32) -> Option<i32> {
    let idx = lane.partition_point(|&v| v < limit);
    idx.checked_sub(1).map(|i| lane[i])
}

/// Smallest lane value strictly above `limit`.
fn nearest_above(lane: &Lane, limit: i32) -> Option<i32> {
    let idx = lane.partition_point(|&v| v <= limit);
    lane.get(idx).copied()
}

impl Obstacles for ObstructionSet {
    fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        Box::new(self.iter())
    }

    fn nearest_ahead(&self, from: Position, heading: Heading) -> Option<Position> {
        match heading {
            Heading::Up => nearest_below(self.col_lane(from.col)?, from.row)
                .map(|r| Position::new(r, from.col)),
            Heading::Down => nearest_above(self.col_lane(from.col)?, from.row)
                .map(|r| Position::new(r, from.col)),
            Heading::Left => nearest_below(self.row_lane(from.row)?, from.col)
                .map(|c| Position::new(from.row, c)),
            Heading::Right => nearest_above(self.row_lane(from.row)?, from.col)
                .map(|c| Position::new(from.row, c)),
        }
    }
}

/// A base obstacle set plus one extra blocked cell.
///
/// The base is borrowed, never copied or mutated, so many overlays can
/// share one set concurrently.
#[derive(Clone, Copy)]
pub struct Overlay<'a> {
    base: &'a dyn Obstacles,
    extra: Position,
}

impl<'a> Overlay<'a> {
    /// Layer `extra` on top of `base`.
    pub fn new(base: &'a dyn Obstacles, extra: Position) -> Self {
        Self { base, extra }
    }

    /// The added cell.
    pub fn extra(&self) -> Position {
        self.extra
    }
}

impl std::fmt::Debug for Overlay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("base_len", &self.base.len())
            .field("extra", &self.extra)
            .finish()
    }
}

impl Obstacles for Overlay<'_> {
    fn contains(&self, pos: Position) -> bool {
        pos == self.extra || self.base.contains(pos)
    }

    fn len(&self) -> usize {
        self.base.len() + usize::from(!self.base.contains(self.extra))
    }

    fn positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        let extra = (!self.base.contains(self.extra)).then_some(self.extra);
        Box::new(self.base.positions().chain(extra))
    }

    fn nearest_ahead(&self, from: Position, heading: Heading) -> Option<Position> {
        let base_hit = self.base.nearest_ahead(from, heading);
        if !is_ahead(from, self.extra, heading) {
            return base_hit;
        }
        match base_hit {
            Some(hit)
                if distance_ahead(from, hit, heading)
                    <= distance_ahead(from, self.extra, heading) =>
            {
                Some(hit)
            }
            _ => Some(self.extra),
        }
    }
}
