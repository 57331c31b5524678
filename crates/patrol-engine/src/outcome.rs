//! Run results: the visited set and the terminal outcome.

use indexmap::IndexSet;
use patrol_core::Position;

/// Distinct cells occupied during one run, in first-visit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    cells: IndexSet<Position>,
}

impl VisitedSet {
    /// A set containing only `start`.
    pub fn starting_at(start: Position) -> Self {
        let mut cells = IndexSet::new();
        cells.insert(start);
        Self { cells }
    }

    /// Record a cell. Returns `true` if it had not been visited before.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    /// Number of distinct cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been recorded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` was visited.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Cells in first-visit order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in first-visit order, skipping `excluded`.
    pub fn without(&self, excluded: Position) -> Vec<Position> {
        self.iter().filter(|&p| p != excluded).collect()
    }
}

impl Extend<Position> for VisitedSet {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl FromIterator<Position> for VisitedSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Terminal result of a patrol run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The agent walked off the grid. Carries every distinct cell it
    /// occupied, start included.
    Exited(VisitedSet),
    /// The agent will never leave. The partial path is discarded.
    Looped,
}

impl Outcome {
    /// `true` for [`Outcome::Looped`].
    pub fn is_looped(&self) -> bool {
        matches!(self, Outcome::Looped)
    }

    /// The visited set of an exited run.
    pub fn visited(&self) -> Option<&VisitedSet> {
        match self {
            Outcome::Exited(visited) => Some(visited),
            Outcome::Looped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn deduplicates_and_keeps_first_visit_order() {
        let mut v = VisitedSet::starting_at(p(2, 2));
        v.extend([p(1, 2), p(0, 2), p(1, 2), p(2, 2)]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![p(2, 2), p(1, 2), p(0, 2)]);
        assert!(!v.insert(p(0, 2)));
        assert!(v.insert(p(0, 3)));
    }

    #[test]
    fn without_excludes_start() {
        let v: VisitedSet = [p(2, 2), p(1, 2), p(0, 2)].into_iter().collect();
        assert_eq!(v.without(p(2, 2)), vec![p(1, 2), p(0, 2)]);
        assert_eq!(v.without(p(9, 9)).len(), 3);
    }

    #[test]
    fn outcome_accessors() {
        let exited = Outcome::Exited(VisitedSet::starting_at(p(0, 0)));
        assert!(!exited.is_looped());
        assert_eq!(exited.visited().map(VisitedSet::len), Some(1));
        assert!(Outcome::Looped.is_looped());
        assert!(Outcome::Looped.visited().is_none());
    }
}
