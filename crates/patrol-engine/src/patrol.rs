//! The patrol state machine.
//!
//! A run starts at the grid's start cell heading up. Each transition
//! asks for the nearest obstruction ahead, walks the straight run up to
//! it (or to the edge), records the crossed cells, and turns right. The
//! run ends when a run reaches the edge ([`Outcome::Exited`]) or the
//! configured [`LoopDetection`] fires ([`Outcome::Looped`]).

use std::collections::HashSet;

use patrol_core::{Bounds, Heading, Position};
use patrol_grid::{segment, Grid, Obstacles, SegmentEnd};
use tracing::{debug, trace};

use crate::config::{LoopDetection, PatrolConfig};
use crate::outcome::{Outcome, VisitedSet};

/// What a single [`Patrol::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Stopped short of an obstruction at `at` and turned to `heading`.
    Turned {
        /// Cell the agent now occupies.
        at: Position,
        /// New heading after the turn.
        heading: Heading,
    },
    /// Walked off the grid. Terminal.
    Exited,
    /// Loop detection fired. Terminal.
    Looped,
}

impl Transition {
    /// Whether the run has finished.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Transition::Turned { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Exited,
    Looped,
}

/// One patrol run over a grid and an obstacle set.
///
/// The obstacle set is usually the grid's own
/// [`obstructions`](Grid::obstructions), or an
/// [`Overlay`](patrol_grid::Overlay) adding a candidate cell.
pub struct Patrol<'a> {
    bounds: Bounds,
    obstacles: &'a dyn Obstacles,
    detection: LoopDetection,
    state: State,
    position: Position,
    heading: Heading,
    visited: VisitedSet,
    seen: HashSet<(Position, Heading)>,
    steps: u64,
}

impl<'a> Patrol<'a> {
    /// Start a run at `grid.start()` heading up, blocked by `obstacles`.
    pub fn new(grid: &Grid, obstacles: &'a dyn Obstacles, detection: LoopDetection) -> Self {
        let start = grid.start();
        Self {
            bounds: grid.bounds(),
            obstacles,
            detection,
            state: State::Running,
            position: start,
            heading: Heading::Up,
            visited: VisitedSet::starting_at(start),
            seen: HashSet::new(),
            steps: 0,
        }
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Transitions performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Cells visited so far.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Consume the run and keep its visited cells, including the partial
    /// path of a run that looped.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }

    /// Perform one transition. Once terminal, further calls repeat the
    /// terminal transition without doing any work.
    pub fn step(&mut self) -> Transition {
        match self.state {
            State::Exited => return Transition::Exited,
            State::Looped => return Transition::Looped,
            State::Running => {}
        }

        if self.loop_detected() {
            self.state = State::Looped;
            trace!(steps = self.steps, at = %self.position, heading = %self.heading, "loop detected");
            return Transition::Looped;
        }
        self.steps += 1;

        match self.obstacles.nearest_ahead(self.position, self.heading) {
            Some(blocker) => {
                let run = segment(
                    self.position,
                    SegmentEnd::Obstruction(blocker),
                    self.heading,
                    self.bounds,
                );
                self.visited.extend(run.cells);
                self.position = run.stop;
                self.heading = self.heading.turn_right();
                trace!(steps = self.steps, at = %self.position, heading = %self.heading, "turned");
                Transition::Turned {
                    at: self.position,
                    heading: self.heading,
                }
            }
            None => {
                let run = segment(self.position, SegmentEnd::Edge, self.heading, self.bounds);
                self.visited.extend(run.cells);
                self.position = run.stop;
                self.state = State::Exited;
                trace!(steps = self.steps, at = %self.position, "exited");
                Transition::Exited
            }
        }
    }

    /// Step until a terminal transition and return it.
    pub fn run_to_end(&mut self) -> Transition {
        loop {
            let transition = self.step();
            if transition.is_terminal() {
                return transition;
            }
        }
    }

    /// Drive the run to completion and return its outcome.
    pub fn run(mut self) -> Outcome {
        let end = self.run_to_end();
        debug!(steps = self.steps, visited = self.visited.len(), ?end, "patrol finished");
        match end {
            Transition::Exited => Outcome::Exited(self.visited),
            _ => Outcome::Looped,
        }
    }

    /// Apply the configured detector to the state about to be expanded.
    fn loop_detected(&mut self) -> bool {
        match self.detection {
            LoopDetection::RepeatedState => !self.seen.insert((self.position, self.heading)),
            LoopDetection::StepBudget(budget) => self.steps >= budget,
        }
    }
}

impl std::fmt::Debug for Patrol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Patrol")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("heading", &self.heading)
            .field("steps", &self.steps)
            .field("visited", &self.visited.len())
            .finish()
    }
}

/// Run the unmodified patrol over `grid`'s own obstructions.
pub fn baseline(grid: &Grid, config: &PatrolConfig) -> Outcome {
    Patrol::new(grid, grid.obstructions(), config.loop_detection).run()
}
