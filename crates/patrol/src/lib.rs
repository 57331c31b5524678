//! Patrol: a guard patrol simulator on a 2D obstruction grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Patrol sub-crates and adds a typed [`solve`] entry point that answers
//! both questions asked of a map:
//!
//! - **Part A**: how many distinct cells the unmodified patrol visits
//!   before leaving the grid.
//! - **Part B**: how many single extra obstructions, placed on a visited
//!   non-start cell, trap the patrol in a loop.
//!
//! # Quick start
//!
//! ```rust
//! use patrol::prelude::*;
//!
//! let input = "\
//! ....#.....
//! .........#
//! ..........
//! ..#.......
//! .......#..
//! ..........
//! .#..^.....
//! ........#.
//! #.........
//! ......#...";
//! let answers = patrol::solve(input, &PatrolConfig::default()).unwrap();
//! assert_eq!(answers.visited, 41);
//! assert_eq!(answers.looping_placements, 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `patrol-core` | Positions, bounds, headings, grid errors |
//! | [`grid`] | `patrol-grid` | Grid parsing, obstruction sets, ray search, path segments |
//! | [`engine`] | `patrol-engine` | Patrol state machine and parallel loop search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use patrol_engine::{
    ConfigError, LoopSearch, LoopSearchReport, Patrol, PatrolConfig, SearchError, Transition,
    VisitedSet,
};
use patrol_grid::{Grid, GridError, GridSymbols};

/// Core value types (`patrol-core`).
pub use patrol_core as types;

/// Grid model and obstruction search (`patrol-grid`).
///
/// [`grid::Grid`] is the parsed map; [`grid::Obstacles`] is the seam the
/// simulator looks through, implemented by [`grid::ObstructionSet`] and the
/// zero-copy [`grid::Overlay`].
pub use patrol_grid as grid;

/// Simulation engine (`patrol-engine`).
///
/// [`engine::Patrol`] for single runs, [`engine::LoopSearch`] for the
/// worker-pool candidate search.
pub use patrol_engine as engine;

/// Common imports for typical Patrol usage.
///
/// ```rust
/// use patrol::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use patrol_core::{Bounds, GridError, Heading, Position};

    // Grid
    pub use patrol_grid::{next_obstruction, Grid, GridSymbols, Obstacles, ObstructionSet, Overlay};

    // Engine
    pub use patrol_engine::{
        LoopDetection, LoopSearch, LoopSearchReport, Outcome, Patrol, PatrolConfig, SearchError,
        SearchMetrics, Transition, VisitedSet,
    };

    // Facade
    pub use crate::{run_baseline, solve, Answers, Baseline, SolveError};
}

// ── Answers ────────────────────────────────────────────────────────

/// Both answers for one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Distinct cells on the baseline path (Part A). Zero if the baseline
    /// itself loops.
    pub visited: usize,
    /// Placements that make the patrol loop (Part B).
    pub looping_placements: usize,
}

// ── SolveError ─────────────────────────────────────────────────────

/// Errors from the [`solve`] entry points.
#[derive(Debug)]
pub enum SolveError {
    /// The input text is not a valid map.
    Grid(GridError),
    /// The supplied [`PatrolConfig`] is invalid.
    Config(ConfigError),
    /// The loop search did not produce a complete count.
    Search(SearchError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(_) => write!(f, "invalid grid"),
            Self::Config(_) => write!(f, "invalid patrol configuration"),
            Self::Search(_) => write!(f, "loop search failed"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for SolveError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ── Entry points ───────────────────────────────────────────────────

/// Parse `input` with the default symbols and compute both answers.
///
/// # Errors
///
/// [`SolveError::Grid`] for malformed input, [`SolveError::Config`] for an
/// invalid `config`, [`SolveError::Search`] if a search worker fails.
pub fn solve(input: &str, config: &PatrolConfig) -> Result<Answers, SolveError> {
    solve_with(input, GridSymbols::default(), config)
}

/// [`solve`] with a custom map alphabet.
pub fn solve_with(
    input: &str,
    symbols: GridSymbols,
    config: &PatrolConfig,
) -> Result<Answers, SolveError> {
    let grid = parse_grid(input, symbols)?;
    let base = run_baseline(&grid, config)?;
    let report = part_b_from(&grid, config, &base)?;
    Ok(Answers {
        visited: base.visited_count(),
        looping_placements: report.looping_count(),
    })
}

/// Parse map text: one row per line, blank lines skipped, `\r\n` accepted.
pub fn parse_grid(input: &str, symbols: GridSymbols) -> Result<Grid, GridError> {
    Grid::parse_with(input.lines().filter(|line| !line.is_empty()), symbols)
}

// ── Baseline ───────────────────────────────────────────────────────

/// One run of the unmodified patrol, kept so Part A, Part B and the
/// rendered map all share it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Baseline {
    path: VisitedSet,
    looped: bool,
}

impl Baseline {
    /// Whether the patrol was judged to loop instead of exiting.
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// Cells walked, up to the exit or the point the loop was detected.
    pub fn path(&self) -> &VisitedSet {
        &self.path
    }

    /// Part A: distinct cells visited before exiting, or zero if the
    /// patrol loops.
    pub fn visited_count(&self) -> usize {
        if self.looped {
            0
        } else {
            self.path.len()
        }
    }

    /// Draw the walked path over `grid`.
    pub fn render(&self, grid: &Grid) -> String {
        grid.render(|pos| self.path.contains(pos))
    }
}

/// Run the unmodified patrol once.
pub fn run_baseline(grid: &Grid, config: &PatrolConfig) -> Result<Baseline, ConfigError> {
    config.validate()?;
    let mut patrol = Patrol::new(grid, grid.obstructions(), config.loop_detection);
    let looped = patrol.run_to_end() == Transition::Looped;
    Ok(Baseline {
        path: patrol.into_visited(),
        looped,
    })
}

/// Part A alone: distinct cells visited by the unmodified patrol.
///
/// Returns zero when the baseline loops.
pub fn part_a(grid: &Grid, config: &PatrolConfig) -> Result<usize, ConfigError> {
    Ok(run_baseline(grid, config)?.visited_count())
}

/// Part B with the full search report.
pub fn part_b(grid: &Grid, config: &PatrolConfig) -> Result<LoopSearchReport, SolveError> {
    let search = LoopSearch::new(config.clone())?;
    Ok(search.run(grid)?)
}

/// Part B seeded with a baseline from [`run_baseline`], so the unmodified
/// patrol is not walked a second time.
pub fn part_b_from(
    grid: &Grid,
    config: &PatrolConfig,
    base: &Baseline,
) -> Result<LoopSearchReport, SolveError> {
    let search = LoopSearch::new(config.clone())?;
    let path = (!base.looped).then_some(&base.path);
    Ok(search.run_from(grid, path)?)
}

/// Draw the baseline path over the map.
///
/// A looping baseline still shows the path it walked.
pub fn render_path(grid: &Grid, config: &PatrolConfig) -> Result<String, ConfigError> {
    Ok(run_baseline(grid, config)?.render(grid))
}
