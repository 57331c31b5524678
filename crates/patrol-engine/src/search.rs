//! Parallel loop search.
//!
//! For every distinct non-start cell on the baseline path, replay the
//! patrol with one extra obstruction on that cell and count the runs
//! that loop. Trials are independent: a fixed pool of scoped worker
//! threads pulls candidates from a crossbeam queue and replies with a
//! verdict per candidate. Every worker is joined before the count is
//! read, and the count is a sum, so completion order never matters.
//!
//! A worker that panics is reported as [`SearchError::WorkerPanicked`];
//! its lost candidate is never folded into either outcome bucket.

use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Instant;

use patrol_core::Position;
use patrol_grid::Grid;
use tracing::{debug, warn};

use crate::config::{ConfigError, PatrolConfig};
use crate::metrics::SearchMetrics;
use crate::outcome::VisitedSet;
use crate::patrol::baseline;
use crate::worker::{worker_loop, Trial};

// ── SearchError ────────────────────────────────────────────────────

/// Errors from [`LoopSearch::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The supplied configuration is invalid.
    Config(ConfigError),
    /// Not a single worker thread could be spawned.
    SpawnFailed {
        /// The OS error description.
        reason: String,
    },
    /// A worker thread panicked before finishing its share.
    WorkerPanicked {
        /// Name of the failed worker thread.
        worker: String,
    },
    /// Fewer verdicts came back than candidates were queued.
    IncompleteResults {
        /// Candidates queued.
        expected: usize,
        /// Verdicts received.
        received: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::SpawnFailed { reason } => write!(f, "worker spawn failed: {reason}"),
            Self::WorkerPanicked { worker } => write!(f, "worker '{worker}' panicked"),
            Self::IncompleteResults { expected, received } => write!(
                f,
                "loop search incomplete: {received} of {expected} candidates reported"
            ),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── LoopSearchReport ───────────────────────────────────────────────

/// Result of a completed loop search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopSearchReport {
    /// Distinct cells on the baseline path, or `None` if the baseline
    /// itself looped (in which case no candidate is tried).
    pub baseline_visited: Option<usize>,
    /// Candidate cells whose placement makes the patrol loop, row-major.
    pub placements: Vec<Position>,
    /// Timing and volume counters.
    pub metrics: SearchMetrics,
}

impl LoopSearchReport {
    /// Number of looping placements.
    pub fn looping_count(&self) -> usize {
        self.placements.len()
    }
}

// ── LoopSearch ─────────────────────────────────────────────────────

/// Worker-pool driver for the loop search.
///
/// # Example
///
/// ```
/// use patrol_engine::{LoopSearch, PatrolConfig};
/// use patrol_grid::Grid;
///
/// let grid: Grid = "\
/// ....#.....
/// .........#
/// ..........
/// ..#.......
/// .......#..
/// ..........
/// .#..^.....
/// ........#.
/// #.........
/// ......#...".parse().unwrap();
/// let report = LoopSearch::new(PatrolConfig::default()).unwrap().run(&grid).unwrap();
/// assert_eq!(report.looping_count(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct LoopSearch {
    config: PatrolConfig,
}

impl LoopSearch {
    /// Validate `config` and build a search.
    pub fn new(config: PatrolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    /// Run the baseline, then one trial per candidate across the pool.
    pub fn run(&self, grid: &Grid) -> Result<LoopSearchReport, SearchError> {
        let started = Instant::now();
        let outcome = baseline(grid, &self.config);
        let baseline_us = elapsed_us(started);
        self.search(grid, outcome.visited(), started, baseline_us)
    }

    /// Run the candidate trials against a baseline path the caller has
    /// already computed with this search's loop detection.
    ///
    /// `path` is the exited baseline's visited set, or `None` if the
    /// baseline looped. `metrics.baseline_us` is zero.
    pub fn run_from(
        &self,
        grid: &Grid,
        path: Option<&VisitedSet>,
    ) -> Result<LoopSearchReport, SearchError> {
        self.search(grid, path, Instant::now(), 0)
    }

    fn search(
        &self,
        grid: &Grid,
        path: Option<&VisitedSet>,
        started: Instant,
        baseline_us: u64,
    ) -> Result<LoopSearchReport, SearchError> {
        let Some(visited) = path else {
            debug!("baseline patrol loops; no candidates to compare against");
            return Ok(LoopSearchReport {
                baseline_visited: None,
                placements: Vec::new(),
                metrics: SearchMetrics {
                    total_us: elapsed_us(started),
                    baseline_us,
                    ..SearchMetrics::default()
                },
            });
        };

        // Visited cells are already distinct; only the start is excluded.
        let candidates = visited.without(grid.start());
        let workers = self.config.resolved_worker_count().min(candidates.len());
        debug!(
            baseline_visited = visited.len(),
            candidates = candidates.len(),
            workers,
            "starting loop search"
        );

        let (trials, workers) = if candidates.is_empty() {
            (Vec::new(), 0)
        } else {
            self.fan_out(grid, &candidates, workers)?
        };

        if trials.len() != candidates.len() {
            return Err(SearchError::IncompleteResults {
                expected: candidates.len(),
                received: trials.len(),
            });
        }

        let mut placements: Vec<Position> = trials
            .iter()
            .filter(|t| t.looped)
            .map(|t| t.candidate)
            .collect();
        placements.sort_unstable();

        let metrics = SearchMetrics {
            total_us: elapsed_us(started),
            baseline_us,
            candidates: candidates.len(),
            looped: placements.len(),
            exited: candidates.len() - placements.len(),
            workers,
            trial_steps: trials.iter().map(|t| t.steps).sum(),
        };
        debug!(
            looped = metrics.looped,
            exited = metrics.exited,
            total_us = metrics.total_us,
            "loop search finished"
        );

        Ok(LoopSearchReport {
            baseline_visited: Some(visited.len()),
            placements,
            metrics,
        })
    }

    /// Queue every candidate, run the pool to completion, and collect
    /// the verdicts. Returns the verdicts and the number of workers that
    /// actually ran.
    fn fan_out(
        &self,
        grid: &Grid,
        candidates: &[Position],
        workers: usize,
    ) -> Result<(Vec<Trial>, usize), SearchError> {
        let (task_tx, task_rx) = crossbeam_channel::unbounded::<Position>();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<Trial>();
        for &candidate in candidates {
            // The receiver is held locally, so the queue cannot be closed.
            if task_tx.send(candidate).is_err() {
                break;
            }
        }
        drop(task_tx);

        let detection = self.config.loop_detection;
        let joined = thread::scope(|s| {
            let mut handles = Vec::with_capacity(workers);
            let mut spawn_error = None;
            for i in 0..workers {
                let name = format!("patrol-search-{i}");
                let task_rx = task_rx.clone();
                let reply_tx = reply_tx.clone();
                let spawned = thread::Builder::new()
                    .name(name.clone())
                    .spawn_scoped(s, move || worker_loop(task_rx, reply_tx, grid, detection));
                match spawned {
                    Ok(handle) => handles.push((name, handle)),
                    Err(e) => {
                        warn!(worker = %name, error = %e, "failed to spawn search worker");
                        spawn_error = Some(e.to_string());
                        break;
                    }
                }
            }

            let spawned = handles.len();
            let mut panicked = None;
            for (name, handle) in handles {
                if handle.join().is_err() {
                    warn!(worker = %name, "search worker panicked");
                    panicked.get_or_insert(name);
                }
            }
            (spawned, spawn_error, panicked)
        });

        let (spawned, spawn_error, panicked) = joined;
        if spawned == 0 {
            return Err(SearchError::SpawnFailed {
                reason: spawn_error.unwrap_or_else(|| "no workers requested".to_string()),
            });
        }
        if let Some(worker) = panicked {
            return Err(SearchError::WorkerPanicked { worker });
        }

        // Every worker has exited, so all verdicts are already queued.
        Ok((reply_rx.try_iter().collect(), spawned))
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Count the placements that trap the patrol, using the default config.
pub fn count_looping_placements(grid: &Grid) -> Result<usize, SearchError> {
    let search = LoopSearch::new(PatrolConfig::default())?;
    Ok(search.run(grid)?.looping_count())
}
