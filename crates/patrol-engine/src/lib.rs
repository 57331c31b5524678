//! Patrol simulation engine.
//!
//! Provides the [`Patrol`] state machine, which walks an agent across a
//! [`Grid`](patrol_grid::Grid) one straight run at a time until it leaves
//! the map or is judged to be looping, and the [`LoopSearch`] worker pool,
//! which replays the patrol once per candidate obstruction to find every
//! placement that traps the agent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod outcome;
pub mod patrol;
pub mod search;
mod worker;

pub use config::{ConfigError, LoopDetection, PatrolConfig};
pub use metrics::SearchMetrics;
pub use outcome::{Outcome, VisitedSet};
pub use patrol::{baseline, Patrol, Transition};
pub use search::{count_looping_placements, LoopSearch, LoopSearchReport, SearchError};
