//! Benchmark profiles for the Patrol grid simulator.
//!
//! Provides deterministic grids sized like real puzzle inputs:
//!
//! - [`reference_profile`]: 130x130 grid, ~2% obstruction density
//! - [`stress_profile`]: 400x400 grid at the same density
//!
//! Seeds are searched so the baseline patrol exits, which is what makes
//! a profile useful for the loop search.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use patrol_engine::{baseline, PatrolConfig};
use patrol_grid::Grid;
use patrol_test_utils::random_grid;

/// Obstruction density of the reference puzzle inputs.
pub const REFERENCE_DENSITY: f64 = 0.02;

/// Build a 130x130 benchmark grid whose baseline exits.
pub fn reference_profile(seed: u64) -> Grid {
    exiting_grid(seed, 130, 130)
}

/// Build a 400x400 stress grid whose baseline exits.
pub fn stress_profile(seed: u64) -> Grid {
    exiting_grid(seed, 400, 400)
}

/// First grid at or after `seed` whose baseline patrol exits and crosses
/// at least a handful of cells.
fn exiting_grid(seed: u64, rows: usize, cols: usize) -> Grid {
    let config = PatrolConfig::default();
    (seed..)
        .map(|s| random_grid(s, rows, cols, REFERENCE_DENSITY))
        .find(|grid| {
            baseline(grid, &config)
                .visited()
                .is_some_and(|v| v.len() > rows.min(cols))
        })
        .expect("an exiting grid exists for some seed")
}
