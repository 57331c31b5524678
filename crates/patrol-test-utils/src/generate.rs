//! Seeded random grid generation.
//!
//! Uses a ChaCha8 RNG so identical seeds produce identical maps on every
//! platform.

use patrol_grid::{Grid, GridSymbols};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate grid text of `rows x cols` cells.
///
/// Each cell is an obstruction with probability `density`; exactly one
/// free cell carries the start marker. `density` is clamped to `[0, 1]`.
///
/// # Panics
///
/// Panics if `rows` or `cols` is zero.
pub fn random_grid_text(seed: u64, rows: usize, cols: usize, density: f64) -> String {
    assert!(rows > 0 && cols > 0, "random grid needs at least one cell");
    let symbols = GridSymbols::default();
    let density = density.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let start = (rng.random_range(0..rows), rng.random_range(0..cols));
    let mut out = String::with_capacity(rows * (cols + 1));
    for r in 0..rows {
        for c in 0..cols {
            let glyph = if (r, c) == start {
                symbols.start
            } else if rng.random_bool(density) {
                symbols.obstruction
            } else {
                GridSymbols::FREE
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Parse the output of [`random_grid_text`].
pub fn random_grid(seed: u64, rows: usize, cols: usize, density: f64) -> Grid {
    random_grid_text(seed, rows, cols, density)
        .parse()
        .expect("generated grid is well formed")
}
