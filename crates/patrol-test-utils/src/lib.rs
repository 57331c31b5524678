//! Test utilities and fixtures for Patrol development.
//!
//! Provides the reference grids used across unit tests, integration
//! tests, and benchmarks ([`canonical_grid`], [`cyclic_grid`],
//! [`straight_exit_grid`]), a seeded random grid generator, and a
//! scan-only [`Obstacles`](patrol_grid::Obstacles) wrapper for
//! cross-checking indexed lookups.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;

pub use fixtures::{
    canonical_grid, cyclic_grid, straight_exit_grid, ScanOnly, CANONICAL, CANONICAL_PLACEMENTS,
    CYCLIC, STRAIGHT_EXIT,
};
pub use generate::{random_grid, random_grid_text};
