//! Grid model and spatial queries for Patrol simulations.
//!
//! This crate turns raw text rows into an immutable [`Grid`] and answers
//! the two spatial questions the patrol state machine asks on every
//! transition:
//!
//! - [`next_obstruction`]: which obstruction lies nearest ahead of a cell
//!   along a heading, if any.
//! - [`segment`]: which cells the agent crosses on its way to the cell
//!   just short of that obstruction (or to the grid edge).
//!
//! # Obstacle sets
//!
//! Queries run against the [`Obstacles`] trait. [`ObstructionSet`] is the
//! parsed layout with per-lane indexes; [`Overlay`] adds one hypothetical
//! obstruction on top of a borrowed base set without copying it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod obstacles;
pub mod search;
pub mod segment;
pub mod symbols;

pub use grid::Grid;
pub use obstacles::{Obstacles, ObstructionSet, Overlay};
pub use patrol_core::{Bounds, GridError, Heading, Position};
pub use search::next_obstruction;
pub use segment::{segment, Segment, SegmentEnd};
pub use symbols::GridSymbols;
