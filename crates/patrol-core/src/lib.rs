//! Core types for the Patrol grid simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate and heading vocabulary shared by every other crate in
//! the workspace, plus the error type for malformed grids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heading;
pub mod position;

pub use error::GridError;
pub use heading::Heading;
pub use position::{Bounds, Position};
