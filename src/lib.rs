//! Procedural Carcassonne-style map growth along a labeled polygonal boundary
//!
//! The map is kept as a single closed outline whose edges carry the labels of
//! the tile sides facing outwards. Each new tile is matched against the cells
//! adjacent to that outline, merged into it, and the cells around it are
//! re-ranked for the next tile.

#![forbid(unsafe_code)]

/// Placement engine, candidate index, selection and generation driver
pub mod algorithm;
/// Vectors, matched segments and labeled boundaries
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Tiles and the policies turning a tileset into placement batches
pub mod tileset;

pub use io::error::{MapError, Result};
