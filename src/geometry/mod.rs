//! Planar geometry of the growing map
//!
//! This module contains the geometric building blocks including:
//! - Integer vectors for grid positions and edges
//! - Matched runs between two outlines
//! - Labeled cyclic boundaries with segment matching and merging

/// Cyclic labeled polygons and their matching operations
pub mod boundary;
/// Matched runs between two boundaries
pub mod segment;
/// Integer 2D vectors
pub mod vector;

pub use boundary::{Boundary, BoundaryStep, Domain, Label, Orientation};
pub use segment::Segment;
pub use vector::Vector;
