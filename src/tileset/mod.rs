//! Tiles and the policies turning a tileset into a stream of placement batches
//!
//! This module contains tileset-related functionality including:
//! - Tile descriptors with side labels, cardinality and tags
//! - Tile subsets selecting and shuffling parts of a tileset
//! - Composite tiles laid out from offset tags
//! - River placement policies and tileset scheduling

/// Composite tiles such as the start city
pub mod composite;
/// River placement policies and tileset scheduling
pub mod policy;
/// Tile subsets and batch partitioning
pub mod subset;
/// Tile descriptors
pub mod tile;

pub use composite::CompositeTile;
pub use policy::{RiverPlacement, TilesetKind, TilesetSchedule, shuffle_tileset};
pub use subset::TileSubset;
pub use tile::Tile;
