//! Composite tiles: several unit tiles laid out at fixed offsets
//!
//! The composite start city is described by tiles tagged `carcassonne_city`,
//! each carrying its offset in a `vect_<x>_<y>` tag. The footprints are merged
//! in ascending offset order, so every new tile touches the tiles already
//! merged along a single run of edges.

use crate::geometry::{Boundary, Vector};
use crate::io::configuration::CITY_OFFSET_PREFIX;
use crate::io::error::{Result, WithOperation};
use crate::tileset::tile::Tile;

/// One unit tile of a composite and its offset from the composite origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositePart {
    /// The unit tile
    pub tile: Tile,
    /// Cell offset from the composite origin
    pub offset: Vector,
}

/// A super-tile made of several unit tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeTile {
    parts: Vec<CompositePart>,
}

/// Offset carried by a `vect_<x>_<y>` or `Vect_<x>_<y>` tag
pub fn parse_offset_tag(tag: &str) -> Option<Vector> {
    let coordinates = tag
        .strip_prefix(CITY_OFFSET_PREFIX)
        .or_else(|| tag.strip_prefix("Vect_"))?;
    let (x, y) = coordinates.split_once('_')?;
    Some(Vector::from((x.parse::<i32>().ok()?, y.parse::<i32>().ok()?)))
}

impl CompositeTile {
    /// Create an empty composite
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Build a composite from tagged tiles, skipping tiles without an offset
    pub fn from_tiles<'a, I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        let mut composite = Self::new();
        for tile in tiles {
            composite.append(tile.clone());
        }
        composite
    }

    /// Add `tile` at the offset found in its tags
    ///
    /// Returns `false`, and leaves the composite unchanged, when no tag holds
    /// an offset. The last offset tag wins when there are several.
    pub fn append(&mut self, tile: Tile) -> bool {
        let Some(offset) = tile.tags.iter().rev().find_map(|tag| parse_offset_tag(tag)) else {
            log::warn!(
                "Could not find the offset pattern in the tags for tile {tile}. Tags = {:?}",
                tile.tags
            );
            return false;
        };
        self.parts.push(CompositePart { tile, offset });
        self.parts.sort_by_key(|part| part.offset);
        true
    }

    /// Number of unit tiles
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the composite holds no tile
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Unit tiles in ascending offset order
    pub fn parts(&self) -> &[CompositePart] {
        &self.parts
    }

    /// Outline of the composite placed with its origin at `origin`
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a part does not touch the parts
    /// before it along exactly one run of edges
    pub fn boundary(&self, origin: Vector) -> Result<Boundary> {
        let mut border = Boundary::new();
        for part in &self.parts {
            let footprint = Boundary::tile(origin + part.offset, part.tile.edge_labels(0));
            border.merge(&footprint).with_operation("composite_boundary")?;
        }
        Ok(border)
    }
}
