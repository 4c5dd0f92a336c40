//! Tile subsets used to carve a tileset into ordered placement batches

use crate::io::configuration::{LAKE_TAG, SOURCE_TAG};
use crate::tileset::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;

/// Membership test of a tile subset
pub type TilePredicate = fn(&Tile) -> bool;

/// A named slice of a tileset
///
/// Partitioning keeps the tiles matching the predicate, optionally shuffled
/// and truncated, and hands the others over to the next subset.
#[derive(Debug, Clone, Copy)]
pub struct TileSubset {
    /// Short name used in log messages
    pub name: &'static str,
    predicate: TilePredicate,
    shuffle: bool,
    output_n: Option<usize>,
}

impl TileSubset {
    /// Create a subset from its predicate
    ///
    /// `output_n` bounds the number of kept tiles; `None` keeps them all.
    pub const fn new(
        name: &'static str,
        predicate: TilePredicate,
        shuffle: bool,
        output_n: Option<usize>,
    ) -> Self {
        Self {
            name,
            predicate,
            shuffle,
            output_n,
        }
    }

    /// Whether `tile` belongs to the subset
    pub fn contains(&self, tile: &Tile) -> bool {
        (self.predicate)(tile)
    }

    /// Split `tiles` into the kept selection and the remaining tiles
    ///
    /// Matching tiles beyond `output_n` are dropped from both halves.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        tiles: Vec<Tile>,
        rng: &mut R,
    ) -> (Vec<Tile>, Vec<Tile>) {
        let (mut selection, remaining): (Vec<Tile>, Vec<Tile>) =
            tiles.into_iter().partition(|tile| self.contains(tile));

        if self.shuffle && self.output_n != Some(0) {
            selection.shuffle(rng);
        }
        if let Some(n) = self.output_n {
            selection.truncate(n);
        }

        (selection, remaining)
    }

    /// One non-river start tile
    pub const fn regular_start() -> Self {
        Self::new("regular_start", is_regular_start, true, Some(1))
    }

    /// All river tiles, in tileset order
    pub const fn river() -> Self {
        Self::new("river", Tile::is_river, false, None)
    }

    /// Up to `n` river sources (all when `None`)
    pub const fn river_source(n: Option<usize>) -> Self {
        Self::new("river_source", Tile::is_source, true, n)
    }

    /// Drops river tiles with three river sides
    pub const fn river_exclude_t_shaped() -> Self {
        Self::new("river_exclude_t_shaped", is_t_shaped_river, true, Some(0))
    }

    /// Drops every river tile
    pub const fn river_exclude() -> Self {
        Self::new("river_exclude", Tile::is_river, true, Some(0))
    }

    /// River tiles that are neither sources nor lakes
    pub const fn river_not_source_nor_sink() -> Self {
        Self::new("river_not_source_nor_sink", is_river_course, true, None)
    }

    /// Up to `n` river lakes (all when `None`)
    pub const fn river_sink(n: Option<usize>) -> Self {
        Self::new("river_sink", Tile::is_lake, true, n)
    }

    /// Every remaining tile, shuffled
    pub const fn shuffle_remaining() -> Self {
        Self::new("shuffle_remaining", any_tile, true, None)
    }

    /// Parts of the composite start city, in tileset order
    pub const fn carcassonne_city() -> Self {
        Self::new("carcassonne_city", Tile::is_city_part, false, None)
    }
}

fn is_regular_start(tile: &Tile) -> bool {
    tile.is_start() && !tile.is_river()
}

fn is_t_shaped_river(tile: &Tile) -> bool {
    tile.is_river() && tile.river_sides() == 3
}

fn is_river_course(tile: &Tile) -> bool {
    tile.is_river() && !tile.has_tag(SOURCE_TAG) && !tile.has_tag(LAKE_TAG)
}

const fn any_tile(_: &Tile) -> bool {
    true
}

/// Drop tiles no subset claimed, warning about each one
///
/// Returns the number of dropped tiles.
pub fn exclude_unclaimed(tiles: Vec<Tile>) -> usize {
    for tile in &tiles {
        log::warn!("Excluded tile: {tile}");
    }
    tiles.len()
}

/// Apply `subsets` in order, each one taking from what the previous ones left
///
/// Returns one batch per subset; whatever no subset claimed is excluded.
pub fn partition_by_subsets<R: Rng + ?Sized>(
    subsets: &[TileSubset],
    tiles: Vec<Tile>,
    rng: &mut R,
) -> Vec<Vec<Tile>> {
    let mut remaining = tiles;
    let mut batches = Vec::with_capacity(subsets.len());

    for subset in subsets {
        let (selection, rest) = subset.partition(remaining, rng);
        log::debug!("Subset {} selected {} tiles", subset.name, selection.len());
        batches.push(selection);
        remaining = rest;
    }

    let excluded = exclude_unclaimed(remaining);
    if excluded > 0 {
        log::debug!("{excluded} tiles excluded from the tileset");
    }
    batches
}
