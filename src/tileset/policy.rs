//! River placement policies and the schedule of tilesets fed to the engine
//!
//! A tileset is expanded by cardinality and carved into batches by a chain of
//! [`TileSubset`]s. The chain depends on whether the tileset holds river
//! tiles, whether it is the first one placed on the map, and on the river
//! placement policy.

use crate::tileset::subset::{TileSubset, partition_by_subsets};
use crate::tileset::tile::Tile;
use clap::ValueEnum;
use rand::Rng;
use std::fmt;

/// How the river tileset is reused across the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum RiverPlacement {
    /// Place the river tileset once; later passes drop river tiles
    #[default]
    SingleTileset,
    /// As `SingleTileset`, without T-shaped river tiles
    SingleTilesetNoTee,
    /// Start a new river on every pass
    ReuseTileset,
    /// As `ReuseTileset`, without T-shaped river tiles
    ReuseTilesetNoTee,
    /// Extend the first river on later passes instead of starting new ones
    ReuseTilesetLongRiver,
    /// As `ReuseTilesetLongRiver`, without T-shaped river tiles
    ReuseTilesetLongRiverNoTee,
}

impl RiverPlacement {
    /// River tiles are only placed on the first pass
    pub const fn is_single_use(self) -> bool {
        matches!(self, Self::SingleTileset | Self::SingleTilesetNoTee)
    }

    /// Later passes grow the existing river
    pub const fn is_long_river(self) -> bool {
        matches!(
            self,
            Self::ReuseTilesetLongRiver | Self::ReuseTilesetLongRiverNoTee
        )
    }

    /// T-shaped river tiles are dropped
    pub const fn excludes_tee(self) -> bool {
        matches!(
            self,
            Self::SingleTilesetNoTee | Self::ReuseTilesetNoTee | Self::ReuseTilesetLongRiverNoTee
        )
    }

    /// Subset chain carving a river tileset into batches
    pub fn river_subsets(self, first_tileset: bool) -> Vec<TileSubset> {
        if self.is_single_use() && !first_tileset {
            return vec![TileSubset::river_exclude()];
        }

        let sources = if self.is_long_river() && !first_tileset {
            0
        } else {
            1
        };
        let mut sinks = if self.excludes_tee() { 1 } else { 2 };
        if self.is_long_river() {
            sinks -= 1;
        }

        let mut subsets = vec![TileSubset::river_source(Some(sources))];
        if self.excludes_tee() {
            subsets.push(TileSubset::river_exclude_t_shaped());
        }
        subsets.push(TileSubset::river_not_source_nor_sink());
        subsets.push(TileSubset::river_sink(Some(sinks)));
        subsets
    }
}

impl fmt::Display for RiverPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Repeat every tile according to its cardinality
pub fn expand_cardinality(tileset: &[Tile]) -> Vec<Tile> {
    tileset
        .iter()
        .flat_map(|tile| std::iter::repeat_n(tile, tile.cardinality))
        .cloned()
        .collect()
}

/// Subset chain for a tileset
pub fn subset_chain(
    tileset: &[Tile],
    first_tileset: bool,
    policy: RiverPlacement,
) -> Vec<TileSubset> {
    if tileset.iter().any(Tile::is_river) {
        policy.river_subsets(first_tileset)
    } else if first_tileset {
        vec![TileSubset::regular_start(), TileSubset::shuffle_remaining()]
    } else {
        vec![TileSubset::shuffle_remaining()]
    }
}

/// Expand and carve a tileset into ordered placement batches
pub fn shuffle_tileset<R: Rng + ?Sized>(
    tileset: &[Tile],
    first_tileset: bool,
    policy: RiverPlacement,
    rng: &mut R,
) -> Vec<Vec<Tile>> {
    let subsets = subset_chain(tileset, first_tileset, policy);
    partition_by_subsets(&subsets, expand_cardinality(tileset), rng)
}

/// Which of the two tilesets a schedule slot refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TilesetKind {
    /// Tiles tagged `river`
    River,
    /// Every other tile
    Regular,
}

/// Order in which the river and regular tilesets are placed
///
/// Each item is one cycle: the river tileset (when there is one and it is
/// due) followed by `max(1, river_period)` regular passes. A `river_period`
/// of zero places the river tileset in the first cycle only. A finite
/// schedule has exactly one cycle; an infinite one never ends.
#[derive(Debug, Clone)]
pub struct TilesetSchedule {
    has_river: bool,
    river_period: usize,
    infinite: bool,
    cycle: usize,
}

impl TilesetSchedule {
    /// Create a schedule
    pub const fn new(has_river: bool, river_period: usize, infinite: bool) -> Self {
        Self {
            has_river,
            river_period,
            infinite,
            cycle: 0,
        }
    }

    /// Number of cycles yielded so far
    pub const fn cycles(&self) -> usize {
        self.cycle
    }
}

impl Iterator for TilesetSchedule {
    type Item = Vec<TilesetKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cycle > 0 && !self.infinite {
            return None;
        }

        let mut slots = Vec::with_capacity(self.river_period.max(1) + 1);
        if self.has_river {
            if self.river_period > 0 || self.cycle == 0 {
                slots.push(TilesetKind::River);
            }
            slots.extend(std::iter::repeat_n(
                TilesetKind::Regular,
                self.river_period.max(1),
            ));
        } else {
            slots.push(TilesetKind::Regular);
        }

        self.cycle += 1;
        Some(slots)
    }
}
