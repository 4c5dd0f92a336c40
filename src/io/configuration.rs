//! Generation constants and runtime configuration defaults

use crate::geometry::{Label, Vector};

// Candidate search
/// Number of validated placements collected before the candidate scan stops
pub const DEFAULT_MAX_CANDIDATES: usize = 1;

// Keeps the key sequence of the candidate index within a third of its live size
/// Allocated-to-live ratio above which the candidate index drops its tombstones
pub const COMPACTION_RATIO: f64 = 4.0 / 3.0;

/// Edge label marking a river
pub const RIVER_LABEL: Label = 'R';

// Tags understood by the tile stream policy
/// Tag of river tiles
pub const RIVER_TAG: &str = "river";
/// Tag of river tiles where a river begins
pub const SOURCE_TAG: &str = "source";
/// Tag of river tiles where a river ends
pub const LAKE_TAG: &str = "lake";
/// Tag of the preferred first tile of a regular tileset
pub const START_TAG: &str = "start";
/// Tag of the tiles forming the composite start city
pub const CITY_TAG: &str = "carcassonne_city";
/// Prefix of the tag holding the offset of a city tile, as in `vect_2_1`
pub const CITY_OFFSET_PREFIX: &str = "vect_";

// Composite start city
/// Number of tiles in a complete city
pub const CITY_TILE_COUNT: usize = 12;
/// Map position of the city's first tile
pub const CITY_ORIGIN: Vector = Vector::new(-2, -1);

/// Number of `tagN` keys read from a tile description
pub const MAX_TAGS: usize = 10;

// Tileset scheduling
/// Regular passes between two uses of the river tileset
pub const DEFAULT_RIVER_PERIOD: usize = 1;

// Output settings
/// Side of one rendered tile in pixels
pub const DEFAULT_TILE_PIXELS: u32 = 32;
/// Upper bound on the rendered map side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Default path of the rendered map
pub const DEFAULT_OUTPUT: &str = "map.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
