//! Map generation driver feeding scheduled tilesets to the placement engine

use crate::algorithm::engine::PlacementEngine;
use crate::io::configuration::{
    CITY_ORIGIN, CITY_TILE_COUNT, DEFAULT_MAX_CANDIDATES, DEFAULT_RIVER_PERIOD,
};
use crate::io::error::{Result, WithOperation, invalid_parameter};
use crate::io::sink::PlacementSink;
use crate::tileset::{
    CompositeTile, RiverPlacement, Tile, TileSubset, TilesetKind, TilesetSchedule,
    shuffle_tileset,
};
use rand::{SeedableRng, rngs::StdRng};

/// Parameters of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Total number of tiles to place; `None` places each tileset once
    pub max_tiles: Option<usize>,
    /// How the river tileset is reused
    pub river_policy: RiverPlacement,
    /// Regular passes between two river passes; zero uses the river tileset once
    pub river_period: usize,
    /// Valid placements gathered per search before picking one
    pub max_candidates: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tiles: None,
            river_policy: RiverPlacement::default(),
            river_period: DEFAULT_RIVER_PERIOD,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Totals of a generation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Tiles committed to the map
    pub placed: usize,
    /// Tiles abandoned because no pass over their batch made progress
    pub not_placed: usize,
    /// The run stopped on the tile budget
    pub budget_reached: bool,
    /// Tiles of the composite start city, outside the budget
    pub city_tiles: usize,
}

/// Seeded map generator
///
/// Splits the tileset into city, river and regular tiles. The city, when
/// there is one, is laid first; then the generator walks the tileset
/// schedule, carves each scheduled tileset into batches and places them.
pub struct MapGenerator<S> {
    engine: PlacementEngine<S>,
    city: CompositeTile,
    river_tileset: Vec<Tile>,
    regular_tileset: Vec<Tile>,
    config: GenerationConfig,
    rng: StdRng,
}

impl<S: PlacementSink> MapGenerator<S> {
    /// Create a generator over `tileset`
    ///
    /// # Errors
    ///
    /// Returns an error if the tileset holds no tile with a non-zero cardinality
    pub fn new(tileset: Vec<Tile>, config: GenerationConfig, seed: u64, sink: S) -> Result<Self> {
        if tileset.iter().all(|tile| tile.cardinality == 0) {
            return Err(invalid_parameter(
                "tileset",
                &tileset.len(),
                &"no tiles to place",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let (city_tileset, tileset) = TileSubset::carcassonne_city().partition(tileset, &mut rng);
        let (river_tileset, regular_tileset) = TileSubset::river().partition(tileset, &mut rng);
        log::debug!(
            "Tileset split into {} city, {} river and {} regular tiles",
            city_tileset.len(),
            river_tileset.len(),
            regular_tileset.len()
        );
        if !city_tileset.is_empty() && city_tileset.len() != CITY_TILE_COUNT {
            log::warn!(
                "Expected {CITY_TILE_COUNT} tiles for the city of Carcassonne, found {}",
                city_tileset.len()
            );
        }

        Ok(Self {
            engine: PlacementEngine::new(sink).with_max_candidates(config.max_candidates),
            city: CompositeTile::from_tiles(&city_tileset),
            river_tileset,
            regular_tileset,
            config,
            rng,
        })
    }

    /// The engine holding the current map
    pub const fn engine(&self) -> &PlacementEngine<S> {
        &self.engine
    }

    /// Release the event receiver
    pub fn into_sink(self) -> S {
        self.engine.into_sink()
    }

    /// Run the whole schedule
    ///
    /// The start city is laid at [`CITY_ORIGIN`] before anything else, and
    /// the first scheduled tileset then grows around it like any later one.
    /// Without a tile budget each tileset is placed once. With one, the
    /// schedule repeats until the budget is used up, or until a full cycle
    /// places nothing.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a placement fails
    pub fn run(&mut self) -> Result<GenerationReport> {
        let infinite = self.config.max_tiles.is_some();
        let mut schedule = TilesetSchedule::new(
            !self.river_tileset.is_empty(),
            self.config.river_period,
            infinite,
        );

        let mut report = GenerationReport::default();
        if !self.city.is_empty() {
            report.city_tiles = self
                .engine
                .place_composite(&self.city, CITY_ORIGIN)
                .with_operation("run")?;
        }
        let mut first_tileset = report.city_tiles == 0;

        for cycle in schedule.by_ref() {
            let placed_before = report.placed;

            for kind in cycle {
                let tileset = match kind {
                    TilesetKind::River => &self.river_tileset,
                    TilesetKind::Regular => &self.regular_tileset,
                };
                let batches = shuffle_tileset(
                    tileset,
                    first_tileset,
                    self.config.river_policy,
                    &mut self.rng,
                );

                for batch in &batches {
                    let batch_report = self.engine.place_batch(batch, self.config.max_tiles)?;
                    report.placed += batch_report.placed;
                    report.not_placed += batch_report.unplaced.len();
                    log::debug!(
                        "total_nb_tiles_placed: {} (+{})",
                        report.placed,
                        batch_report.placed
                    );
                    if batch_report.budget_reached {
                        report.budget_reached = true;
                        return Ok(report);
                    }
                }
                first_tileset = false;
            }

            if infinite && report.placed == placed_before {
                log::warn!("A full tileset cycle placed no tile, stopping");
                break;
            }
        }

        log::debug!("Tileset schedule ran {} cycles", schedule.cycles());
        Ok(report)
    }
}
