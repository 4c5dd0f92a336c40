//! Command-line interface growing a map from tileset description files

use crate::algorithm::executor::{GenerationConfig, GenerationReport, MapGenerator};
use crate::io::configuration::{
    DEFAULT_MAX_CANDIDATES, DEFAULT_OUTPUT, DEFAULT_RIVER_PERIOD, DEFAULT_TILE_PIXELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressSink;
use crate::io::sink::MapRecord;
use crate::io::tileset::load_tilesets;
use crate::tileset::{RiverPlacement, Tile};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilegrow")]
#[command(
    author,
    version,
    about = "Grow a randomized Carcassonne-style map from tileset descriptions"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Tileset description files (JSON)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of tiles to place, repeating the tilesets as needed (0: each tileset once)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub max_tiles: usize,

    /// Placement policy of the river tileset
    #[arg(long, value_enum, default_value_t = RiverPlacement::default())]
    pub river_policy: RiverPlacement,

    /// Regular passes between two uses of the river tileset (0: single use)
    #[arg(long, default_value_t = DEFAULT_RIVER_PERIOD)]
    pub river_period: usize,

    /// Random seed for reproducible generation (0: drawn from the system)
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Path of the rendered map
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side of one rendered tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: u32,

    /// Overlay candidate cells on the rendered map and log more details
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tile budget, `None` when each tileset is placed once
    pub const fn tile_budget(&self) -> Option<usize> {
        match self.max_tiles {
            0 => None,
            n => Some(n),
        }
    }

    /// Seed given on the command line, or a fresh one
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            0 => rand::random(),
            seed => seed,
        }
    }

    /// Generation parameters selected by the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            max_tiles: self.tile_budget(),
            river_policy: self.river_policy,
            river_period: self.river_period,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Default log filter for the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Loads the tilesets, grows the map and renders it
pub struct MapRunner {
    cli: Cli,
}

impl MapRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the whole generation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tileset file cannot be loaded or holds no tile
    /// - A placement breaks a map invariant
    /// - The map cannot be rendered or saved
    pub fn run(&self) -> Result<GenerationReport> {
        let tileset = load_tilesets(&self.cli.files)?;
        if tileset.is_empty() {
            return Err(invalid_parameter(
                "files",
                &self.cli.files.len(),
                &"no tiles loaded",
            ));
        }

        let seed = self.cli.resolve_seed();
        log::info!("Random seed: {seed}");
        if tileset.iter().any(Tile::is_river) {
            log::debug!("river_placement_policy: {}", self.cli.river_policy);
        }

        let total = self
            .cli
            .tile_budget()
            .unwrap_or_else(|| tileset.iter().map(|tile| tile.cardinality).sum());
        let sink = if self.cli.should_show_progress() {
            ProgressSink::new(MapRecord::new(), Some(total as u64))
        } else {
            ProgressSink::hidden(MapRecord::new())
        };

        let mut generator = MapGenerator::new(tileset, self.cli.generation_config(), seed, sink)?;
        let report = generator.run()?;
        let record = generator.into_sink().finish();

        if report.city_tiles > 0 {
            log::info!("city_tiles: {}", report.city_tiles);
        }
        log::info!("total_nb_tiles_not_placed: {}", report.not_placed);
        log::info!("total_nb_tiles_placed: {}", report.placed);

        export_map_as_png(&record, self.cli.tile_pixels, self.cli.debug, &self.cli.output)?;
        log::info!("Dumped map to {}", self.cli.output.display());

        Ok(report)
    }
}
