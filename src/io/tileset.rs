//! Tileset description files
//!
//! A tileset file is a JSON object holding a `tiles` array. Each tile has a
//! four-character side `description`, an optional `cardinality` (default 1),
//! an optional `img` path relative to the file, and up to ten tags stored
//! under the keys `tag0` to `tag9`.

use crate::io::configuration::MAX_TAGS;
use crate::io::error::{MapError, Result};
use crate::tileset::Tile;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TilesetDescription {
    tiles: Vec<TileDescription>,
}

#[derive(Debug, Deserialize)]
struct TileDescription {
    description: String,
    #[serde(default = "default_cardinality")]
    cardinality: usize,
    #[serde(default)]
    img: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

const fn default_cardinality() -> usize {
    1
}

impl TileDescription {
    fn tags(&self, path: &Path) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        for index in 0..MAX_TAGS {
            let key = format!("tag{index}");
            match self.extra.get(&key) {
                None => {}
                Some(Value::String(tag)) => tags.push(tag.clone()),
                Some(other) => {
                    return Err(MapError::InvalidTileset {
                        path: path.to_path_buf(),
                        reason: format!("{key} must be a string, found {other}"),
                    });
                }
            }
        }
        Ok(tags)
    }

    fn into_tile(self, id: usize, path: &Path, base_dir: &Path) -> Result<Tile> {
        let tags = self.tags(path)?;
        let tile = Tile::from_description(id, &self.description).ok_or_else(|| {
            MapError::InvalidTileset {
                path: path.to_path_buf(),
                reason: format!(
                    "description '{}' must have exactly four sides",
                    self.description
                ),
            }
        })?;
        let tile = tile.with_cardinality(self.cardinality).with_tags(tags);

        if tile.is_start() && tile.cardinality != 1 {
            return Err(MapError::InvalidTileset {
                path: path.to_path_buf(),
                reason: format!("start tile {tile} must have a cardinality of 1"),
            });
        }

        Ok(match self.img.filter(|img| !img.is_empty()) {
            Some(img) => tile.with_image(base_dir.join(img)),
            None => tile,
        })
    }
}

/// Parse a tileset description
///
/// Tiles with a zero cardinality are skipped. Kept tiles are numbered from
/// `first_id` in file order; image paths are resolved against `base_dir`.
/// `path` only labels errors.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a JSON tileset description
/// - A description does not have exactly four sides
/// - A tag is not a string
/// - A start tile has a cardinality other than 1
pub fn parse_tileset(
    json: &str,
    path: &Path,
    base_dir: &Path,
    first_id: usize,
) -> Result<Vec<Tile>> {
    let description: TilesetDescription =
        serde_json::from_str(json).map_err(|source| MapError::TilesetParse {
            path: path.to_path_buf(),
            source,
        })?;

    description
        .tiles
        .into_iter()
        .filter(|tile| tile.cardinality > 0)
        .enumerate()
        .map(|(offset, tile)| tile.into_tile(first_id + offset, path, base_dir))
        .collect()
}

/// Load one tileset file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid tileset
pub fn load_tileset_file(path: &Path, first_id: usize) -> Result<Vec<Tile>> {
    let json = std::fs::read_to_string(path).map_err(|source| MapError::TilesetLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let tiles = parse_tileset(&json, path, base_dir, first_id)?;

    let total: usize = tiles.iter().map(|tile| tile.cardinality).sum();
    if total > 0 {
        log::info!("Loaded {total} tiles from file {}", path.display());
    }
    Ok(tiles)
}

/// Load several tileset files into one tileset
///
/// Tile ids follow load order across all files.
///
/// # Errors
///
/// Returns the first loading error encountered
pub fn load_tilesets(paths: &[PathBuf]) -> Result<Vec<Tile>> {
    let mut tileset = Vec::new();
    for path in paths {
        let tiles = load_tileset_file(path, tileset.len())?;
        tileset.extend(tiles);
    }
    Ok(tileset)
}
