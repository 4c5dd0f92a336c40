//! Tile descriptors: four labeled sides, a use count and free-form tags

use crate::geometry::Label;
use crate::io::configuration::{
    CITY_TAG, LAKE_TAG, RIVER_LABEL, RIVER_TAG, SOURCE_TAG, START_TAG,
};
use std::fmt;
use std::path::PathBuf;

/// A game tile as described by a tileset file
///
/// Side labels are ordered bottom, right, top, left, which is the
/// counter-clockwise edge order of a tile footprint walked from its
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Index of the tile in the loaded tileset
    pub id: usize,
    /// Side labels in footprint edge order
    pub labels: [Label; 4],
    /// Number of copies of this tile in one pass over the tileset
    pub cardinality: usize,
    /// Free-form tags such as `river`, `source`, `lake` or `start`
    pub tags: Vec<String>,
    /// Optional artwork for external renderers
    pub image: Option<PathBuf>,
}

impl Tile {
    /// Create a single-use untagged tile
    pub const fn new(id: usize, labels: [Label; 4]) -> Self {
        Self {
            id,
            labels,
            cardinality: 1,
            tags: Vec::new(),
            image: None,
        }
    }

    /// Create a tile from a four-character side description such as `"FPTP"`
    ///
    /// Returns `None` when the description does not have exactly four characters.
    pub fn from_description(id: usize, description: &str) -> Option<Self> {
        let mut chars = description.chars();
        let labels = [chars.next()?, chars.next()?, chars.next()?, chars.next()?];
        chars.next().is_none().then(|| Self::new(id, labels))
    }

    /// Set the number of copies per pass
    #[must_use]
    pub const fn with_cardinality(mut self, cardinality: usize) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Replace the tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach an artwork path
    #[must_use]
    pub fn with_image(mut self, image: PathBuf) -> Self {
        self.image = Some(image);
        self
    }

    /// Whether the tile carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Part of the river tileset
    pub fn is_river(&self) -> bool {
        self.has_tag(RIVER_TAG)
    }

    /// River tile where a river begins
    pub fn is_source(&self) -> bool {
        self.is_river() && self.has_tag(SOURCE_TAG)
    }

    /// River tile where a river ends
    pub fn is_lake(&self) -> bool {
        self.is_river() && self.has_tag(LAKE_TAG)
    }

    /// Part of the composite start city
    pub fn is_city_part(&self) -> bool {
        self.has_tag(CITY_TAG)
    }

    /// Preferred first tile of a regular tileset
    pub fn is_start(&self) -> bool {
        self.has_tag(START_TAG)
    }

    /// Number of sides carrying the river label
    pub fn river_sides(&self) -> usize {
        self.labels.iter().filter(|&&label| label == RIVER_LABEL).count()
    }

    /// Side labels after `rotation` counter-clockwise quarter turns
    ///
    /// The label on side `k` of the rotated tile is the label that was on side
    /// `k - rotation` (modulo 4).
    pub fn rotated_labels(&self, rotation: usize) -> [Label; 4] {
        let mut labels = self.labels;
        labels.rotate_right(rotation % 4);
        labels
    }

    /// Side labels as boundary edge labels
    pub fn edge_labels(&self, rotation: usize) -> [Option<Label>; 4] {
        self.rotated_labels(rotation).map(Some)
    }

    /// Side description string such as `"FPTP"`
    pub fn description(&self) -> String {
        self.labels.iter().collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile #{} ({})", self.id, self.description())?;
        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}
