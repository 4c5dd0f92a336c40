//! Placement descriptors linking a grid position to the map boundary
//!
//! One record covers the three roles a position plays during generation: an
//! empty cell next to the map (no tile), a tile tried at some rotation, and a
//! tile committed to the map. The matched segment is derived from the
//! boundary at the time the record was built and is never authoritative.

use crate::geometry::{Boundary, BoundaryStep, Domain, Label, Orientation, Segment, Vector};
use crate::io::error::Result;
use crate::tileset::Tile;
use std::fmt;

/// A grid position, optionally carrying a rotated tile, matched against the map boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Bottom-left corner of the cell
    pub position: Vector,
    /// Counter-clockwise quarter turns applied to the tile
    pub rotation: usize,
    /// Tile placed or tried here
    pub tile: Option<Tile>,
    segment: Option<Segment>,
}

impl Placement {
    /// Empty cell matched against the boundary
    ///
    /// The segment is kept only when `segments` holds exactly one run; zero or
    /// several runs mark the position as unknown or forbidden.
    pub fn positioned(position: Vector, segments: &[Segment]) -> Self {
        let segment = match segments {
            [segment] => Some(*segment),
            _ => None,
        };
        Self {
            position,
            rotation: 0,
            tile: None,
            segment,
        }
    }

    /// Empty cell on the `domain` side of a boundary edge
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if `border` repeats a vertex
    pub fn from_boundary_edge(
        border: &Boundary,
        point: Vector,
        edge: Vector,
        domain: Domain,
    ) -> Result<Self> {
        let mut footprint =
            Boundary::from_edge(point, edge, Orientation::CounterClockwise, domain)?;
        let position = footprint.bottom_left().unwrap_or(point);
        footprint.rotate_to_start_with(position);
        Ok(Self::positioned(
            position,
            &border.common_segments(&footprint)?,
        ))
    }

    /// Tile placed at `position` with `rotation`
    pub fn placed(tile: Tile, position: Vector, rotation: usize, segment: Option<Segment>) -> Self {
        Self {
            position,
            rotation: rotation % 4,
            tile: Some(tile),
            segment,
        }
    }

    /// Same position and segment, carrying `tile` at `rotation`
    #[must_use]
    pub fn with_tile(&self, tile: Tile, rotation: usize) -> Self {
        Self::placed(tile, self.position, rotation, self.segment)
    }

    /// Matched segment, or `None` when unknown or forbidden
    pub const fn matched_segment(&self) -> Option<Segment> {
        self.segment
    }

    /// Matched segment, reading `(0, 0, 0)` when unknown or forbidden
    pub const fn segment(&self) -> Segment {
        match self.segment {
            Some(segment) => segment,
            None => Segment::EMPTY,
        }
    }

    /// Number of edges shared with the boundary
    pub const fn segment_length(&self) -> usize {
        self.segment().length
    }

    /// Manhattan distance of the cell to the map center
    pub const fn l1_distance(&self) -> i64 {
        self.position.l1_distance()
    }

    /// Whether the cell cannot take a tile
    pub const fn is_forbidden(&self) -> bool {
        self.segment_length() == 0
    }

    /// Footprint of the cell with the given edge labels
    pub fn boundary_with(&self, labels: [Option<Label>; 4]) -> Boundary {
        Boundary::tile(self.position, labels)
    }

    /// Footprint labeled with the rotated tile sides, or unlabeled without a tile
    pub fn boundary(&self) -> Boundary {
        let labels = self
            .tile
            .as_ref()
            .map_or([None; 4], |tile| tile.edge_labels(self.rotation));
        self.boundary_with(labels)
    }

    /// Footprint edges shared with the boundary
    pub fn segment_steps(&self) -> Vec<BoundaryStep> {
        let Segment {
            other_start,
            length,
            ..
        } = self.segment();
        self.boundary()
            .iter_slice(other_start, other_start + length)
            .collect()
    }

    /// Footprint edges left on the outline once the cell is merged
    ///
    /// A cell with no shared edge yields its whole footprint.
    pub fn complement_steps(&self) -> Vec<BoundaryStep> {
        let Segment {
            other_start,
            length,
            ..
        } = self.segment();
        let footprint = self.boundary();
        if length == 0 {
            footprint.iter_all(other_start).collect()
        } else {
            footprint
                .iter_slice(other_start + length, other_start)
                .collect()
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tile {
            Some(tile) => write!(
                f,
                "{} at {} r={} segment={}",
                tile,
                self.position,
                self.rotation,
                self.segment()
            ),
            None => write!(f, "{} segment={}", self.position, self.segment()),
        }
    }
}
