//! Receivers of placement events and candidate diagnostics
//!
//! The engine reports every committed tile and every candidate cell it
//! re-evaluates. Renderers and progress displays plug in here.

use crate::algorithm::placement::Placement;
use crate::geometry::{Label, Vector};
use std::collections::HashMap;

/// A tile committed to the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEvent {
    /// Index of the tile in the loaded tileset
    pub tile_id: usize,
    /// Bottom-left corner of the cell
    pub position: Vector,
    /// Counter-clockwise quarter turns applied to the tile
    pub rotation: usize,
    /// Side labels after rotation, bottom, right, top, left
    pub labels: [Label; 4],
}

impl PlacementEvent {
    /// Event for a placement carrying a tile
    pub fn from_placement(placement: &Placement) -> Option<Self> {
        placement.tile.as_ref().map(|tile| Self {
            tile_id: tile.id,
            position: placement.position,
            rotation: placement.rotation,
            labels: tile.rotated_labels(placement.rotation),
        })
    }
}

/// Observer of the growing map
pub trait PlacementSink {
    /// A tile was committed
    fn on_placement(&mut self, event: &PlacementEvent);

    /// A candidate cell was re-evaluated; a length of zero marks it forbidden
    fn on_candidate(&mut self, _position: Vector, _segment_length: usize) {}
}

impl<S: PlacementSink + ?Sized> PlacementSink for &mut S {
    fn on_placement(&mut self, event: &PlacementEvent) {
        (**self).on_placement(event);
    }

    fn on_candidate(&mut self, position: Vector, segment_length: usize) {
        (**self).on_candidate(position, segment_length);
    }
}

/// Sink ignoring every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PlacementSink for NullSink {
    fn on_placement(&mut self, _event: &PlacementEvent) {}
}

/// Sink recording the map for later rendering
#[derive(Debug, Clone, Default)]
pub struct MapRecord {
    /// Committed tiles in placement order
    pub placements: Vec<PlacementEvent>,
    /// Latest segment length reported for each candidate cell
    pub candidates: HashMap<Vector, usize>,
}

impl MapRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest and largest cell positions of the placed tiles
    ///
    /// Candidate cells widen the box when `include_candidates` is set.
    pub fn bounds(&self, include_candidates: bool) -> Option<(Vector, Vector)> {
        let candidates = self
            .candidates
            .keys()
            .copied()
            .filter(|_| include_candidates);
        let mut cells = self
            .placements
            .iter()
            .map(|event| event.position)
            .chain(candidates);
        let first = cells.next()?;
        Some(cells.fold((first, first), |(min, max), cell| {
            (
                Vector::new(min.x.min(cell.x), min.y.min(cell.y)),
                Vector::new(max.x.max(cell.x), max.y.max(cell.y)),
            )
        }))
    }

    /// Event of the tile committed at `position`
    pub fn tile_at(&self, position: Vector) -> Option<&PlacementEvent> {
        self.placements
            .iter()
            .find(|event| event.position == position)
    }
}

impl PlacementSink for MapRecord {
    fn on_placement(&mut self, event: &PlacementEvent) {
        self.placements.push(*event);
    }

    fn on_candidate(&mut self, position: Vector, segment_length: usize) {
        self.candidates.insert(position, segment_length);
    }
}
