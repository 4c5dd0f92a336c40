//! Placement engine growing the map one tile at a time
//!
//! The engine owns the map boundary and the candidate index. Placing a tile
//! searches the candidates, merges the chosen footprint into the boundary and
//! re-evaluates the cells around it. A placement is atomic: when the merge
//! fails the boundary and the index are left as they were.

use crate::algorithm::candidates::CandidateTiles;
use crate::algorithm::placement::Placement;
use crate::algorithm::selection::{
    SearchOptions, find_candidate_placements, select_tile_placement,
};
use crate::geometry::{Boundary, Domain, Vector};
use crate::io::configuration::DEFAULT_MAX_CANDIDATES;
use crate::io::error::{Result, WithOperation, invariant_violation};
use crate::io::sink::{PlacementEvent, PlacementSink};
use crate::tileset::{CompositeTile, Tile};

/// Outcome of placing one batch of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Tiles committed during the batch
    pub placed: usize,
    /// Tiles left over when a pass over the batch placed nothing
    pub unplaced: Vec<Tile>,
    /// The batch stopped because the tile budget was used up
    pub budget_reached: bool,
}

/// Map state and the placement procedure
pub struct PlacementEngine<S> {
    border: Boundary,
    candidates: CandidateTiles,
    max_candidates: usize,
    placed: usize,
    sink: S,
}

impl<S: PlacementSink> PlacementEngine<S> {
    /// Create an engine for an empty map
    pub fn new(sink: S) -> Self {
        Self {
            border: Boundary::new(),
            candidates: CandidateTiles::new(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            placed: 0,
            sink,
        }
    }

    /// Override the number of valid placements gathered per search
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Outline of the placed region
    pub const fn border(&self) -> &Boundary {
        &self.border
    }

    /// Cells where the next tile may go
    pub const fn candidates(&self) -> &CandidateTiles {
        &self.candidates
    }

    /// Number of tiles committed so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Event receiver
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the event receiver
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Best placement for `tile` on the current map, if any
    ///
    /// The first tile of a map goes to the origin without rotation.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the boundary is corrupted
    pub fn find_placement(&self, tile: &Tile) -> Result<Option<Placement>> {
        if self.border.is_empty() {
            return Ok(Some(Placement::placed(tile.clone(), Vector::ZERO, 0, None)));
        }

        let options = SearchOptions::for_tile(tile).with_max_candidates(self.max_candidates);
        let placements =
            find_candidate_placements(tile, &self.border, &self.candidates, &options)
                .with_operation("find_placement")?;
        Ok(select_tile_placement(placements))
    }

    /// Place `tile` on the map if it fits anywhere
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the search or the merge fails
    pub fn place(&mut self, tile: &Tile) -> Result<Option<Placement>> {
        let Some(placement) = self.find_placement(tile)? else {
            return Ok(None);
        };
        self.commit(&placement)?;
        Ok(Some(placement))
    }

    /// Merge a placement into the map and refresh the candidates around it
    ///
    /// Every edge the footprint leaves on the outline, and the cell one step
    /// further along each edge but the last, is re-evaluated so that corner
    /// cells pick up their new contact length.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation, leaving the map unchanged, if the
    /// footprint cannot be merged
    pub fn commit(&mut self, placement: &Placement) -> Result<()> {
        self.border
            .merge(&placement.boundary())
            .with_operation("commit")?;
        self.candidates.delete(placement.position);

        let steps: Vec<(Vector, Vector)> = placement
            .complement_steps()
            .iter()
            .map(|step| (step.point, step.edge))
            .collect();
        let corners = steps
            .iter()
            .take(steps.len().saturating_sub(1))
            .map(|&(point, edge)| (point + edge, edge));
        let neighbor_edges: Vec<(Vector, Vector)> =
            steps.iter().copied().chain(corners).collect();

        for (point, edge) in neighbor_edges {
            let neighbor =
                Placement::from_boundary_edge(&self.border, point, edge, Domain::Exterior)
                    .with_operation("commit")?;
            self.sink
                .on_candidate(neighbor.position, neighbor.segment_length());
            self.candidates.update(neighbor);
        }

        self.refresh_priorities();

        if let Some(event) = PlacementEvent::from_placement(placement) {
            self.sink.on_placement(&event);
        }
        self.placed += 1;
        Ok(())
    }

    /// Lay a composite tile on an empty map and seed the candidates around it
    ///
    /// Every part is reported to the sink. Parts are not counted in
    /// [`placed`](Self::placed), so they do not use up the tile budget.
    /// Returns the number of parts laid.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation, leaving the map unchanged, if the map
    /// already holds tiles or the parts do not form a single region
    pub fn place_composite(&mut self, composite: &CompositeTile, origin: Vector) -> Result<usize> {
        if !self.border.is_empty() {
            return Err(invariant_violation(
                "place_composite",
                &format!("the map already has {} boundary vertices", self.border.len()),
            ));
        }

        self.border = composite.boundary(origin)?;

        for step in self.border.iter_all(0) {
            let neighbor =
                Placement::from_boundary_edge(&self.border, step.point, step.edge, Domain::Exterior)
                    .with_operation("place_composite")?;
            self.sink
                .on_candidate(neighbor.position, neighbor.segment_length());
            self.candidates.update(neighbor);
        }
        self.refresh_priorities();

        for part in composite.parts() {
            let placement = Placement::placed(part.tile.clone(), origin + part.offset, 0, None);
            if let Some(event) = PlacementEvent::from_placement(&placement) {
                self.sink.on_placement(&event);
            }
        }

        log::debug!(
            "Composite of {} tiles laid at {origin}, {} candidates",
            composite.len(),
            self.candidates.len()
        );
        Ok(composite.len())
    }

    fn refresh_priorities(&mut self) {
        self.candidates.sort_by_priority();
        if log::log_enabled!(log::Level::Debug) {
            self.candidates.log_contents();
        }
    }

    /// Place a batch of tiles, deferring those that do not fit yet
    ///
    /// Deferred tiles are retried after each pass over the batch; a pass that
    /// places nothing ends the batch. `budget` caps the total number of tiles
    /// on the map.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a placement fails
    pub fn place_batch(&mut self, tiles: &[Tile], budget: Option<usize>) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        let mut pending: Vec<&Tile> = tiles.iter().collect();

        while !pending.is_empty() {
            let mut deferred = Vec::new();
            for tile in pending.iter().copied() {
                if budget.is_some_and(|limit| self.placed >= limit) {
                    report.budget_reached = true;
                    return Ok(report);
                }
                if self.place(tile)?.is_some() {
                    report.placed += 1;
                } else {
                    deferred.push(tile);
                }
            }

            if deferred.len() == pending.len() {
                for tile in &deferred {
                    log::warn!("Could not place tile: {tile}");
                }
                report.unplaced = deferred.into_iter().cloned().collect();
                break;
            }
            pending = deferred;
        }

        Ok(report)
    }
}
