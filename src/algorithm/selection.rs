//! Candidate scan and placement choice for a single tile

use crate::algorithm::candidates::CandidateTiles;
use crate::algorithm::placement::Placement;
use crate::algorithm::validation::validate_tile_placement;
use crate::geometry::{Boundary, Label};
use crate::io::configuration::{DEFAULT_MAX_CANDIDATES, RIVER_LABEL};
use crate::io::error::Result;
use crate::tileset::Tile;

/// Limits and constraints of a candidate scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after this many valid placements; zero scans every candidate
    pub max_candidates: usize,
    /// Only attach along boundary edges carrying this label
    pub forced_label: Option<Label>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            forced_label: None,
        }
    }
}

impl SearchOptions {
    /// Options for `tile`: river tiles other than sources must extend a river
    pub fn for_tile(tile: &Tile) -> Self {
        Self {
            forced_label: (tile.is_river() && !tile.is_source()).then_some(RIVER_LABEL),
            ..Self::default()
        }
    }

    /// Override the scan limit
    #[must_use]
    pub const fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

/// Valid placements of `tile` along the boundary, in candidate priority order
///
/// Each candidate cell is matched again against the live boundary with the
/// tile's own labels; a cell whose cached segment no longer agrees is
/// skipped with a warning. Every rotation whose labels match the boundary
/// and that passes [`validate_tile_placement`] is kept. The scan stops after
/// the candidate cell that brings the count to `options.max_candidates`.
///
/// # Errors
///
/// Returns an invariant violation if the boundary repeats a vertex
pub fn find_candidate_placements(
    tile: &Tile,
    border: &Boundary,
    candidates: &CandidateTiles,
    options: &SearchOptions,
) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();

    for candidate in candidates.iter() {
        let cached = candidate.segment();
        let footprint = candidate.boundary_with(tile.edge_labels(0));
        let current = Placement::positioned(
            candidate.position,
            &border.common_segments(&footprint)?,
        );
        let Some(segment) = current.matched_segment().filter(|segment| {
            (segment.other_start, segment.length) == (cached.other_start, cached.length)
        }) else {
            log::warn!(
                "Incoherent common segments for tile at {} in candidates: {cached} and computed against the current border: {}",
                candidate.position,
                current.segment()
            );
            continue;
        };

        if let Some(label) = options.forced_label
            && !border
                .iter_slice(segment.start, segment.end())
                .any(|step| step.label == Some(label))
        {
            continue;
        }

        for rotation in border.find_matching_rotations(&footprint, segment) {
            let placement = current.with_tile(tile.clone(), rotation);
            if validate_tile_placement(&placement, border)? {
                placements.push(placement);
            }
        }

        if options.max_candidates > 0 && placements.len() >= options.max_candidates {
            break;
        }
    }

    Ok(placements)
}

/// Pick one placement among the valid ones
///
/// The scan order already encodes the priority, so the first one wins.
pub fn select_tile_placement(placements: Vec<Placement>) -> Option<Placement> {
    placements.into_iter().next()
}
