//! Placement rules beyond matching labels
//!
//! Only rivers need one: a river must be able to flow on. Every river edge a
//! placement leaves on the outline must open onto a cell that touches the map
//! along that single edge, otherwise no later tile could continue the river.

use crate::algorithm::placement::Placement;
use crate::geometry::{Boundary, Domain, Orientation};
use crate::io::configuration::RIVER_LABEL;
use crate::io::error::{Result, WithOperation};

/// Check that a river placement leaves every river mouth open
///
/// Placements whose shared edges carry no river label are always valid.
///
/// # Errors
///
/// Returns an invariant violation if the placement cannot be merged into
/// `border`
pub fn validate_tile_placement(placement: &Placement, border: &Boundary) -> Result<bool> {
    let joins_river = placement
        .segment_steps()
        .iter()
        .any(|step| step.label == Some(RIVER_LABEL));
    if !joins_river {
        return Ok(true);
    }

    let mut merged = border.clone();
    merged
        .merge(&placement.boundary())
        .with_operation("validate_tile_placement")?;

    for step in placement.complement_steps() {
        if step.label != Some(RIVER_LABEL) {
            continue;
        }
        let mouth = Boundary::from_edge(
            step.point,
            step.edge,
            Orientation::CounterClockwise,
            Domain::Exterior,
        )?;
        match merged.common_segments(&mouth)?.as_slice() {
            [segment] if segment.length == 1 => {}
            _ => return Ok(false),
        }
    }

    Ok(true)
}
