//! PNG rendering of a recorded map
//!
//! Each placed tile is drawn as a field-colored square. Town sides fill their
//! quarter of the square, and path and river sides draw a strip from the side
//! to the center. Candidate cells can be overlaid to show how many sides they
//! share with the map.

use crate::geometry::{Label, Vector};
use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::io::sink::MapRecord;
use image::{Rgba, RgbaImage};
use std::path::Path;

const FIELD_COLOR: Rgba<u8> = Rgba([153, 187, 25, 255]);
const TOWN_COLOR: Rgba<u8> = Rgba([167, 122, 71, 255]);
const PATH_COLOR: Rgba<u8> = Rgba([234, 234, 209, 255]);
const RIVER_COLOR: Rgba<u8> = Rgba([0, 0, 200, 255]);
const UNKNOWN_COLOR: Rgba<u8> = Rgba([255, 0, 200, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

const CANDIDATE_COLORS: [Rgba<u8>; 4] = [
    Rgba([100, 20, 20, 255]),
    Rgba([10, 60, 10, 255]),
    Rgba([40, 120, 40, 255]),
    Rgba([70, 180, 70, 255]),
];

// Half widths of side strips, as a fraction of the tile side
const PATH_HALF_WIDTH: f64 = 0.025;
const RIVER_HALF_WIDTH: f64 = 0.075;

/// Fill color of a side label
pub const fn label_color(label: Label) -> Rgba<u8> {
    match label {
        'F' => FIELD_COLOR,
        'T' => TOWN_COLOR,
        'P' => PATH_COLOR,
        'R' => RIVER_COLOR,
        _ => UNKNOWN_COLOR,
    }
}

/// Overlay color of a candidate cell, dark red when forbidden
pub fn candidate_color(segment_length: usize) -> Rgba<u8> {
    CANDIDATE_COLORS
        .get(segment_length.min(CANDIDATE_COLORS.len() - 1))
        .copied()
        .unwrap_or(UNKNOWN_COLOR)
}

const fn strip_half_width(label: Label) -> Option<f64> {
    match label {
        'P' => Some(PATH_HALF_WIDTH),
        'R' => Some(RIVER_HALF_WIDTH),
        _ => None,
    }
}

// (u, v) are in the unit square with v pointing up
fn tile_pixel_color(labels: [Label; 4], u: f64, v: f64) -> Rgba<u8> {
    // Distance to each side and lateral offset along it, bottom, right, top, left
    let depths = [v, 1.0 - u, 1.0 - v, u];
    let offsets = [u - 0.5, v - 0.5, 0.5 - u, 0.5 - v];

    let mut color = FIELD_COLOR;

    let quarter = depths
        .iter()
        .zip(labels)
        .min_by(|a, b| a.0.total_cmp(b.0))
        .map(|(_, label)| label);
    if let Some(label) = quarter
        && label != 'F'
        && strip_half_width(label).is_none()
    {
        color = label_color(label);
    }

    for ((label, depth), offset) in labels.iter().zip(depths).zip(offsets) {
        if let Some(half_width) = strip_half_width(*label)
            && depth <= 0.5
            && offset.abs() <= half_width
        {
            color = label_color(*label);
        }
    }

    color
}

fn fill_cell(image: &mut RgbaImage, origin: (u32, u32), size: u32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            image.put_pixel(origin.0 + dx, origin.1 + dy, color);
        }
    }
}

fn paint_tile(image: &mut RgbaImage, origin: (u32, u32), size: u32, labels: [Label; 4]) {
    let side = f64::from(size);
    for dy in 0..size {
        for dx in 0..size {
            let u = (f64::from(dx) + 0.5) / side;
            let v = 1.0 - (f64::from(dy) + 0.5) / side;
            image.put_pixel(
                origin.0 + dx,
                origin.1 + dy,
                tile_pixel_color(labels, u, v),
            );
        }
    }
}

/// Render the recorded map, one `tile_pixels` square per cell
///
/// The map y axis points up, so the top image row holds the highest cells.
///
/// # Errors
///
/// Returns an error if:
/// - No tile has been placed
/// - `tile_pixels` is zero
/// - The image would exceed the maximum dimension
pub fn render_map(
    record: &MapRecord,
    tile_pixels: u32,
    show_candidates: bool,
) -> Result<RgbaImage> {
    if record.placements.is_empty() {
        return Err(invalid_parameter(
            "record",
            &"empty map",
            &"no tiles have been placed",
        ));
    }
    if tile_pixels == 0 {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &"must be positive",
        ));
    }

    let Some((min, max)) = record.bounds(show_candidates) else {
        return Err(invalid_parameter(
            "record",
            &"empty map",
            &"no tiles have been placed",
        ));
    };

    let columns = (i64::from(max.x) - i64::from(min.x) + 1) as u64;
    let rows = (i64::from(max.y) - i64::from(min.y) + 1) as u64;
    let width = columns * u64::from(tile_pixels);
    let height = rows * u64::from(tile_pixels);
    if width > u64::from(MAX_IMAGE_DIMENSION) || height > u64::from(MAX_IMAGE_DIMENSION) {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &format!("map would render at {width}x{height} pixels"),
        ));
    }

    let mut image = RgbaImage::from_pixel(width as u32, height as u32, BACKGROUND);
    let origin_of = |cell: Vector| {
        (
            (cell.x - min.x) as u32 * tile_pixels,
            (max.y - cell.y) as u32 * tile_pixels,
        )
    };

    if show_candidates {
        for (&cell, &segment_length) in &record.candidates {
            fill_cell(
                &mut image,
                origin_of(cell),
                tile_pixels,
                candidate_color(segment_length),
            );
        }
    }
    for event in &record.placements {
        paint_tile(&mut image, origin_of(event.position), tile_pixels, event.labels);
    }

    Ok(image)
}

/// Render the recorded map and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The map cannot be rendered (see [`render_map`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(
    record: &MapRecord,
    tile_pixels: u32,
    show_candidates: bool,
    output_path: &Path,
) -> Result<()> {
    let image = render_map(record, tile_pixels, show_candidates)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| MapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
