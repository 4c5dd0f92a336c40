//! Tests for generation constants

#[cfg(test)]
mod tests {
    use tilegrow::io::configuration::{
        COMPACTION_RATIO, DEFAULT_MAX_CANDIDATES, DEFAULT_OUTPUT, DEFAULT_RIVER_PERIOD,
        DEFAULT_TILE_PIXELS, LAKE_TAG, MAX_IMAGE_DIMENSION, MAX_TAGS, PROGRESS_BAR_WIDTH,
        RIVER_LABEL, RIVER_TAG, SOURCE_TAG, START_TAG,
    };

    // Tests candidate search defaults
    // Verified by changing constant values
    #[test]
    fn test_candidate_search_values() {
        assert_eq!(DEFAULT_MAX_CANDIDATES, 1);
        assert!((COMPACTION_RATIO - 4.0 / 3.0).abs() < f64::EPSILON);
        assert!(COMPACTION_RATIO > 1.0);
    }

    // Tests the tile vocabulary
    #[test]
    fn test_labels_and_tags() {
        assert_eq!(RIVER_LABEL, 'R');
        assert_eq!(
            [RIVER_TAG, SOURCE_TAG, LAKE_TAG, START_TAG],
            ["river", "source", "lake", "start"]
        );
        assert_eq!(MAX_TAGS, 10);
    }

    // Tests output defaults
    // Verified by shrinking the image limit below one tile
    #[test]
    fn test_output_values() {
        assert_eq!(DEFAULT_RIVER_PERIOD, 1);
        assert_eq!(DEFAULT_OUTPUT, "map.png");
        assert!(DEFAULT_TILE_PIXELS > 0);
        assert!(MAX_IMAGE_DIMENSION >= DEFAULT_TILE_PIXELS);
        assert_eq!(PROGRESS_BAR_WIDTH, 50);
    }
}
