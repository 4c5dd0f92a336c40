//! Tests for tileset description parsing and loading

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilegrow::MapError;
    use tilegrow::io::tileset::{load_tileset_file, load_tilesets, parse_tileset};

    const RIVER: &str = r#"{
        "tiles": [
            {"description": "RFFF", "cardinality": 2, "tag0": "river", "tag1": "source"},
            {"description": "RFRF", "cardinality": 0, "tag0": "river"},
            {"description": "RFFF", "tag0": "river", "tag3": "lake", "img": "lake.png"}
        ]
    }"#;

    fn parse(json: &str) -> tilegrow::Result<Vec<tilegrow::tileset::Tile>> {
        parse_tileset(json, Path::new("tiles.json"), Path::new("assets"), 0)
    }

    // Tests field mapping of tile descriptions
    // Verified by numbering skipped tiles
    #[test]
    fn test_parse_tileset_fields() {
        let tiles = parse(RIVER).expect("Valid tileset");

        assert_eq!(tiles.len(), 2);
        let source = tiles.first().expect("Source tile");
        assert_eq!(source.id, 0);
        assert_eq!(source.labels, ['R', 'F', 'F', 'F']);
        assert_eq!(source.cardinality, 2);
        assert!(source.is_source());
        assert_eq!(source.image, None);

        let lake = tiles.get(1).expect("Lake tile");
        assert_eq!(lake.id, 1);
        assert_eq!(lake.cardinality, 1);
        assert_eq!(lake.tags, vec![String::from("river"), String::from("lake")]);
        assert_eq!(lake.image, Some(PathBuf::from("assets/lake.png")));
    }

    // Tests rejection of malformed descriptions
    // Verified by truncating long descriptions instead of rejecting them
    #[test]
    fn test_parse_tileset_rejections() {
        assert!(matches!(
            parse("{\"tiles\": ["),
            Err(MapError::TilesetParse { .. })
        ));
        assert!(matches!(
            parse(r#"{"tiles": [{"cardinality": 2}]}"#),
            Err(MapError::TilesetParse { .. })
        ));
        assert!(matches!(
            parse(r#"{"tiles": [{"description": "FFFFF"}]}"#),
            Err(MapError::InvalidTileset { .. })
        ));
        assert!(matches!(
            parse(r#"{"tiles": [{"description": "FFFF", "tag0": 3}]}"#),
            Err(MapError::InvalidTileset { .. })
        ));
        assert!(matches!(
            parse(r#"{"tiles": [{"description": "TPFP", "cardinality": 2, "tag0": "start"}]}"#),
            Err(MapError::InvalidTileset { .. })
        ));
    }

    // Tests that unknown keys and tags beyond the limit are ignored
    #[test]
    fn test_parse_tileset_ignores_extra_keys() {
        let tiles = parse(
            r#"{"tiles": [{"description": "FFFF", "tag10": "ignored", "name": "meadow"}]}"#,
        )
        .expect("Valid tileset");

        assert_eq!(tiles.len(), 1);
        assert!(tiles.iter().all(|tile| tile.tags.is_empty()));
    }

    // Tests loading files with ids continuing across files
    // Verified by restarting ids for each file
    #[test]
    fn test_load_tilesets_numbers_across_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let river = temp_dir.path().join("river.json");
        let regular = temp_dir.path().join("regular.json");
        fs::write(&river, RIVER).expect("Failed to write tileset");
        fs::write(
            &regular,
            r#"{"tiles": [{"description": "FFFF", "cardinality": 5}, {"description": "TPFP"}]}"#,
        )
        .expect("Failed to write tileset");

        let tiles = load_tilesets(&[river.clone(), regular]).expect("Valid tilesets");

        let ids: Vec<usize> = tiles.iter().map(|tile| tile.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(
            tiles.get(1).and_then(|tile| tile.image.clone()),
            Some(temp_dir.path().join("lake.png"))
        );

        let again = load_tileset_file(&river, 10).expect("Valid tileset");
        assert_eq!(again.first().map(|tile| tile.id), Some(10));
    }

    // Tests missing files
    // Verified by returning an empty tileset for missing files
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.json");

        assert!(matches!(
            load_tileset_file(&missing, 0),
            Err(MapError::TilesetLoad { .. })
        ));
        assert!(load_tilesets(&[missing]).is_err());
    }
}
