//! Tests for placement descriptors and their footprint walks

#[cfg(test)]
mod tests {
    use tilegrow::algorithm::placement::Placement;
    use tilegrow::geometry::{Boundary, BoundaryStep, Domain, Segment, Vector};
    use tilegrow::tileset::Tile;

    fn fptp() -> Tile {
        Tile::from_description(0, "FPTP").expect("Four sides")
    }

    fn labels(steps: &[BoundaryStep]) -> String {
        steps
            .iter()
            .map(|step| step.label.unwrap_or('-'))
            .collect()
    }

    // Tests segment bookkeeping of empty cells
    // Verified by keeping the first segment when several are found
    #[test]
    fn test_positioned_keeps_single_segment_only() {
        let position = Vector::new(3, -2);

        let single = Placement::positioned(position, &[Segment::new(4, 1, 2)]);
        assert_eq!(single.matched_segment(), Some(Segment::new(4, 1, 2)));
        assert_eq!(single.segment_length(), 2);
        assert!(!single.is_forbidden());
        assert!(single.tile.is_none());

        let pinched =
            Placement::positioned(position, &[Segment::new(2, 2, 1), Segment::new(6, 1, 0)]);
        assert_eq!(pinched.matched_segment(), None);
        assert_eq!(pinched.segment(), Segment::EMPTY);
        assert!(pinched.is_forbidden());

        assert!(Placement::positioned(position, &[]).is_forbidden());
        assert_eq!(single.l1_distance(), 5);
    }

    // Tests the cell across a boundary edge
    // Verified by building the cell on the interior side
    #[test]
    fn test_from_boundary_edge_exterior_cell() {
        let border = Boundary::tile(Vector::ZERO, [None; 4]);

        let below = Placement::from_boundary_edge(
            &border,
            Vector::new(0, 0),
            Vector::new(1, 0),
            Domain::Exterior,
        )
        .expect("Unique points");
        assert_eq!(below.position, Vector::new(0, -1));
        assert_eq!(below.matched_segment(), Some(Segment::new(0, 2, 1)));

        let right = Placement::from_boundary_edge(
            &border,
            Vector::new(1, 0),
            Vector::new(0, 1),
            Domain::Exterior,
        )
        .expect("Unique points");
        assert_eq!(right.position, Vector::new(1, 0));
        assert_eq!(right.segment_length(), 1);
    }

    // Tests rotation normalization and tile attachment
    #[test]
    fn test_placed_and_with_tile() {
        let placement = Placement::placed(fptp(), Vector::new(1, 1), 5, None);
        assert_eq!(placement.rotation, 1);

        let cell = Placement::positioned(Vector::new(2, 1), &[Segment::new(42, 1, 2)]);
        let tried = cell.with_tile(fptp(), 3);
        assert_eq!(tried.position, cell.position);
        assert_eq!(tried.matched_segment(), cell.matched_segment());
        assert_eq!(tried.rotation, 3);
        assert_eq!(tried.tile, Some(fptp()));
    }

    // Tests labeled footprints
    // Verified by ignoring the rotation when labeling the footprint
    #[test]
    fn test_boundary_labels_follow_rotation() {
        let cell = Placement::positioned(Vector::new(2, 1), &[]);
        assert!(cell.boundary().labels().iter().all(Option::is_none));

        let rotated = cell.with_tile(fptp(), 1);
        let footprint = rotated.boundary();
        assert_eq!(footprint.points(), Boundary::tile(Vector::new(2, 1), [None; 4]).points());
        assert_eq!(
            footprint.labels(),
            &[Some('P'), Some('F'), Some('P'), Some('T')]
        );
    }

    // Tests shared and complementary edge walks
    // Verified by swapping the start and end of the complement walk
    #[test]
    fn test_segment_and_complement_steps() {
        let segment = Segment::new(42, 1, 2);
        let position = Vector::new(2, 1);

        let upright = Placement::placed(fptp(), position, 0, Some(segment));
        assert_eq!(labels(&upright.segment_steps()), "PT");
        assert_eq!(labels(&upright.complement_steps()), "PF");
        assert!(
            upright
                .complement_steps()
                .first()
                .is_some_and(|step| step.point == Vector::new(2, 2)
                    && step.edge == Vector::new(0, -1))
        );

        let turned = Placement::placed(fptp(), position, 1, Some(segment));
        assert_eq!(labels(&turned.segment_steps()), "FP");
        assert_eq!(labels(&turned.complement_steps()), "TP");

        let corner = Placement::placed(fptp(), position, 0, Some(Segment::new(7, 1, 0)));
        assert!(corner.segment_steps().is_empty());
        assert_eq!(labels(&corner.complement_steps()), "PTPF");
    }

    // Tests log formatting
    #[test]
    fn test_display() {
        let segment = Some(Segment::new(42, 1, 2));
        let placement = Placement::placed(fptp(), Vector::new(2, 1), 0, segment);
        assert_eq!(
            placement.to_string(),
            "Tile #0 (FPTP) at (2, 1) r=0 segment=(42, 1, 2)"
        );

        let cell = Placement::positioned(Vector::new(0, -1), &[Segment::new(0, 2, 1)]);
        assert_eq!(cell.to_string(), "(0, -1) segment=(0, 2, 1)");
    }
}
