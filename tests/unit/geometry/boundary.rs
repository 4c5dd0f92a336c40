//! Tests for boundary orientation, slicing, segment matching and merging

#[cfg(test)]
mod tests {
    use tilegrow::MapError;
    use tilegrow::geometry::{Boundary, Domain, Label, Orientation, Segment, Vector};

    fn labels(description: &str) -> [Option<Label>; 4] {
        let mut labels = [None; 4];
        for (slot, label) in labels.iter_mut().zip(description.chars()) {
            *slot = Some(label);
        }
        labels
    }

    fn tile(x: i32, y: i32) -> Boundary {
        Boundary::tile(Vector::new(x, y), [None; 4])
    }

    fn labeled_tile(x: i32, y: i32, description: &str) -> Boundary {
        Boundary::tile(Vector::new(x, y), labels(description))
    }

    fn merged(cells: &[(i32, i32)]) -> Boundary {
        let mut border = Boundary::new();
        for &(x, y) in cells {
            border
                .merge(&tile(x, y))
                .expect("Cells should merge along one edge run");
        }
        border
    }

    fn points(coordinates: &[(i32, i32)]) -> Vec<Vector> {
        coordinates.iter().copied().map(Vector::from).collect()
    }

    fn label_string(border: &Boundary) -> String {
        border.labels().iter().map(|label| label.unwrap_or('-')).collect()
    }

    // Tests orientation sign law
    // Verified by a unit square being counter-clockwise and its reverse clockwise
    #[test]
    fn test_orientation_of_square_and_reverse() {
        let square = tile(0, 0);
        assert_eq!(square.orientation(), Orientation::CounterClockwise);

        let mut reversed = Boundary::new();
        for point in square.points().iter().rev() {
            reversed.append(*point, None);
        }
        assert_eq!(reversed.orientation(), Orientation::Clockwise);
    }

    // Tests degenerate orientation
    // Verified by a two-vertex cycle enclosing no area
    #[test]
    fn test_orientation_of_two_points_is_undefined() {
        let mut segment = Boundary::new();
        segment.append(Vector::new(0, 0), None);
        segment.append(Vector::new(1, 0), None);

        assert_eq!(segment.orientation(), Orientation::Undefined);
        assert_eq!(Boundary::new().orientation(), Orientation::Undefined);
    }

    // Tests cyclic accessors
    // Verified by negative and overflowing indices wrapping around the cycle
    #[test]
    fn test_cyclic_accessors() {
        let border = labeled_tile(2, 1, "FPTP");

        assert_eq!(border.len(), 4);
        assert_eq!(border.point(-1), Vector::new(2, 2));
        assert_eq!(border.point(5), Vector::new(3, 1));
        assert_eq!(border.label(-2), Some('T'));
        assert_eq!(border.edge(0), Vector::new(1, 0));
        assert_eq!(border.edge(-1), Vector::new(0, -1));
    }

    // Tests cyclic slices
    // Verified by a wrapping range and by equal bounds copying the whole cycle
    #[test]
    fn test_slice_wraps_and_full_cycle() {
        let border = labeled_tile(2, 1, "FPTP");

        let tail = border.slice(3, 1);
        assert_eq!(tail.points(), points(&[(2, 2), (2, 1)]).as_slice());
        assert_eq!(label_string(&tail), "PF");

        let full = border.slice(1, 1);
        assert_eq!(full.points(), points(&[(3, 1), (3, 2), (2, 2), (2, 1)]).as_slice());
        assert_eq!(label_string(&full), "PTPF");
    }

    // Tests lazy slice iteration
    // Verified by equal bounds yielding nothing and iter_all visiting every vertex once
    #[test]
    fn test_iter_slice_and_iter_all() {
        let border = labeled_tile(2, 1, "FPTP");

        assert_eq!(border.iter_slice(1, 1).count(), 0);
        assert_eq!(border.iter_slice(5, 1).count(), 0);

        let steps: Vec<_> = border.iter_slice(3, 5).collect();
        assert_eq!(steps.len(), 2);
        assert!(steps.first().is_some_and(|step| step.point == Vector::new(2, 2)
            && step.edge == Vector::new(0, -1)
            && step.label == Some('P')));

        let all: Vec<Vector> = border.iter_all(1).map(|step| step.point).collect();
        assert_eq!(all, points(&[(3, 1), (3, 2), (2, 2), (2, 1)]));

        // Restartable
        assert_eq!(border.iter_all(1).count(), border.iter_all(1).count());
    }

    // Tests normalization to the bottom-left vertex
    #[test]
    fn test_bottom_left_and_rotate_to_start_with() {
        let mut border = merged(&[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(border.bottom_left(), Some(Vector::new(0, 0)));

        assert!(border.rotate_to_start_with(Vector::new(0, 0)));
        assert_eq!(border.point(0), Vector::new(0, 0));
        assert!(!border.rotate_to_start_with(Vector::new(7, 7)));
        assert_eq!(border.point(0), Vector::new(0, 0));
        assert_eq!(Boundary::new().bottom_left(), None);
    }

    // Tests square synthesis from an edge
    // Verified by exterior squares lying across the edge and interior ones along it
    #[test]
    fn test_from_edge_domains_and_orientations() {
        let origin = Vector::ZERO;
        let east = Vector::new(1, 0);

        let exterior =
            Boundary::from_edge(origin, east, Orientation::CounterClockwise, Domain::Exterior)
                .expect("Defined orientation");
        assert_eq!(exterior.points(), points(&[(0, 0), (0, -1), (1, -1), (1, 0)]).as_slice());
        assert_eq!(exterior.orientation(), Orientation::CounterClockwise);
        assert!(exterior.labels().iter().all(Option::is_none));

        let interior =
            Boundary::from_edge(origin, east, Orientation::CounterClockwise, Domain::Interior)
                .expect("Defined orientation");
        assert_eq!(interior.points(), tile(0, 0).points());

        let clockwise = Boundary::from_edge(origin, east, Orientation::Clockwise, Domain::Exterior)
            .expect("Defined orientation");
        assert_eq!(clockwise.points(), points(&[(0, 0), (0, 1), (1, 1), (1, 0)]).as_slice());
        assert_eq!(clockwise.orientation(), Orientation::Clockwise);

        assert!(
            Boundary::from_edge(origin, east, Orientation::Undefined, Domain::Exterior).is_err()
        );
    }

    // Tests segment symmetry between two adjacent cells
    // Verified by swapping the boundaries swapping the start indices
    #[test]
    fn test_common_segments_symmetry() {
        let left = tile(1, 1);
        let right = tile(2, 1);

        let forward = right.common_segments(&left).expect("Unique points");
        let backward = left.common_segments(&right).expect("Unique points");

        assert_eq!(forward, vec![Segment::new(3, 1, 1)]);
        assert_eq!(backward, vec![Segment::new(1, 3, 1)]);
        assert_eq!(
            forward
                .iter()
                .map(|segment| Segment::new(segment.other_start, segment.start, segment.length))
                .collect::<Vec<_>>(),
            backward
        );
    }

    // Tests single-point and disjoint contacts
    #[test]
    fn test_common_segments_corner_and_disjoint() {
        assert_eq!(
            tile(0, 0).common_segments(&tile(1, 1)).expect("Unique points"),
            vec![Segment::new(2, 0, 0)]
        );
        assert!(tile(0, 0).common_segments(&tile(2, 0)).expect("Unique points").is_empty());
    }

    // Tests a map outline touching a cell on two separate runs
    // Verified by a U-shaped outline around (0, 1) opening on its left
    #[test]
    fn test_common_segments_two_runs_around_notch() {
        let border = merged(&[(1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]);
        assert_eq!(border.len(), 14);

        let segments = border.common_segments(&tile(0, 1)).expect("Unique points");
        assert_eq!(segments, vec![Segment::new(2, 2, 1), Segment::new(6, 1, 0)]);
    }

    // Tests a notch touched on two disjoint runs of edges
    // Verified by the cell (1, 0) sitting in a gap of a ring missing one cell
    #[test]
    fn test_common_segments_two_edge_runs() {
        let border = merged(&[(2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1), (0, 0)]);
        assert_eq!(border.len(), 16);

        let segments = border.common_segments(&tile(1, 0)).expect("Unique points");
        assert_eq!(segments, vec![Segment::new(2, 3, 1), Segment::new(6, 1, 1)]);
    }

    // Tests the wrap-around fix-up
    // Verified by a run crossing vertex 0 being reported once from its first vertex
    #[test]
    fn test_common_segments_fuses_run_across_array_end() {
        let mut border = merged(&[(0, 0), (1, 0), (1, 1)]);
        assert!(border.rotate_to_start_with(Vector::new(0, 1)));
        assert_eq!(
            border.points(),
            points(&[(0, 1), (0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (1, 1)]).as_slice()
        );

        let cell = tile(0, 1);
        assert_eq!(
            border.common_segments(&cell).expect("Unique points"),
            vec![Segment::new(6, 0, 2)]
        );
        assert_eq!(
            cell.common_segments(&border).expect("Unique points"),
            vec![Segment::new(0, 6, 2)]
        );

        border.merge(&cell).expect("Single fused segment");
        assert_eq!(border.len(), 8);
        assert_eq!(border.orientation(), Orientation::CounterClockwise);
    }

    // Tests the repeated point precondition
    #[test]
    fn test_common_segments_rejects_repeated_points() {
        let mut pinched = tile(0, 0);
        pinched.append(Vector::new(0, 0), None);

        let result = pinched.common_segments(&tile(1, 0));
        assert!(matches!(
            result,
            Err(MapError::InvariantViolation {
                operation: "common_segments",
                ..
            })
        ));
    }

    // Tests the merge length law
    // Verified by two cells sharing one edge giving a six-vertex outline
    #[test]
    fn test_merge_two_cells() {
        let mut border = labeled_tile(0, 0, "ABCD");
        let right = labeled_tile(1, 0, "EFGH");

        border.merge(&right).expect("One shared edge");

        assert_eq!(border.len(), 4 + 4 - 2);
        assert_eq!(
            border.points(),
            points(&[(1, 0), (2, 0), (2, 1), (1, 1), (0, 1), (0, 0)]).as_slice()
        );
        assert_eq!(label_string(&border), "EFGCDA");
        assert_eq!(border.orientation(), Orientation::CounterClockwise);
    }

    // Tests that merging into an empty boundary copies the other one
    #[test]
    fn test_merge_into_empty() {
        let mut border = Boundary::new();
        border.merge(&labeled_tile(3, 4, "FRFR")).expect("Plain copy");

        assert_eq!(border, labeled_tile(3, 4, "FRFR"));
    }

    // Tests merge preconditions
    // Verified by each failing merge leaving the boundary untouched
    #[test]
    fn test_merge_rejections_leave_boundary_untouched() {
        let mut notch = merged(&[(1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]);
        let before = notch.clone();
        assert!(matches!(
            notch.merge(&tile(0, 1)),
            Err(MapError::InvariantViolation { operation: "merge", .. })
        ));
        assert_eq!(notch, before);

        let mut square = tile(0, 0);
        assert!(square.merge(&tile(1, 1)).is_err());
        assert!(square.merge(&tile(5, 5)).is_err());
        assert_eq!(square, tile(0, 0));

        let mut reversed = Boundary::new();
        for point in tile(0, 0).points().iter().rev() {
            reversed.append(*point, None);
        }
        assert_eq!(
            square.common_segments(&reversed).expect("Unique points"),
            vec![Segment::new(0, 0, 3)]
        );
        assert!(square.merge(&reversed).is_err());
        assert_eq!(square, tile(0, 0));
    }

    // Tests rotation matching against a labeled outline
    // Verified by a town-side tile fitting only with its town facing the town edge
    #[test]
    fn test_find_matching_rotations() {
        let mut border = Boundary::new();
        for (x, y, description) in [(0, 0, "FFFF"), (0, 1, "FFFF"), (1, 1, "TFFF")] {
            border
                .merge(&labeled_tile(x, y, description))
                .expect("Adjacent cells");
        }
        assert!(border.rotate_to_start_with(Vector::new(0, 0)));
        assert_eq!(
            border.points(),
            points(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]).as_slice()
        );
        assert_eq!(label_string(&border), "FFTFFFFF");

        let cell = labeled_tile(1, 0, "TFFF");
        let segments = border.common_segments(&cell).expect("Unique points");
        assert_eq!(segments, vec![Segment::new(1, 2, 2)]);

        let segment = segments.first().copied().unwrap_or_default();
        assert_eq!(border.find_matching_rotations(&cell, segment), vec![2]);
    }

    // Tests unlabeled edges as wildcards and custom comparators
    #[test]
    fn test_find_matching_rotations_wildcards_and_comparator() {
        let border = labeled_tile(0, 0, "FFFF");
        let cell = tile(1, 0);
        let segment = Segment::new(1, 3, 1);

        assert_eq!(border.find_matching_rotations(&cell, segment), vec![0, 1, 2, 3]);

        let strict = |own: Option<Label>, other: Option<Label>| own.is_some() && own == other;
        assert!(
            border
                .find_matching_rotations_by(&cell, segment, strict)
                .is_empty()
        );

        let town = labeled_tile(1, 0, "FFFT");
        assert_eq!(
            border.find_matching_rotations_by(&town, segment, strict),
            vec![1, 2, 3]
        );
    }
}
