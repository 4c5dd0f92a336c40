//! Cyclic labeled polygons describing the outline of placed tiles
//!
//! A boundary is an ordered vertex cycle with one label per edge, where edge `i`
//! leaves vertex `i`. All index arithmetic is modular so callers can address
//! vertices before the start or past the end of the underlying arrays. The map
//! outline grows by merging tile footprints into it along a single shared run
//! of edges.

use crate::geometry::segment::Segment;
use crate::geometry::vector::Vector;
use crate::io::error::{Result, invariant_violation};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Opaque edge label (for instance `F`ield, `T`own, `P`ath, `R`iver)
pub type Label = char;

/// Winding direction of a closed boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Negative signed area
    Clockwise,
    /// Positive signed area
    CounterClockwise,
    /// Zero signed area, e.g. a two-vertex cycle
    Undefined,
}

impl Orientation {
    /// Quarter turn applied at each corner when walking a square in this orientation
    const fn quarter_turn(self) -> Option<i32> {
        match self {
            Self::CounterClockwise => Some(1),
            Self::Clockwise => Some(-1),
            Self::Undefined => None,
        }
    }
}

/// Side of a directed edge on which a synthesized outline is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// The side enclosed by the boundary the edge belongs to
    Interior,
    /// The opposite side
    Exterior,
}

/// One vertex of a boundary walk with its outgoing edge and label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryStep {
    /// Vertex position
    pub point: Vector,
    /// Vector to the next vertex
    pub edge: Vector,
    /// Label of the outgoing edge
    pub label: Option<Label>,
}

/// Closed polygon with one optional label per edge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    points: Vec<Vector>,
    labels: Vec<Option<Label>>,
}

/// Reduce a possibly negative index modulo `len`
fn cyclic(index: isize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.rem_euclid(len as isize) as usize
    }
}

/// Label comparison used when no custom comparator is supplied
///
/// Unlabeled edges match anything.
pub const fn labels_match(own: Option<Label>, other: Option<Label>) -> bool {
    match (own, other) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

impl Boundary {
    /// Create an empty boundary
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Create an empty boundary with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Outline of the unit cell whose bottom-left corner is `position`
    ///
    /// Vertices run counter-clockwise from `position`, so the labels are
    /// ordered bottom, right, top, left.
    pub fn tile(position: Vector, labels: [Option<Label>; 4]) -> Self {
        let corners = [
            position,
            position + Vector::new(1, 0),
            position + Vector::new(1, 1),
            position + Vector::new(0, 1),
        ];
        Self {
            points: corners.to_vec(),
            labels: labels.to_vec(),
        }
    }

    /// Square outline built from a directed edge
    ///
    /// Starts at `point` and turns at each corner in the given orientation.
    /// `Domain::Interior` walks along `edge` first; `Domain::Exterior` first
    /// steps away from the interior side, so the square covers the cell on the
    /// other side of `edge`. The result is unlabeled.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if `orientation` is undefined
    pub fn from_edge(
        point: Vector,
        edge: Vector,
        orientation: Orientation,
        domain: Domain,
    ) -> Result<Self> {
        let turn = orientation.quarter_turn().ok_or_else(|| {
            invariant_violation("from_edge", &"cannot walk a square with undefined orientation")
        })?;

        let mut direction = match domain {
            Domain::Interior => edge,
            Domain::Exterior => edge.rotate(-turn),
        };
        let mut current = point;
        let mut border = Self::with_capacity(4);
        for _ in 0..4 {
            border.append(current, None);
            current = current + direction;
            direction = direction.rotate(turn);
        }
        Ok(border)
    }

    /// Number of vertices (and edges)
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.points.len(), self.labels.len());
        self.points.len()
    }

    /// Whether the boundary has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All vertices in walking order
    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    /// All edge labels in walking order
    pub fn labels(&self) -> &[Option<Label>] {
        &self.labels
    }

    /// Append a vertex whose outgoing edge carries `label`
    pub fn append(&mut self, point: Vector, label: Option<Label>) {
        self.points.push(point);
        self.labels.push(label);
    }

    fn extend_from(&mut self, other: &Self) {
        self.points.extend_from_slice(&other.points);
        self.labels.extend_from_slice(&other.labels);
    }

    /// Vertex at a cyclic index (the origin for an empty boundary)
    pub fn point(&self, index: isize) -> Vector {
        self.points
            .get(cyclic(index, self.len()))
            .copied()
            .unwrap_or_default()
    }

    /// Label of the edge leaving the vertex at a cyclic index
    pub fn label(&self, index: isize) -> Option<Label> {
        self.labels
            .get(cyclic(index, self.len()))
            .copied()
            .flatten()
    }

    /// Edge leaving the vertex at a cyclic index
    pub fn edge(&self, index: isize) -> Vector {
        self.point(index + 1) - self.point(index)
    }

    /// Winding direction, recomputed from the current vertices
    pub fn orientation(&self) -> Orientation {
        let total: i64 = (0..self.len() as isize)
            .map(|i| self.edge(i - 1).cross_z(self.edge(i)))
            .sum();
        match total.signum() {
            1 => Orientation::CounterClockwise,
            -1 => Orientation::Clockwise,
            _ => Orientation::Undefined,
        }
    }

    /// Whether no vertex appears twice
    pub fn has_unique_points(&self) -> bool {
        let distinct: HashSet<&Vector> = self.points.iter().collect();
        distinct.len() == self.points.len()
    }

    /// Lexicographically smallest vertex
    pub fn bottom_left(&self) -> Option<Vector> {
        self.points.iter().min().copied()
    }

    /// Rotate the vertex cycle so that it starts at `point`
    ///
    /// Returns `false` and leaves the boundary unchanged if `point` is not a vertex.
    pub fn rotate_to_start_with(&mut self, point: Vector) -> bool {
        match self.points.iter().position(|&p| p == point) {
            Some(index) => {
                self.points.rotate_left(index);
                self.labels.rotate_left(index);
                true
            }
            None => false,
        }
    }

    /// Number of steps in the cyclic half-open range `[start, end)`
    fn span(&self, start: usize, end: usize) -> usize {
        let len = self.len();
        if len == 0 {
            0
        } else {
            (end % len + len - start % len) % len
        }
    }

    /// Copy of the cyclic half-open range `[start, end)`
    ///
    /// Equal start and end (modulo the length) copy the whole cycle beginning at `start`.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let len = self.len();
        if len == 0 {
            return Self::new();
        }
        let count = match self.span(start, end) {
            0 => len,
            count => count,
        };
        let offset = start % len;
        Self {
            points: self.points.iter().cycle().skip(offset).take(count).copied().collect(),
            labels: self.labels.iter().cycle().skip(offset).take(count).copied().collect(),
        }
    }

    fn step(&self, index: usize) -> BoundaryStep {
        let index = index as isize;
        BoundaryStep {
            point: self.point(index),
            edge: self.edge(index),
            label: self.label(index),
        }
    }

    /// Walk the cyclic half-open range `[start, end)`
    ///
    /// The range is empty when `start` and `end` are equal modulo the length.
    /// Calling again restarts the walk.
    pub fn iter_slice(&self, start: usize, end: usize) -> impl Iterator<Item = BoundaryStep> + '_ {
        let count = self.span(start, end);
        (0..count).map(move |k| self.step(start + k))
    }

    /// Walk every vertex once, beginning at `start`
    pub fn iter_all(&self, start: usize) -> impl Iterator<Item = BoundaryStep> + '_ {
        (0..self.len()).map(move |k| self.step(start + k))
    }

    fn index_map(&self) -> HashMap<Vector, usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, &point)| (point, index))
            .collect()
    }

    /// Maximal runs of vertices shared with `other`, sorted by start index
    ///
    /// See [`Segment`] for the meaning of each run. A run crossing the end of
    /// this boundary's vertex array is reported once, starting at its first
    /// vertex before the wrap.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if either boundary repeats a vertex
    pub fn common_segments(&self, other: &Self) -> Result<Vec<Segment>> {
        if !self.has_unique_points() || !other.has_unique_points() {
            return Err(invariant_violation(
                "common_segments",
                &"boundary points must be pairwise distinct",
            ));
        }

        let other_indices = other.index_map();
        let shared_points: Vec<(usize, usize)> = self
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, point)| other_indices.get(point).map(|&j| (i, j)))
            .collect();

        let mut segments = join_shared_points(&shared_points, other.len());
        fuse_wrap_around(&mut segments, self.len(), other.len());
        Ok(segments)
    }

    /// Zip `other` into this boundary along their single shared run
    ///
    /// The shared run disappears from both outlines and the two complementary
    /// arcs are concatenated into one cycle. An empty boundary simply takes
    /// the shape of `other`.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation, leaving the boundary untouched, if the
    /// two boundaries do not share exactly one run of edges shorter than both,
    /// or if their orientations differ
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.is_empty() {
            self.clone_from(other);
            return Ok(());
        }

        let segments = self.common_segments(other)?;
        let [segment] = segments.as_slice() else {
            return Err(invariant_violation(
                "merge",
                &format!(
                    "expected exactly one common segment, found {}",
                    segments.len()
                ),
            ));
        };
        let segment = *segment;

        if segment.length == 0 || segment.length >= self.len() || segment.length >= other.len() {
            return Err(invariant_violation(
                "merge",
                &format!(
                    "segment {segment} must share at least one edge and fewer than {} edges",
                    self.len().min(other.len())
                ),
            ));
        }

        let (own, theirs) = (self.orientation(), other.orientation());
        if own != theirs {
            return Err(invariant_violation(
                "merge",
                &format!("orientations differ ({own:?} and {theirs:?})"),
            ));
        }

        let mut merged = other.slice(segment.other_start + segment.length, segment.other_start);
        merged.extend_from(&self.slice(segment.end(), segment.start));

        if merged.len() + 2 * segment.length != self.len() + other.len() {
            return Err(invariant_violation(
                "merge",
                &format!(
                    "merged length {} inconsistent with {} + {} - 2 * {}",
                    merged.len(),
                    self.len(),
                    other.len(),
                    segment.length
                ),
            ));
        }

        *self = merged;
        Ok(())
    }

    /// Rotation offsets of `other` whose labels agree with this boundary along `segment`
    ///
    /// Unlabeled edges match anything; see [`Self::find_matching_rotations_by`].
    pub fn find_matching_rotations(&self, other: &Self, segment: Segment) -> Vec<usize> {
        self.find_matching_rotations_by(other, segment, labels_match)
    }

    /// Rotation offsets of `other` whose labels agree with this boundary along `segment`
    ///
    /// Rotating a square tile keeps its footprint but shifts its labels, so a
    /// rotation by `r` is tested by reading `other`'s labels on the window
    /// `[other_start - r, other_start - r + length)` against this boundary's
    /// labels on the segment read backwards. Every `r` in `0..other.len()`
    /// accepted by `label_cmp` on all paired edges is returned.
    pub fn find_matching_rotations_by<F>(
        &self,
        other: &Self,
        segment: Segment,
        label_cmp: F,
    ) -> Vec<usize>
    where
        F: Fn(Option<Label>, Option<Label>) -> bool,
    {
        let length = segment.length as isize;
        let start = segment.start as isize;
        let other_start = segment.other_start as isize;

        (0..other.len())
            .filter(|&rotation| {
                let rotation = rotation as isize;
                (0..length).all(|k| {
                    label_cmp(
                        self.label(start + length - 1 - k),
                        other.label(other_start - rotation + k),
                    )
                })
            })
            .collect()
    }
}

/// Group single shared points into maximal runs
///
/// `shared_points` holds `(index in self, index in other)` pairs in ascending
/// order of the first index. A run grows while both indices advance by one
/// step, forwards in self and backwards in other.
fn join_shared_points(shared_points: &[(usize, usize)], other_len: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(&(first, other_first)) = shared_points.get(cursor) {
        let mut length = 0;
        while let Some(&(i, j)) = shared_points.get(cursor + length + 1) {
            let step = length + 1;
            if i != first + step || j != cyclic(other_first as isize - step as isize, other_len) {
                break;
            }
            length = step;
        }

        segments.push(Segment::new(
            first,
            cyclic(other_first as isize - length as isize, other_len),
            length,
        ));
        cursor += length + 1;
    }

    segments
}

/// Fuse the first and last runs when they are one run split by the array end
///
/// Runs are found in array order, so the only place a run can be split is
/// between the last vertex and vertex 0. The last run must end on the last
/// vertex, the first run must start on vertex 0, and the other boundary must
/// continue without a gap from one to the other.
fn fuse_wrap_around(segments: &mut Vec<Segment>, len: usize, other_len: usize) {
    if segments.len() < 2 {
        return;
    }
    let (Some(&first), Some(&last)) = (segments.first(), segments.last()) else {
        return;
    };

    let gap = cyclic(
        last.other_start as isize - first.other_start as isize,
        other_len,
    );
    if first.start == 0 && last.end() + 1 == len && gap == first.length + 1 {
        segments.remove(0);
        if let Some(fused) = segments.last_mut() {
            *fused = Segment::new(
                last.start,
                first.other_start,
                first.length + last.length + 1,
            );
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, (point, label)) in self.points.iter().zip(&self.labels).enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match label {
                Some(label) => write!(f, "{point} {label}")?,
                None => write!(f, "{point} -")?,
            }
        }
        write!(f, "]")
    }
}
