//! Matched runs between two boundaries

use std::fmt;

/// A maximal run of vertices shared by two boundaries
///
/// With boundaries `a` and `b`, the run satisfies
/// `a.point(start + k) == b.point(other_start + length - k)` for `k` in `0..=length`:
/// `b` is walked backwards because the two outlines face each other along the
/// shared edges. A run of `length` edges therefore covers `length + 1` vertices,
/// and a `length` of zero is a single shared point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Index of the first shared vertex in the first boundary
    pub start: usize,
    /// Index of the first shared vertex in the second boundary's own walking order
    pub other_start: usize,
    /// Number of shared edges
    pub length: usize,
}

impl Segment {
    /// The placeholder used for unknown or forbidden placements
    pub const EMPTY: Self = Self::new(0, 0, 0);

    /// Create a segment from its start indices and length
    pub const fn new(start: usize, other_start: usize, length: usize) -> Self {
        Self {
            start,
            other_start,
            length,
        }
    }

    /// Index of the last shared vertex in the first boundary, before wrapping
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.start, self.other_start, self.length)
    }
}
