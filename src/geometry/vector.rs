//! Integer 2D vectors used for both grid positions and boundary edges

use std::fmt;
use std::ops::{Add, Sub};

/// Integer point or direction on the tile grid
///
/// Ordering is lexicographic on `(x, y)`, which makes the minimum of a tile
/// footprint its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vector {
    /// Horizontal component
    pub x: i32,
    /// Vertical component (pointing up)
    pub y: i32,
}

impl Vector {
    /// The origin, also the center of every generated map
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a vector from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate by `quarter_turns` counter-clockwise quarter turns
    ///
    /// Negative values rotate clockwise; the count is taken modulo 4.
    #[must_use]
    pub const fn rotate(self, quarter_turns: i32) -> Self {
        match quarter_turns.rem_euclid(4) {
            0 => self,
            1 => Self::new(-self.y, self.x),
            2 => Self::new(-self.x, -self.y),
            _ => Self::new(self.y, -self.x),
        }
    }

    /// Z component of the cross product, positive when `other` turns left
    pub const fn cross_z(self, other: Self) -> i64 {
        self.x as i64 * other.y as i64 - self.y as i64 * other.x as i64
    }

    /// Manhattan distance to the origin
    pub const fn l1_distance(self) -> i64 {
        (self.x as i64).abs() + (self.y as i64).abs()
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
