//! Grid coordinates and offsets.
//!
//! Coordinates are signed so that a candidate destination one step off the
//! edge (e.g. `(-1, 0)`) is representable and can be rejected by the
//! legality rules rather than by arithmetic underflow.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A cell coordinate on the grid. `x` grows east, `y` grows north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the point lies in `[0, size) x [0, size)`.
    #[must_use]
    pub fn in_square(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// Iterate over every point of a `size x size` square, row by row from `y = 0`.
    pub fn square(size: usize) -> impl Iterator<Item = Point> {
        let size = size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An offset between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    /// Create a new displacement.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Number of single (orthogonal or diagonal) steps needed to cover this offset.
    ///
    /// A one-step diagonal counts as 1, not 2.
    #[must_use]
    pub fn steps(self) -> u32 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }
}

impl Add for Displacement {
    type Output = Displacement;

    fn add(self, rhs: Displacement) -> Displacement {
        Displacement::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Add<Displacement> for Point {
    type Output = Point;

    fn add(self, rhs: Displacement) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for Point {
    type Output = Displacement;

    fn sub(self, rhs: Point) -> Displacement {
        Displacement::new(self.x - rhs.x, self.y - rhs.y)
    }
}
