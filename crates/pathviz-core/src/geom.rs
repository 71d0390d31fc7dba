//! Geometry helpers: [`Point`], row-major index conversion, Manhattan
//! distance and 4-neighbor enumeration.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Index conversion
// ---------------------------------------------------------------------------

/// Flatten a point into a row-major cell index (`y * cols + x`).
///
/// The point must be in bounds; this is not checked here.
#[inline]
pub fn to_index(p: Point, cols: usize) -> usize {
    p.y as usize * cols + p.x as usize
}

/// Recover the point of a row-major cell index.
#[inline]
pub fn to_point(index: usize, cols: usize) -> Point {
    Point::new((index % cols) as i32, (index / cols) as i32)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Append the in-bounds 4-neighbors of `index` to `buf`, in **up, left,
/// down, right** order.
///
/// The order is load-bearing for the visualizer: it fixes the traversal
/// animation, so all callers rely on it being stable.
pub fn neighbors(index: usize, cols: usize, rows: usize, buf: &mut Vec<usize>) {
    let p = to_point(index, cols);
    if p.y > 0 {
        buf.push(index - cols);
    }
    if p.x > 0 {
        buf.push(index - 1);
    }
    if (p.y as usize) < rows - 1 {
        buf.push(index + cols);
    }
    if (p.x as usize) < cols - 1 {
        buf.push(index + 1);
    }
}
