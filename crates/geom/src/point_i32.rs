use std::ops::Add;

use super::Point;

/// A signed 2D point. Used for screen origins that can move above or left of
/// the screen while scrolling, and for wheel deltas.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct PointI32 {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl PointI32 {
    /// Construct a new signed point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the origin point.
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Offset by the given deltas, saturating at the i32 bounds.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for PointI32 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.offset(other.x, other.y)
    }
}

impl Add<Point> for PointI32 {
    type Output = Self;

    fn add(self, other: Point) -> Self {
        self + Self::from(other)
    }
}

impl From<(i32, i32)> for PointI32 {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

/// Coordinates past `i32::MAX` clamp to it.
impl From<Point> for PointI32 {
    fn from(p: Point) -> Self {
        Self {
            x: i32::try_from(p.x).unwrap_or(i32::MAX),
            y: i32::try_from(p.y).unwrap_or(i32::MAX),
        }
    }
}
