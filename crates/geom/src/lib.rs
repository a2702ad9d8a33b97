//! Geometry primitives used across trellis.

#![warn(missing_docs)]

/// Width/height size type.
mod expanse;
/// Edge insets.
mod padding;
/// Point helpers.
mod point;
/// Signed point helpers.
mod point_i32;
/// Rectangle operations.
mod rect;
/// Signed rectangle operations.
mod rect_i32;

pub use expanse::Expanse;
pub use padding::Padding;
pub use point::Point;
pub use point_i32::PointI32;
pub use rect::Rect;
pub use rect_i32::RectI32;
