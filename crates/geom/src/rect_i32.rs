use super::{PointI32, Rect};

/// A rectangle projected onto the screen. The origin is signed because
/// scrolled content can start above or left of the visible area; clipping it
/// against an unsigned rect yields the part that is actually drawn.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct RectI32 {
    /// Top-left corner.
    pub tl: PointI32,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl RectI32 {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: PointI32 { x, y },
            w,
            h,
        }
    }

    /// The visible part of this rectangle within `bounds`, or `None` if none
    /// of it is visible.
    pub fn clip(&self, bounds: Rect) -> Option<Rect> {
        let span = |start: i32, len: u32, lo: u32, blen: u32| {
            let s = i64::from(start).max(i64::from(lo));
            let e = (i64::from(start) + i64::from(len)).min(i64::from(lo) + i64::from(blen));
            (e > s).then(|| (s as u32, (e - s) as u32))
        };
        let (x, w) = span(self.tl.x, self.w, bounds.tl.x, bounds.w)?;
        let (y, h) = span(self.tl.y, self.h, bounds.tl.y, bounds.h)?;
        Some(Rect::new(x, y, w, h))
    }
}
