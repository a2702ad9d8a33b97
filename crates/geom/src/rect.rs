use super::{Expanse, Padding, Point};

/// A rectangle with an unsigned origin, in pixels.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// Does this rect have a zero size?
    pub fn is_zero(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.tl.y.saturating_add(self.h)
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x
            && p.x < self.tl.x.saturating_add(self.w)
            && p.y >= self.tl.y
            && p.y < self.bottom()
    }

    /// Shrink this rectangle by a set of insets. Insets larger than the
    /// rectangle collapse the affected dimension to zero.
    pub fn inset_saturating(&self, p: Padding) -> Self {
        Self::new(
            self.tl.x.saturating_add(p.left),
            self.tl.y.saturating_add(p.top),
            self.w.saturating_sub(p.horizontal()),
            self.h.saturating_sub(p.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point(Point { x: 10, y: 10 }));
        assert!(!r.contains_point(Point { x: 9, y: 10 }));
        assert!(!r.contains_point(Point { x: 20, y: 20 }));
        assert!(r.contains_point(Point { x: 19, y: 19 }));
        assert!(!r.contains_point(Point { x: 20, y: 21 }));
    }

    #[test]
    fn inset() {
        let r = Rect::new(0, 0, 100, 50);
        assert_eq!(
            r.inset_saturating(Padding::new(1, 2, 3, 4)),
            Rect::new(1, 2, 96, 44)
        );
        assert_eq!(
            r.inset_saturating(Padding::new(60, 0, 60, 0)),
            Rect::new(60, 0, 0, 50)
        );
        assert!(r.inset_saturating(Padding::uniform(30)).is_zero());
    }
}
