use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// Widgets use it for their own size, where the origin is implied to be
/// (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Expanse {
    /// Construct a new expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanse_rect() {
        let e: Expanse = (10, 5).into();
        assert_eq!(e, Expanse::new(10, 5));
        assert_eq!(e.rect(), Rect::new(0, 0, 10, 5));
    }
}
