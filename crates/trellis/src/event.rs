use crate::geom::{PointI32, Rect};

/// Mouse buttons that can drive a click dispatch pass.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left (primary) mouse button.
    Left,
    /// Right (secondary) mouse button.
    Right,
    /// Middle (tertiary) mouse button.
    Middle,
}

/// Input state for one click dispatch pass. The mouse position is expressed
/// in the coordinate space of the widget receiving the context, i.e. relative
/// to its parent's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickContext {
    /// Mouse position.
    pub mouse: PointI32,
    /// Mouse wheel delta for this frame. Positive `y` is wheel-up.
    pub wheel: PointI32,
}

impl ClickContext {
    /// Construct a context from a mouse position and wheel delta.
    pub fn new(mouse: impl Into<PointI32>, wheel: impl Into<PointI32>) -> Self {
        Self {
            mouse: mouse.into(),
            wheel: wheel.into(),
        }
    }

    /// A context for a pure wheel movement at a position.
    pub fn wheel(mouse: impl Into<PointI32>, dy: i32) -> Self {
        Self::new(mouse, (0, dy))
    }

    /// The wheel delta for this pass.
    pub fn wheel_delta(&self) -> PointI32 {
        self.wheel
    }

    /// Rebase the mouse position into the space of a widget whose origin is
    /// `origin` in the current space.
    pub fn shifted(&self, origin: impl Into<PointI32>) -> Self {
        let o = origin.into();
        Self {
            mouse: self.mouse.offset(-o.x, -o.y),
            wheel: self.wheel,
        }
    }

    /// Does the mouse fall within `r`, expressed in the current space?
    pub fn hits(&self, r: Rect) -> bool {
        let (x, y) = (self.mouse.x as i64, self.mouse.y as i64);
        x >= r.tl.x as i64
            && y >= r.tl.y as i64
            && x < r.tl.x as i64 + r.w as i64
            && y < r.tl.y as i64 + r.h as i64
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn shift_and_hit() {
        let c = ClickContext::new((15, 25), (0, -1));
        let r = Rect::new(10, 20, 10, 10);
        assert!(c.hits(r));
        let s = c.shifted(r.tl);
        assert_eq!(s.mouse, PointI32::new(5, 5));
        assert_eq!(s.wheel_delta(), PointI32::new(0, -1));
        assert!(!ClickContext::new((-1, 25), (0, 0)).hits(r));
        assert!(!ClickContext::new((20, 25), (0, 0)).hits(r));
    }

    proptest! {
        #[test]
        fn shifting_preserves_hits(
            mx in -500i32..500, my in -500i32..500,
            x in 0u32..300, y in 0u32..300, w in 0u32..300, h in 0u32..300,
        ) {
            let c = ClickContext::new((mx, my), (0, 1));
            let r = Rect::new(x, y, w, h);
            let local = c.shifted(r.tl);
            prop_assert_eq!(c.hits(r), local.hits(Rect::new(0, 0, w, h)));
            prop_assert_eq!(local.mouse, PointI32::new(mx - x as i32, my - y as i32));
            prop_assert_eq!(local.wheel_delta(), c.wheel_delta());
        }
    }
}
