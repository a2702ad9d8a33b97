//! A recording renderer. Widgets draw rectangles into a display list, which
//! the caller then hands to a backend. Offsets and clipping are applied as
//! commands are recorded, so the list holds final screen rectangles.

use crate::{
    WidgetName,
    geom::{Expanse, PointI32, Rect, RectI32},
};

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCmd {
    /// Name of the widget that issued the command.
    pub name: WidgetName,
    /// Screen rectangle after clipping.
    pub rect: Rect,
    /// Fill glyph, used by text backends and tests.
    pub fill: char,
}

/// The context threaded through a display pass.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    /// Screen position of the current widget's origin.
    origin: PointI32,
    /// Current clip rectangle, in screen coordinates.
    clip: Rect,
    /// Recorded commands.
    cmds: Vec<DrawCmd>,
}

impl DisplayContext {
    /// A context covering a screen of the given size.
    pub fn new(screen: impl Into<Expanse>) -> Self {
        Self {
            origin: PointI32::zero(),
            clip: screen.into().rect(),
            cmds: vec![],
        }
    }

    /// Screen position of the current origin.
    pub fn origin(&self) -> PointI32 {
        self.origin
    }

    /// Current clip rectangle.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Run `f` with the origin moved by `offset`. The previous origin is
    /// restored afterwards.
    pub fn with_offset(&mut self, offset: impl Into<PointI32>, f: impl FnOnce(&mut Self)) {
        let saved = self.origin;
        let o = offset.into();
        self.origin = saved.offset(o.x, o.y);
        f(self);
        self.origin = saved;
    }

    /// Run `f` with the clip narrowed to `local`, a rectangle relative to the
    /// current origin. Clips only ever shrink.
    pub fn with_clip(&mut self, local: Rect, f: impl FnOnce(&mut Self)) {
        let saved = self.clip;
        self.clip = self
            .screen_rect(local)
            .clip(saved)
            .unwrap_or_default();
        f(self);
        self.clip = saved;
    }

    /// Project a rectangle relative to the current origin onto the screen.
    pub fn screen_rect(&self, local: Rect) -> RectI32 {
        let tl = self.origin + local.tl;
        RectI32::new(tl.x, tl.y, local.w, local.h)
    }

    /// Record a fill of `local`, relative to the current origin. Commands
    /// that fall entirely outside the clip are dropped.
    pub fn draw(&mut self, name: &WidgetName, local: Rect, fill: char) {
        if self.clip.is_zero() {
            return;
        }
        if let Some(rect) = self.screen_rect(local).clip(self.clip) {
            self.cmds.push(DrawCmd {
                name: name.clone(),
                rect,
                fill,
            });
        }
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Consume the context, returning the display list.
    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_nest_and_restore() {
        let mut c = DisplayContext::new((100, 100));
        let n = WidgetName::convert("box");
        c.with_offset((10, 10), |c| {
            c.with_offset((5, -20), |c| {
                assert_eq!(c.origin(), PointI32::new(15, -10));
                c.draw(&n, Rect::new(0, 0, 10, 20), 'x');
            });
            assert_eq!(c.origin(), PointI32::new(10, 10));
        });
        assert_eq!(c.origin(), PointI32::zero());
        assert_eq!(c.commands()[0].rect, Rect::new(15, 0, 10, 10));
    }

    #[test]
    fn clip_drops_and_trims() {
        let mut c = DisplayContext::new((100, 100));
        let n = WidgetName::convert("box");
        c.with_clip(Rect::new(10, 10, 20, 20), |c| {
            c.draw(&n, Rect::new(0, 0, 15, 15), 'a');
            c.draw(&n, Rect::new(50, 50, 5, 5), 'b');
            c.with_clip(Rect::new(0, 0, 200, 200), |c| {
                assert_eq!(c.clip(), Rect::new(10, 10, 20, 20));
            });
        });
        assert_eq!(c.clip(), Rect::new(0, 0, 100, 100));
        let cmds = c.into_commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].rect, Rect::new(10, 10, 5, 5));
    }
}
