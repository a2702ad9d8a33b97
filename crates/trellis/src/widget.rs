//! Widget trait and shared widget state.

use std::any::type_name;

use crate::{
    ClickContext, DisplayContext, WidgetName,
    event::Button,
    geom::{Expanse, Rect},
};

/// State every widget carries: its rectangle relative to the parent origin
/// and its visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    /// Rectangle relative to the parent's origin.
    rect: Rect,
    /// Hidden widgets are skipped by display and click dispatch.
    visible: bool,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            visible: true,
        }
    }
}

impl WidgetBase {
    /// A visible widget occupying `rect`.
    pub fn new(rect: impl Into<Rect>) -> Self {
        Self {
            rect: rect.into(),
            visible: true,
        }
    }

    /// A visible widget of the given size at the origin.
    pub fn sized(w: u32, h: u32) -> Self {
        Self::new(Expanse::new(w, h).rect())
    }

    /// Rectangle relative to the parent's origin.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Horizontal offset within the parent.
    pub fn x(&self) -> u32 {
        self.rect.tl.x
    }

    /// Vertical offset within the parent.
    pub fn y(&self) -> u32 {
        self.rect.tl.y
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.rect.w
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.rect.h
    }

    /// Is the widget shown?
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn show(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Replace the rectangle, returning true if it changed.
    pub(crate) fn replace_rect(&mut self, rect: Rect) -> bool {
        let changed = self.rect != rect;
        self.rect = rect;
        changed
    }
}

/// Widgets are nodes in the UI tree. Each widget owns its children; the
/// recursive passes below walk that ownership tree.
pub trait Widget: Send + 'static {
    /// Shared widget state.
    fn base(&self) -> &WidgetBase;

    /// Mutable shared widget state.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Visit this widget's children in stacking order.
    fn children(&self, _f: &mut dyn FnMut(&dyn Widget)) {}

    /// Visit this widget's children mutably, in stacking order.
    fn children_mut(&mut self, _f: &mut dyn FnMut(&mut dyn Widget)) {}

    /// Called after the widget's rectangle changes.
    fn geometry_changed(&mut self) {}

    /// Move and resize the widget. `geometry_changed` fires only when the
    /// rectangle actually changes.
    fn set_geometry(&mut self, rect: Rect) {
        if self.base_mut().replace_rect(rect) {
            self.geometry_changed();
        }
    }

    /// Per-frame update hook.
    fn run(&mut self) {}

    /// Run this widget, then its children.
    fn run_recursive(&mut self) {
        self.run();
        self.children_mut(&mut |c| c.run_recursive());
    }

    /// Called when a press lands on this widget and no child claimed it.
    fn clicked(&mut self, _ctx: &ClickContext, _button: Button) {}

    /// Called when a release lands on this widget and no child claimed it.
    fn released(&mut self, _ctx: &ClickContext, _button: Button) {}

    /// Dispatch a press or release. The context's mouse position is in the
    /// parent's space, and the parent has already hit-tested this widget.
    /// Returns true if the event was handled.
    fn process_click_recursive(
        &mut self,
        ctx: &ClickContext,
        button: Button,
        was_pressed: bool,
    ) -> bool {
        process_click_children(self, ctx, button, was_pressed)
    }

    /// Draw this widget's own content, relative to the current origin.
    fn display(&self, _ctx: &mut DisplayContext) {}

    /// Draw this widget, then its children.
    fn display_recursive(&mut self, ctx: &mut DisplayContext) {
        display_children(self, ctx)
    }

    /// Name used in display lists and dumps.
    fn name(&self) -> WidgetName {
        let name = type_name::<Self>();
        let short = name.rsplit("::").next().unwrap_or(name);
        WidgetName::convert(short)
    }
}

/// The standard click dispatch: rebase the mouse into the widget's space,
/// offer the event to each visible child under the mouse, then fall back to
/// the widget's own `clicked`/`released` hook. Overrides call this to keep
/// the default behaviour.
pub fn process_click_children<W>(
    w: &mut W,
    ctx: &ClickContext,
    button: Button,
    was_pressed: bool,
) -> bool
where
    W: Widget + ?Sized,
{
    let inner = ctx.shifted(w.base().rect().tl);
    let mut handled = false;
    w.children_mut(&mut |c| {
        if handled || !c.base().visible() || !inner.hits(c.base().rect()) {
            return;
        }
        handled = c.process_click_recursive(&inner, button, was_pressed);
    });
    if handled {
        return true;
    }
    if was_pressed {
        w.clicked(&inner, button);
    } else {
        w.released(&inner, button);
    }
    true
}

/// The standard display pass: skip hidden widgets, otherwise draw the widget
/// and then its children with the origin moved to the widget's top-left.
pub fn display_children<W>(w: &mut W, ctx: &mut DisplayContext)
where
    W: Widget + ?Sized,
{
    if !w.base().visible() {
        return;
    }
    let tl = w.base().rect().tl;
    ctx.with_offset(tl, |ctx| {
        w.display(ctx);
        w.children_mut(&mut |c| c.display_recursive(ctx));
    });
}
