use trellis::{
    Button, ClickContext, DisplayContext, PointI32, Widget, WidgetBase, process_click_children,
};

/// A container that clips its children to its own rectangle and shifts them
/// up by a top offset. Children are positioned in content space; the top
/// offset selects which part of that space is shown.
#[derive(Default)]
pub struct ClipView {
    /// Shared widget state.
    base: WidgetBase,
    /// Owned children, in stacking order.
    items: Vec<Box<dyn Widget>>,
    /// Content-space y shown at the top edge.
    top_offset: u32,
}

impl ClipView {
    /// An empty clip view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a child, appending it after existing children.
    pub fn attach(&mut self, child: Box<dyn Widget>) {
        self.items.push(child);
    }

    /// Children in stacking order.
    pub fn items(&self) -> &[Box<dyn Widget>] {
        &self.items
    }

    /// Mutable children in stacking order.
    pub fn items_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.items
    }

    /// Content-space y shown at the top edge.
    pub fn top_offset(&self) -> u32 {
        self.top_offset
    }

    /// Set the content-space y shown at the top edge.
    pub fn set_top_offset(&mut self, offset: u32) {
        self.top_offset = offset;
    }

    /// Content origin relative to this widget's own origin.
    fn content_origin(&self) -> PointI32 {
        PointI32::new(0, -(self.top_offset.min(i32::MAX as u32) as i32))
    }
}

impl Widget for ClipView {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {
        for c in &self.items {
            f(c.as_ref());
        }
    }

    fn children_mut(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) {
        for c in &mut self.items {
            f(c.as_mut());
        }
    }

    fn process_click_recursive(
        &mut self,
        ctx: &ClickContext,
        button: Button,
        was_pressed: bool,
    ) -> bool {
        // Move the mouse down into content space, so children hit-test
        // against their unscrolled rectangles.
        let mut shifted = *ctx;
        shifted.mouse = ctx.mouse.offset(0, -self.content_origin().y);
        process_click_children(self, &shifted, button, was_pressed)
    }

    fn display_recursive(&mut self, ctx: &mut DisplayContext) {
        if !self.base.visible() {
            return;
        }
        let rect = self.base.rect();
        let local = rect.expanse().rect();
        let origin = self.content_origin();
        let top = self.top_offset;
        ctx.with_offset(rect.tl, |ctx| {
            self.display(ctx);
            ctx.with_clip(local, |ctx| {
                ctx.with_offset(origin, |ctx| {
                    for c in &mut self.items {
                        let r = c.base().rect();
                        if r.bottom() <= top || r.tl.y >= top.saturating_add(local.h) {
                            continue;
                        }
                        c.display_recursive(ctx);
                    }
                });
            });
        });
    }
}
