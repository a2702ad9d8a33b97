use crate::{
    geom::Rect,
    widget::{Widget, WidgetBase},
};

/// A container that owns its children and lays them out top to bottom at
/// its own width whenever its geometry changes.
#[derive(Default)]
pub struct Stack {
    /// Shared widget state.
    base: WidgetBase,
    /// Owned children, in stacking order.
    items: Vec<Box<dyn Widget>>,
}

impl Stack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn push(&mut self, w: impl Widget) {
        self.items.push(Box::new(w));
    }

    /// Place children top to bottom.
    fn restack(&mut self) {
        let width = self.base.width();
        let mut y = 0;
        for c in &mut self.items {
            let h = c.base().height();
            c.set_geometry(Rect::new(0, y, width, h));
            y += h;
        }
    }
}

impl Widget for Stack {
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

    fn geometry_changed(&mut self) {
        self.restack();
    }
}
