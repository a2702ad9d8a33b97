//! A vertically scrolling list of arbitrary child widgets.
//!
//! Children keep their own heights and are stacked top to bottom inside a
//! [`ClipView`]. A [`ScrollBar`] on the right edge appears only when the
//! stacked height exceeds the viewport, and children are narrowed to make
//! room for it. Mouse wheel movement during any click dispatch scrolls the
//! list.

use tracing::{debug, trace};
use trellis::{
    Button, ClickContext, DisplayContext, Padding, Rect, Widget, WidgetBase, display_children,
    process_click_children,
};

use crate::{ClipView, ScrollBar, ScrollConfig};

/// A scrollable list container.
pub struct ScrollableList {
    /// Shared widget state.
    base: WidgetBase,
    /// Scroll tuning.
    config: ScrollConfig,
    /// Right-edge scrollbar, hidden until content overflows.
    scrollbar: ScrollBar,
    /// Clipping container that owns the items.
    clip_view: ClipView,
    /// Insets between our edges and the viewport.
    padding: Padding,
    /// Set when child positions need recomputing.
    layout_dirty: bool,
    /// Render from the top of the first child under the scroll position
    /// instead of the raw position.
    snap_offset: bool,
    /// Total height of all children at the last layout pass.
    scrollable_height: u32,
}

impl Default for ScrollableList {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollableList {
    /// An empty list using the default scroll tuning.
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    /// An empty list using `config`.
    pub fn with_config(config: ScrollConfig) -> Self {
        let mut scrollbar = ScrollBar::new();
        scrollbar.show(false);
        Self {
            base: WidgetBase::default(),
            config,
            scrollbar,
            clip_view: ClipView::new(),
            padding: Padding::zero(),
            layout_dirty: false,
            snap_offset: false,
            scrollable_height: 0,
        }
    }

    /// Append an item below the existing ones. The list takes ownership.
    pub fn add_item(&mut self, item: impl Widget) {
        self.clip_view.attach(Box::new(item));
        self.layout_dirty = true;
    }

    /// The items, in stacking order.
    pub fn items(&self) -> &[Box<dyn Widget>] {
        self.clip_view.items()
    }

    /// The scrollbar.
    pub fn scrollbar(&self) -> &ScrollBar {
        &self.scrollbar
    }

    /// The clipping container holding the items.
    pub fn clip_view(&self) -> &ClipView {
        &self.clip_view
    }

    /// The scroll tuning in use.
    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Current padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Replace the padding.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.layout_dirty = true;
    }

    /// Is snap mode on?
    pub fn snap_offset(&self) -> bool {
        self.snap_offset
    }

    /// Toggle snapping the render offset to the top of a child.
    pub fn set_snap_offset(&mut self, value: bool) {
        self.snap_offset = value;
    }

    /// Total height of all items at the last layout pass.
    pub fn scrollable_height(&self) -> u32 {
        self.scrollable_height
    }

    /// Will the next `update_layout` recompute positions?
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Let the wheel move the list.
    pub fn enable_scroll(&mut self) {
        self.scrollbar.enable();
    }

    /// Stop the wheel moving the list.
    pub fn disable_scroll(&mut self) {
        self.scrollbar.disable();
    }

    /// Keep the view pinned to the bottom as items are added.
    pub fn set_stick_to_bottom(&mut self, value: bool) {
        self.scrollbar.set_stick_to_bottom(value);
    }

    /// The area inside the padding, relative to our origin. Oversized
    /// padding collapses it to zero.
    fn viewport(&self) -> Rect {
        self.base
            .rect()
            .expanse()
            .rect()
            .inset_saturating(self.padding)
    }

    /// Stack every item at `width`, returning the total height.
    fn stack_items(&mut self, width: u32) -> u32 {
        let mut y = 0u32;
        for item in self.clip_view.items_mut() {
            let h = item.base().height();
            item.set_geometry(Rect::new(0, y, width, h));
            y = y.saturating_add(h);
        }
        y
    }

    /// Recompute item positions, scrollbar visibility and the scrollable
    /// extent. Does nothing unless something changed since the last pass.
    ///
    /// Item width depends on whether the scrollbar shows, which depends on
    /// the total height, which can depend on item width. We stack once at the
    /// narrow width, decide visibility, and restack at full width only if the
    /// scrollbar turns out not to be needed.
    pub fn update_layout(&mut self) {
        if !self.layout_dirty {
            return;
        }
        self.layout_dirty = false;

        let viewport = self.viewport();
        let width_without_scrollbar = viewport.w;
        let width_with_scrollbar = width_without_scrollbar
            .saturating_sub(self.scrollbar.base().width())
            .saturating_sub(1);
        let height = viewport.h;

        self.scrollable_height = self.stack_items(width_with_scrollbar);
        self.scrollbar.show(self.scrollable_height > height);

        let clip_width = if self.scrollbar.visible() {
            width_with_scrollbar
        } else {
            self.scrollable_height = self.stack_items(width_without_scrollbar);
            width_without_scrollbar
        };
        self.clip_view.set_geometry(Rect::new(
            viewport.tl.x,
            viewport.tl.y,
            clip_width,
            height,
        ));
        self.scrollbar.set_view_size(height);
        self.scrollbar.set_scrollable_size(self.scrollable_height);

        debug!(
            items = self.items().len(),
            scrollable_height = self.scrollable_height,
            scrollbar = self.scrollbar.visible(),
            "list layout"
        );
    }

    /// The y origin of the first item whose vertical midpoint lies below the
    /// scroll position, or 0 if there is none. Rendering from here avoids
    /// showing a sliver of a half-scrolled item at the top edge.
    pub fn compute_snapped_offset(&self) -> u32 {
        let position = self.scrollbar.position();
        self.clip_view
            .items()
            .iter()
            .map(|item| item.base().rect())
            .find(|r| r.tl.y.saturating_add(r.h / 2) > position)
            .map(|r| r.tl.y)
            .unwrap_or(0)
    }
}

impl Widget for ScrollableList {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn children(&self, f: &mut dyn FnMut(&dyn Widget)) {
        f(&self.scrollbar);
        f(&self.clip_view);
    }

    fn children_mut(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) {
        f(&mut self.scrollbar);
        f(&mut self.clip_view);
    }

    fn geometry_changed(&mut self) {
        let w = self.config.scrollbar_width;
        self.scrollbar.set_geometry(Rect::new(
            self.base.width().saturating_sub(w),
            0,
            w,
            self.base.height(),
        ));
        self.scrollbar.set_view_size(self.viewport().h);
        self.layout_dirty = true;
    }

    fn run(&mut self) {
        self.update_layout();
        let offset = if self.snap_offset {
            self.compute_snapped_offset()
        } else {
            self.scrollbar.position()
        };
        self.clip_view.set_top_offset(offset);
    }

    fn process_click_recursive(
        &mut self,
        ctx: &ClickContext,
        button: Button,
        was_pressed: bool,
    ) -> bool {
        // Every dispatch pass applies the wheel; for ordinary clicks the
        // delta is zero.
        let delta = ctx
            .wheel_delta()
            .y
            .saturating_neg()
            .saturating_mul(self.config.wheel_step);
        self.scrollbar.increment_position(delta);
        if delta != 0 {
            trace!(delta, position = self.scrollbar.position(), "wheel scroll");
        }
        process_click_children(self, ctx, button, was_pressed)
    }

    fn display_recursive(&mut self, ctx: &mut DisplayContext) {
        self.update_layout();
        display_children(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use trellis::testing::Probe;

    use super::*;
    use crate::SCROLLBAR_WIDTH;

    fn list(heights: &[u32], w: u32, h: u32) -> ScrollableList {
        let mut l = ScrollableList::new();
        l.set_geometry(Rect::new(0, 0, w, h));
        for (i, height) in heights.iter().enumerate() {
            l.add_item(Probe::new(&format!("item{i}"), *height));
        }
        l
    }

    fn ys(l: &ScrollableList) -> Vec<u32> {
        l.items().iter().map(|i| i.base().y()).collect()
    }

    fn widths(l: &ScrollableList) -> Vec<u32> {
        l.items().iter().map(|i| i.base().width()).collect()
    }

    #[test]
    fn overflow_shows_scrollbar() {
        let mut l = list(&[100, 100, 100], 300, 200);
        l.update_layout();
        assert!(l.scrollbar().visible());
        assert_eq!(l.scrollable_height(), 300);
        assert_eq!(ys(&l), vec![0, 100, 200]);
        assert_eq!(widths(&l), vec![300 - SCROLLBAR_WIDTH - 1; 3]);
        assert_eq!(l.clip_view().base().rect(), Rect::new(0, 0, 284, 200));
        assert_eq!(l.scrollbar().base().rect(), Rect::new(285, 0, 15, 200));
        assert_eq!(l.scrollbar().scrollable_size(), 300);
        assert_eq!(l.scrollbar().view_size(), 200);
    }

    #[test]
    fn fitting_content_uses_full_width() {
        let mut l = list(&[50, 50], 300, 200);
        l.update_layout();
        assert!(!l.scrollbar().visible());
        assert_eq!(widths(&l), vec![300, 300]);
        assert_eq!(l.clip_view().base().rect(), Rect::new(0, 0, 300, 200));

        // Exactly filling the viewport does not overflow.
        let mut l = list(&[100, 100], 300, 200);
        l.update_layout();
        assert!(!l.scrollbar().visible());
    }

    #[test]
    fn layout_is_lazy() {
        let mut l = list(&[10], 100, 100);
        assert!(l.is_layout_dirty());
        l.update_layout();
        assert!(!l.is_layout_dirty());

        l.add_item(Probe::new("late", 20));
        assert!(l.is_layout_dirty());
        l.update_layout();
        assert_eq!(ys(&l), vec![0, 10]);

        l.set_padding(Padding::new(3, 4, 5, 6));
        assert!(l.is_layout_dirty());
        l.update_layout();
        assert_eq!(l.clip_view().base().rect(), Rect::new(3, 4, 92, 90));

        l.set_geometry(Rect::new(0, 0, 100, 100));
        assert!(!l.is_layout_dirty());
        l.set_geometry(Rect::new(0, 0, 120, 100));
        assert!(l.is_layout_dirty());
    }

    #[test]
    fn padding_reduces_viewport() {
        let mut l = list(&[60, 60, 60], 300, 200);
        l.update_layout();
        assert!(!l.scrollbar().visible());

        l.set_padding(Padding::new(0, 15, 0, 15));
        l.update_layout();
        assert!(l.scrollbar().visible());
        assert_eq!(l.clip_view().base().rect(), Rect::new(0, 15, 284, 170));
    }

    #[test]
    fn uneven_padding_narrows_items() {
        let mut l = list(&[50, 50], 100, 100);
        l.set_padding(Padding::new(4, 10, 6, 10));
        l.update_layout();
        assert!(l.scrollbar().visible());
        assert_eq!(widths(&l), vec![74, 74]);
        assert_eq!(l.clip_view().base().rect(), Rect::new(4, 10, 74, 80));
        assert_eq!(l.scrollbar().view_size(), 80);
        assert_eq!(l.scrollbar().max_position(), 20);
    }

    #[test]
    fn oversized_padding_collapses_viewport() {
        let mut l = list(&[10], 20, 20);
        l.set_padding(Padding::uniform(50));
        l.update_layout();
        assert_eq!(l.clip_view().base().rect(), Rect::new(50, 50, 0, 0));
        assert!(l.scrollbar().visible());
    }

    #[test]
    fn snapped_offset() {
        let l = ScrollableList::new();
        assert_eq!(l.compute_snapped_offset(), 0);

        let mut l = list(&[40, 40, 40, 40, 40], 100, 100);
        l.update_layout();
        assert_eq!(l.compute_snapped_offset(), 0);
        l.scrollbar.set_position(19);
        assert_eq!(l.compute_snapped_offset(), 0);
        l.scrollbar.set_position(20);
        assert_eq!(l.compute_snapped_offset(), 40);
        l.scrollbar.set_position(59);
        assert_eq!(l.compute_snapped_offset(), 40);
        l.scrollbar.set_position(100);
        assert_eq!(l.compute_snapped_offset(), 120);
    }

    #[test]
    fn snapped_offset_past_every_midpoint_is_zero() {
        // A viewport shorter than half the last item lets the position pass
        // every midpoint.
        let mut l = list(&[10, 10], 100, 4);
        l.update_layout();
        l.scrollbar.set_position(16);
        assert_eq!(l.scrollbar().position(), 16);
        assert_eq!(l.compute_snapped_offset(), 0);
    }

    #[test]
    fn run_pushes_offset() {
        let mut l = list(&[40, 40, 40, 40, 40], 100, 100);
        l.run();
        l.scrollbar.set_position(30);
        l.run();
        assert_eq!(l.clip_view().top_offset(), 30);

        l.set_snap_offset(true);
        assert_eq!(l.clip_view().top_offset(), 30);
        l.run();
        assert_eq!(l.clip_view().top_offset(), 40);
        assert_eq!(l.scrollbar().position(), 30);
    }
}
