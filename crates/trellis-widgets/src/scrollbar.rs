use trellis::{DisplayContext, Rect, Widget, WidgetBase, WidgetName};

/// A vertical scrollbar. It tracks a position within content that is
/// `scrollable_size` tall, viewed through a window `view_size` tall. The
/// position runs from 0 to `max_position`.
pub struct ScrollBar {
    /// Shared widget state.
    base: WidgetBase,
    /// Current scroll position.
    position: u32,
    /// Height of the visible window.
    view_size: u32,
    /// Height of the content.
    scrollable_size: u32,
    /// Keep the position pinned to the end as the content grows.
    stick_to_bottom: bool,
    /// Disabled scrollbars ignore position increments.
    enabled: bool,
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollBar {
    /// A visible, enabled scrollbar with no content.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            position: 0,
            view_size: 0,
            scrollable_size: 0,
            stick_to_bottom: false,
            enabled: true,
        }
    }

    /// The current scroll position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// The largest reachable position.
    pub fn max_position(&self) -> u32 {
        self.scrollable_size.saturating_sub(self.view_size)
    }

    /// Height of the visible window.
    pub fn view_size(&self) -> u32 {
        self.view_size
    }

    /// Height of the content.
    pub fn scrollable_size(&self) -> u32 {
        self.scrollable_size
    }

    /// Set the position, clamped to the scrollable range.
    pub fn set_position(&mut self, position: u32) {
        self.position = position.min(self.max_position());
    }

    /// Move the position by `delta`, clamped to the scrollable range. Has no
    /// effect while disabled.
    pub fn increment_position(&mut self, delta: i32) {
        if !self.enabled || delta == 0 {
            return;
        }
        let p = if delta < 0 {
            self.position.saturating_sub(delta.unsigned_abs())
        } else {
            self.position.saturating_add(delta.unsigned_abs())
        };
        self.set_position(p);
    }

    /// Set the height of the visible window.
    pub fn set_view_size(&mut self, size: u32) {
        self.resize(|s| s.view_size = size);
    }

    /// Set the height of the content.
    pub fn set_scrollable_size(&mut self, size: u32) {
        self.resize(|s| s.scrollable_size = size);
    }

    /// Apply a change to the range, then either follow the bottom or clamp.
    fn resize(&mut self, f: impl FnOnce(&mut Self)) {
        let at_bottom = self.position >= self.max_position();
        f(self);
        if self.stick_to_bottom && at_bottom {
            self.position = self.max_position();
        } else {
            self.set_position(self.position);
        }
    }

    /// Is the view pinned to the bottom as content grows?
    pub fn stick_to_bottom(&self) -> bool {
        self.stick_to_bottom
    }

    /// Pin the view to the bottom as content grows.
    pub fn set_stick_to_bottom(&mut self, value: bool) {
        self.stick_to_bottom = value;
    }

    /// Show or hide the scrollbar.
    pub fn show(&mut self, visible: bool) {
        self.base.show(visible);
    }

    /// Is the scrollbar shown?
    pub fn visible(&self) -> bool {
        self.base.visible()
    }

    /// Accept position increments.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore position increments.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Does the scrollbar accept increments?
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The thumb rectangle, relative to the scrollbar's own origin.
    pub fn thumb(&self) -> Rect {
        let (w, h) = (self.base.width(), self.base.height());
        if self.scrollable_size <= self.view_size || self.scrollable_size == 0 {
            return Rect::new(0, 0, w, h);
        }
        let thumb_h = (h as u64 * self.view_size as u64 / self.scrollable_size as u64).max(1);
        let travel = h as u64 - thumb_h.min(h as u64);
        let max = self.max_position().max(1) as u64;
        let y = travel * self.position as u64 / max;
        Rect::new(0, y as u32, w, thumb_h as u32)
    }
}

impl Widget for ScrollBar {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn display(&self, ctx: &mut DisplayContext) {
        let name = self.name();
        ctx.draw(&name, self.base.rect().expanse().rect(), '|');
        ctx.draw(&name, self.thumb(), '#');
    }

    fn name(&self) -> WidgetName {
        WidgetName::convert("scrollbar")
    }
}
