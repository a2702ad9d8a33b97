/*! Leaf widgets that record the events they receive. */
use std::cell::RefCell;

use crate::{
    ClickContext, DisplayContext, WidgetName,
    event::Button,
    widget::{Widget, WidgetBase},
};

/// Thread-local state tracked by probes.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct State {
    /// Recorded event path entries.
    pub path: Vec<String>,
}

impl State {
    /// Clear recorded events.
    pub fn reset(&mut self) {
        self.path = vec![];
    }

    /// Record an event for a probe.
    pub fn add_event(&mut self, n: &WidgetName, evt: &str, ctx: &ClickContext) {
        self.path
            .push(format!("{n}@{evt}({},{})", ctx.mouse.x, ctx.mouse.y))
    }
}

thread_local! {
    pub(crate) static TSTATE: RefCell<State> = RefCell::new(State::default());
}

/// Clear the thread's probe state.
pub fn reset_state() {
    TSTATE.with(|s| {
        s.borrow_mut().reset();
    });
}

/// Get the thread's probe state.
pub fn get_state() -> State {
    TSTATE.with(|s| s.borrow().clone())
}

/// A fixed-height leaf widget. Presses and releases are recorded with the
/// mouse position in the probe's own space.
pub struct Probe {
    /// Shared widget state.
    base: WidgetBase,
    /// Name reported in dumps and events.
    label: WidgetName,
    /// Glyph used when drawing.
    fill: char,
}

impl Probe {
    /// A probe of the given height. Its width is assigned by the parent.
    pub fn new(label: &str, height: u32) -> Self {
        Self {
            base: WidgetBase::sized(0, height),
            label: WidgetName::convert(label),
            fill: label.chars().next().unwrap_or('#'),
        }
    }

    /// Override the glyph used when drawing.
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }
}

impl Widget for Probe {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn clicked(&mut self, ctx: &ClickContext, _button: Button) {
        TSTATE.with(|s| s.borrow_mut().add_event(&self.label, "press", ctx));
    }

    fn released(&mut self, ctx: &ClickContext, _button: Button) {
        TSTATE.with(|s| s.borrow_mut().add_event(&self.label, "release", ctx));
    }

    fn display(&self, ctx: &mut DisplayContext) {
        ctx.draw(&self.label, self.base.rect().expanse().rect(), self.fill);
    }

    fn name(&self) -> WidgetName {
        self.label.clone()
    }
}
