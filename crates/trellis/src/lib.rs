//! Trellis: the widget tree contracts for a frame-driven game UI.
//!
//! Widgets own their children, are positioned relative to their parent, and
//! take part in three recursive passes each frame:
//! - [`Widget::run_recursive`] - per-frame update
//! - [`Widget::process_click_recursive`] - mouse dispatch
//! - [`Widget::display_recursive`] - drawing into a [`DisplayContext`]

#![warn(missing_docs)]

/// Debug dump utilities.
pub mod dump;
/// Core error types.
pub mod error;
/// Input event types.
pub mod event;
/// Logging setup.
pub mod logging;
/// Widget names.
pub mod name;
/// Display list rendering.
pub mod render;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// The widget trait and shared widget state.
pub mod widget;

pub use geom;

pub use error::{Error, Result};
pub use event::{Button, ClickContext};
pub use name::WidgetName;
pub use render::{DisplayContext, DrawCmd};
pub use widget::{Widget, WidgetBase, display_children, process_click_children};

pub use geom::{Expanse, Padding, Point, PointI32, Rect, RectI32};
