//! Widgets built on the trellis widget tree.

#![warn(missing_docs)]

/// Clipping container.
pub mod clip_view;
/// Scroll tuning.
pub mod config;
/// Vertical scrollbar.
pub mod scrollbar;
/// Scrollable vertical list.
pub mod scrollable_list;

pub use clip_view::ClipView;
pub use config::{SCROLLBAR_WIDTH, ScrollConfig, WHEEL_STEP};
pub use scrollable_list::ScrollableList;
pub use scrollbar::ScrollBar;
