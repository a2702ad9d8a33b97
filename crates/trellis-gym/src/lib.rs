//! Demo widgets and drivers for trellis.

/// List gym demo: a scrollable list driven by scripted wheel input.
pub mod listgym;
/// Text rendering of display lists.
pub mod textgrid;
