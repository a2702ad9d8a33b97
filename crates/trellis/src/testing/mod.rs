/// Instrumented leaf widgets.
pub mod probe;
/// A plain container for exercising the default passes.
pub mod stack;

pub use probe::{Probe, get_state, reset_state};
pub use stack::Stack;
