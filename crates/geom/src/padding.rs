/// Insets from each edge of a rectangle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Padding {
    /// Left inset.
    pub left: u32,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl Padding {
    /// Construct padding from left, top, right and bottom insets.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every edge.
    pub fn uniform(n: u32) -> Self {
        Self::new(n, n, n, n)
    }

    /// No insets.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
