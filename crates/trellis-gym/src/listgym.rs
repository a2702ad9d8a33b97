use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;
use trellis::{
    Button, ClickContext, DisplayContext, DrawCmd, Expanse, Padding, Rect, Widget, WidgetBase,
    WidgetName,
};
use trellis_widgets::{ScrollConfig, ScrollableList};

/// Glyphs cycled through for row fills.
const GLYPHS: &[char] = &['a', 'b', 'c', 'd', 'e', 'f'];

/// A fixed-height list row.
pub struct Row {
    /// Shared widget state.
    base: WidgetBase,
    /// Row label.
    label: WidgetName,
    /// Fill glyph.
    fill: char,
}

impl Row {
    /// A row of the given height; the list assigns its width.
    pub fn new(index: usize, height: u32) -> Self {
        Self {
            base: WidgetBase::sized(0, height),
            label: WidgetName::convert(&format!("row {index}")),
            fill: GLYPHS[index % GLYPHS.len()],
        }
    }
}

impl Widget for Row {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn clicked(&mut self, ctx: &ClickContext, button: Button) {
        info!(row = %self.label, ?button, x = ctx.mouse.x, y = ctx.mouse.y, "row clicked");
    }

    fn display(&self, ctx: &mut DisplayContext) {
        ctx.draw(&self.label, self.base.rect().expanse().rect(), self.fill);
    }

    fn name(&self) -> WidgetName {
        self.label.clone()
    }
}

/// How row heights are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHeights {
    /// Every row has the same height.
    Fixed(u32),
    /// Heights drawn uniformly from `min..=max` with a seeded generator.
    Random {
        /// Smallest row height.
        min: u32,
        /// Largest row height.
        max: u32,
        /// Generator seed.
        seed: u64,
    },
}

/// Settings for a list gym run.
#[derive(Debug, Clone)]
pub struct ListGym {
    /// List size on screen.
    pub size: Expanse,
    /// Number of rows.
    pub rows: usize,
    /// Row height policy.
    pub heights: RowHeights,
    /// List padding.
    pub padding: Padding,
    /// Snap the render offset to row tops.
    pub snap: bool,
    /// Keep the view pinned to the bottom.
    pub stick_to_bottom: bool,
    /// Scroll tuning.
    pub config: ScrollConfig,
}

impl Default for ListGym {
    fn default() -> Self {
        Self {
            size: Expanse::new(200, 120),
            rows: 12,
            heights: RowHeights::Fixed(20),
            padding: Padding::zero(),
            snap: false,
            stick_to_bottom: false,
            config: ScrollConfig::default(),
        }
    }
}

impl ListGym {
    /// The row heights this gym will use.
    pub fn row_heights(&self) -> Vec<u32> {
        match self.heights {
            RowHeights::Fixed(h) => vec![h; self.rows],
            RowHeights::Random { min, max, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..self.rows)
                    .map(|_| rng.random_range(min..=max.max(min)))
                    .collect()
            }
        }
    }

    /// Build the list and run its first frame.
    pub fn build(&self) -> ScrollableList {
        let mut list = ScrollableList::with_config(self.config);
        list.set_geometry(self.size.rect());
        list.set_padding(self.padding);
        list.set_snap_offset(self.snap);
        list.set_stick_to_bottom(self.stick_to_bottom);
        for (i, h) in self.row_heights().into_iter().enumerate() {
            list.add_item(Row::new(i, h));
        }
        list.run_recursive();
        list
    }
}

/// Feed one wheel movement through a click dispatch and advance a frame.
pub fn scroll(list: &mut ScrollableList, dy: i32) {
    let r: Rect = list.base().rect();
    let centre = (
        (r.tl.x + r.w / 2) as i32,
        (r.tl.y + r.h / 2) as i32,
    );
    list.process_click_recursive(&ClickContext::wheel(centre, dy), Button::Middle, false);
    list.run_recursive();
    info!(
        dy,
        position = list.scrollbar().position(),
        offset = list.clip_view().top_offset(),
        "scrolled"
    );
}

/// Display the list into a fresh display list covering `screen`.
pub fn display(list: &mut ScrollableList, screen: Expanse) -> Vec<DrawCmd> {
    let mut ctx = DisplayContext::new(screen);
    list.display_recursive(&mut ctx);
    ctx.into_commands()
}
