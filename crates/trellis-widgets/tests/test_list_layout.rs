//! Layout properties of the scrollable list.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use trellis::{Padding, Rect, Widget, testing::Probe};
    use trellis_widgets::{SCROLLBAR_WIDTH, ScrollableList};

    fn build(heights: &[u32], w: u32, h: u32, padding: Padding) -> ScrollableList {
        let mut l = ScrollableList::new();
        l.set_geometry(Rect::new(0, 0, w, h));
        l.set_padding(padding);
        for (i, height) in heights.iter().enumerate() {
            l.add_item(Probe::new(&format!("p{i}"), *height));
        }
        l.update_layout();
        l
    }

    proptest! {
        #[test]
        fn items_stack_without_gaps(
            heights in prop::collection::vec(0u32..120, 0..24),
            w in 20u32..400,
            h in 0u32..400,
            top in 0u32..30,
            bottom in 0u32..30,
        ) {
            let l = build(&heights, w, h, Padding::new(2, top, 3, bottom));
            let mut expected = 0;
            for (item, height) in l.items().iter().zip(&heights) {
                prop_assert_eq!(item.base().y(), expected);
                prop_assert_eq!(item.base().height(), *height);
                expected += height;
            }
            prop_assert_eq!(l.scrollable_height(), heights.iter().sum::<u32>());
        }

        #[test]
        fn scrollbar_visible_iff_overflow(
            heights in prop::collection::vec(1u32..120, 0..24),
            w in 20u32..400,
            h in 0u32..400,
            top in 0u32..30,
            bottom in 0u32..30,
        ) {
            let l = build(&heights, w, h, Padding::new(0, top, 0, bottom));
            let total: u32 = heights.iter().sum();
            let view = h.saturating_sub(top).saturating_sub(bottom);
            prop_assert_eq!(l.scrollbar().visible(), total > view);

            let full = w;
            let narrow = w.saturating_sub(SCROLLBAR_WIDTH).saturating_sub(1);
            let expected = if total > view { narrow } else { full };
            for item in l.items() {
                prop_assert_eq!(item.base().width(), expected);
            }
            prop_assert_eq!(l.clip_view().base().width(), expected);
            prop_assert_eq!(l.clip_view().base().height(), view);
        }
    }

    #[test]
    fn overflowing_example() {
        let l = build(&[100, 100, 100], 250, 200, Padding::zero());
        assert!(l.scrollbar().visible());
        for item in l.items() {
            assert_eq!(item.base().width(), 250 - SCROLLBAR_WIDTH - 1);
        }
    }

    #[test]
    fn growing_list_gains_scrollbar() {
        let mut l = build(&[50, 50, 50], 100, 200, Padding::zero());
        assert!(!l.scrollbar().visible());
        assert_eq!(l.items()[0].base().width(), 100);

        l.add_item(Probe::new("extra", 60));
        l.update_layout();
        assert!(l.scrollbar().visible());
        assert_eq!(l.items()[0].base().width(), 84);
        assert_eq!(l.items()[3].base().rect(), Rect::new(0, 150, 84, 60));
    }
}
