use alloc::string::String;
use alloc::vec::Vec;

use crate::{GridGeometry, RenderSlice, VirtualWindow};

/// Maps a virtual window onto the item collection.
///
/// The range starts at the first item of the first rendered row and ends after the last item of
/// the last rendered row (clamped to `item_count`). Spacers are sized so that
/// `top_spacer + rendered rows + bottom_spacer` spans exactly `total_rows` rows.
pub fn slice_for(geometry: GridGeometry, window: VirtualWindow, item_count: usize) -> RenderSlice {
    let columns = geometry.column_count.max(1);
    let total_rows = geometry.total_rows(item_count);
    let top_rows = window.top_hidden_rows.min(total_rows);
    let bottom_rows = window.bottom_hidden_rows.min(total_rows - top_rows);
    let last_rendered_row = total_rows - bottom_rows;

    let start = top_rows.saturating_mul(columns).min(item_count);
    let end = last_rendered_row.saturating_mul(columns).min(item_count);

    RenderSlice {
        range: start..end,
        top_spacer: geometry.rows_height(top_rows),
        bottom_spacer: geometry.rows_height(bottom_rows),
    }
}

/// The three blocks a host renders: a top spacer, the item container holding the rendered
/// subset, and a bottom spacer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rendered<R> {
    /// Height of the block above the item container.
    pub top_spacer: u64,
    /// Styling hook for the item container.
    pub class_name: String,
    /// Output of `render_item` for each item in the slice, in order.
    pub items: Vec<R>,
    /// Index of `items[0]` in the full collection.
    pub first_index: usize,
    pub bottom_spacer: u64,
}

impl<R> Rendered<R> {
    pub(crate) fn build<T>(
        items: &[T],
        slice: &RenderSlice,
        class_name: &str,
        mut render_item: impl FnMut(&T, usize) -> R,
    ) -> Self {
        let range = slice.range.start.min(items.len())..slice.range.end.min(items.len());
        let first_index = range.start;
        let rendered = items[range]
            .iter()
            .enumerate()
            .map(|(offset, item)| render_item(item, first_index + offset))
            .collect();
        Self {
            top_spacer: slice.top_spacer,
            class_name: String::from(class_name),
            items: rendered,
            first_index,
            bottom_spacer: slice.bottom_spacer,
        }
    }
}
