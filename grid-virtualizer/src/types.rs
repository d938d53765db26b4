use core::ops::Range;

/// The measured box of one rendered item, in host layout pixels.
///
/// `top` and `left` are measured in the same coordinate space as the scroll offset reported by
/// [`crate::Viewport::scroll_offset`] (for window scrolling: document coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBox {
    pub top: u64,
    pub left: u64,
    pub width: u32,
}

/// Wrapping geometry of the grid, derived from measured item boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    /// Items per row (always >= 1).
    pub column_count: usize,
    /// Distance between the tops of two consecutive rows (always > 0).
    pub row_height: u32,
    /// Top of the first rendered item.
    pub container_top: u64,
}

impl GridGeometry {
    pub fn total_rows(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.column_count.max(1))
    }

    /// Pixel height of `rows` full rows.
    pub fn rows_height(&self, rows: usize) -> u64 {
        (rows as u64).saturating_mul(self.row_height as u64)
    }
}

/// Rows replaced by spacer blocks instead of being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualWindow {
    pub top_hidden_rows: usize,
    pub bottom_hidden_rows: usize,
}

impl VirtualWindow {
    /// Number of rows left to render out of `total_rows`.
    pub fn rendered_rows(&self, total_rows: usize) -> usize {
        total_rows
            .saturating_sub(self.top_hidden_rows)
            .saturating_sub(self.bottom_hidden_rows)
    }
}

/// What the host should render: an index range into the item collection plus the heights of the
/// two spacer blocks surrounding it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSlice {
    pub range: Range<usize>,
    pub top_spacer: u64,
    pub bottom_spacer: u64,
}

impl RenderSlice {
    /// A slice covering `0..len` with no spacers.
    pub fn unvirtualized(len: usize) -> Self {
        Self {
            range: 0..len,
            top_spacer: 0,
            bottom_spacer: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
