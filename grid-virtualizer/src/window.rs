use crate::{GridGeometry, VirtualWindow};

/// Everything [`compute_window`] reads. All values are plain numbers, so the computation can be
/// re-run on every scroll tick without touching the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowInputs {
    pub scroll_offset: u64,
    pub container_top: u64,
    pub row_height: u32,
    pub column_count: usize,
    pub item_count: usize,
    pub viewport_height: u32,
    /// Extra rows kept rendered above and below the viewport.
    pub tolerance: usize,
}

impl WindowInputs {
    pub fn new(
        geometry: GridGeometry,
        item_count: usize,
        scroll_offset: u64,
        viewport_height: u32,
        tolerance: usize,
    ) -> Self {
        Self {
            scroll_offset,
            container_top: geometry.container_top,
            row_height: geometry.row_height,
            column_count: geometry.column_count,
            item_count,
            viewport_height,
            tolerance,
        }
    }
}

/// Translates a scroll offset into the number of whole rows hidden above and below the viewport.
///
/// `top_hidden_rows + bottom_hidden_rows` never exceeds the total row count. A zero row height or
/// column count (no geometry) yields an empty window.
pub fn compute_window(inputs: WindowInputs) -> VirtualWindow {
    if inputs.row_height == 0 || inputs.column_count == 0 {
        return VirtualWindow::default();
    }
    let row_height = inputs.row_height as u64;

    let offset_inside = inputs.scroll_offset.saturating_sub(inputs.container_top);
    let rows_above = usize::try_from(offset_inside / row_height).unwrap_or(usize::MAX);
    let total_rows = inputs.item_count.div_ceil(inputs.column_count);
    // A list that shrank under a deep scroll offset must not hide more rows than it has.
    let top_hidden_rows = rows_above.saturating_sub(inputs.tolerance).min(total_rows);

    let max_visible_rows =
        usize::try_from((inputs.viewport_height as u64).div_ceil(row_height)).unwrap_or(usize::MAX);
    let rendered_row_budget =
        max_visible_rows.saturating_add(inputs.tolerance.saturating_mul(2));
    let bottom_hidden_rows = total_rows
        .saturating_sub(rendered_row_budget)
        .saturating_sub(top_hidden_rows);

    VirtualWindow {
        top_hidden_rows,
        bottom_hidden_rows,
    }
}
