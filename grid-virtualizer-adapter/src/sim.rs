use grid_virtualizer::{ItemBox, LayoutProbe, MeasureError, RenderSlice, Viewport};

/// A deterministic stand-in for a browser page hosting a wrapping grid.
///
/// Items have a fixed width and height and wrap like a CSS flex/grid container with a fixed gap:
/// as many columns as fit in the container's inner width, optionally capped by `max_columns` (an
/// explicit `repeat(n, ...)` track list that leaves the rest of the row empty). The page scrolls as a whole, the grid
/// sits `container_top` pixels below the page top, and the rendered block is preceded by a top
/// spacer whose height comes from the last committed [`RenderSlice`].
///
/// Useful for tests, demos, and for hosts that want to dry-run a layout before attaching to a real
/// rendering surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedGrid {
    pub inner_width: u32,
    pub padding_left: u32,
    pub item_width: u32,
    pub item_height: u32,
    pub gap: u32,
    pub container_top: u64,
    pub viewport_height: u32,
    pub max_columns: Option<usize>,
    scroll_offset: u64,
    committed: RenderSlice,
}

impl SimulatedGrid {
    pub fn new(inner_width: u32, item_width: u32, item_height: u32, gap: u32) -> Self {
        Self {
            inner_width,
            padding_left: 0,
            item_width,
            item_height,
            gap,
            container_top: 0,
            viewport_height: 600,
            max_columns: None,
            scroll_offset: 0,
            committed: RenderSlice::default(),
        }
    }

    pub fn with_container_top(mut self, container_top: u64) -> Self {
        self.container_top = container_top;
        self
    }

    pub fn with_padding_left(mut self, padding_left: u32) -> Self {
        self.padding_left = padding_left;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = Some(max_columns.max(1));
        self
    }

    /// Columns the simulated layout wraps at.
    pub fn columns(&self) -> usize {
        let stride = self.item_width.saturating_add(self.gap).max(1);
        let fit = (self.inner_width.saturating_add(self.gap) / stride) as usize;
        match self.max_columns {
            Some(max) => fit.min(max).max(1),
            None => fit.max(1),
        }
    }

    /// Distance between the tops of two consecutive rows.
    pub fn row_pitch(&self) -> u32 {
        self.item_height.saturating_add(self.gap)
    }

    /// Applies a render: the rendered block now holds the slice's items between its spacers.
    pub fn commit(&mut self, slice: &RenderSlice) {
        self.committed = slice.clone();
    }

    pub fn committed(&self) -> &RenderSlice {
        &self.committed
    }

    pub fn scroll_to(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn resize(&mut self, inner_width: u32) {
        self.inner_width = inner_width;
    }

    /// Height of the grid area: both spacers plus the rendered rows.
    pub fn content_height(&self) -> u64 {
        let rows = self.committed.len().div_ceil(self.columns()) as u64;
        let rendered = match rows {
            0 => 0,
            rows => rows * self.row_pitch() as u64 - self.gap as u64,
        };
        self.committed.top_spacer + rendered + self.committed.bottom_spacer
    }
}

impl LayoutProbe for SimulatedGrid {
    fn item_box(&self, index: usize) -> Result<ItemBox, MeasureError> {
        if index >= self.committed.len() {
            return Err(MeasureError::NotRendered { index });
        }
        let columns = self.columns();
        let row = (index / columns) as u64;
        let column = (index % columns) as u64;
        Ok(ItemBox {
            top: self.container_top + self.committed.top_spacer + row * self.row_pitch() as u64,
            left: self.padding_left as u64
                + column * (self.item_width as u64 + self.gap as u64),
            width: self.item_width,
        })
    }

    fn container_inner_width(&self) -> u32 {
        self.inner_width
    }
}

impl Viewport for SimulatedGrid {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height
    }
}
