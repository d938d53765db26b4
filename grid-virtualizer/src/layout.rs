use core::fmt;

use crate::ItemBox;

/// Why an item box could not be measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureError {
    /// The item at `index` has not been committed to the layout surface yet.
    ///
    /// The prober waits for the next commit instead of failing.
    NotRendered { index: usize },
    /// The child at `index` is not an item element (e.g. a stray text node inside the
    /// rendered block). This is a host bug and is reported to the caller.
    NotAnElement { index: usize },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRendered { index } => write!(f, "item {index} is not rendered yet"),
            Self::NotAnElement { index } => {
                write!(f, "child {index} of the rendered block is not an element")
            }
        }
    }
}

impl core::error::Error for MeasureError {}

/// Read-only access to the host's rendered grid.
///
/// Indexes are positions among the currently rendered children of the item container. While the
/// grid is being probed the rendered block always starts at item 0, so these coincide with item
/// indexes.
pub trait LayoutProbe {
    fn item_box(&self, index: usize) -> Result<ItemBox, MeasureError>;

    /// Width of the item container after subtracting its left/right padding.
    fn container_inner_width(&self) -> u32;
}

/// Scroll state of the element that scrolls the grid (usually the document root).
pub trait Viewport {
    fn scroll_offset(&self) -> u64;

    fn viewport_height(&self) -> u32;
}

impl<T: LayoutProbe + ?Sized> LayoutProbe for &T {
    fn item_box(&self, index: usize) -> Result<ItemBox, MeasureError> {
        (**self).item_box(index)
    }

    fn container_inner_width(&self) -> u32 {
        (**self).container_inner_width()
    }
}

impl<T: Viewport + ?Sized> Viewport for &T {
    fn scroll_offset(&self) -> u64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> u32 {
        (**self).viewport_height()
    }
}
