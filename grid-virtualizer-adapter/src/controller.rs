use grid_virtualizer::{
    LayoutProbe, MeasureError, RenderSlice, Viewport, VirtualGrid, VirtualGridOptions,
};

/// What the host should do after handing an event to the [`Controller`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The slice to render.
    pub slice: RenderSlice,
    /// `true` when `slice` differs from the one returned by the previous frame.
    pub needs_render: bool,
    /// Scroll offset to re-apply after committing the render.
    ///
    /// Resizing the spacers can make the host nudge its scroll position (scroll anchoring); the
    /// offset the window was computed from is handed back so the host can pin it.
    pub restore_scroll_offset: Option<u64>,
}

/// A framework-neutral controller that wraps a [`VirtualGrid`] and runs the usual host workflow:
///
/// - `on_commit` after every render, which probes the geometry and computes the first window as
///   soon as probing finishes
/// - `on_scroll` on scroll events, `tick(now_ms)` on every frame/timer tick
/// - `on_resize` when the viewport is resized
/// - `on_items_changed` when the collection changes
///
/// The controller holds no UI objects; layout and scroll state are read through the
/// [`LayoutProbe`] and [`Viewport`] the host passes in.
#[derive(Clone, Debug)]
pub struct Controller {
    grid: VirtualGrid,
    last_slice: RenderSlice,
}

impl Controller {
    pub fn new(options: VirtualGridOptions) -> Self {
        Self::from_grid(VirtualGrid::new(options))
    }

    pub fn from_grid(grid: VirtualGrid) -> Self {
        Self {
            grid,
            last_slice: RenderSlice::default(),
        }
    }

    pub fn grid(&self) -> &VirtualGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut VirtualGrid {
        &mut self.grid
    }

    pub fn into_grid(self) -> VirtualGrid {
        self.grid
    }

    fn frame(&mut self, restore_scroll_offset: Option<u64>) -> Frame {
        let slice = self.grid.slice();
        let needs_render = slice != self.last_slice;
        self.last_slice = slice.clone();
        Frame {
            slice,
            needs_render,
            restore_scroll_offset,
        }
    }

    /// Initial render (or the collection was replaced).
    pub fn on_items_changed(&mut self, item_count: usize, viewport: &impl Viewport) -> Frame {
        self.grid.set_item_count(item_count);
        let restore = self.grid.recompute(viewport);
        self.frame(restore)
    }

    /// The host committed the last frame's slice to its layout surface.
    ///
    /// Probes one step. When that completes the geometry, the first window is computed right
    /// away so the host never renders the full list.
    pub fn on_commit(
        &mut self,
        layout: &impl LayoutProbe,
        viewport: &impl Viewport,
    ) -> Result<Frame, MeasureError> {
        if self.grid.geometry().is_some() {
            return Ok(self.frame(None));
        }
        self.grid.probe(layout)?;
        let restore = if self.grid.geometry().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "grid_virtualizer_adapter",
                geometry = ?self.grid.geometry(),
                "geometry measured"
            );
            self.grid.recompute(viewport)
        } else {
            None
        };
        Ok(self.frame(restore))
    }

    /// Call this when the host reports a scroll event.
    ///
    /// Returns `true` if it scheduled a recomputation; the host should keep calling `tick` until
    /// [`Controller::next_deadline_ms`] has passed.
    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        self.grid.on_scroll(now_ms)
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.grid.next_deadline_ms()
    }

    /// Call this when the viewport is resized, with the item container's new inner width.
    ///
    /// A new width restarts probing. Otherwise the geometry still holds and the window is
    /// recomputed against the viewport's current height.
    pub fn on_resize(&mut self, inner_width: u32, viewport: &impl Viewport) -> Frame {
        if self.grid.on_resize(inner_width) {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "grid_virtualizer_adapter", inner_width, "re-probing");
            return self.frame(None);
        }
        let restore = self.grid.recompute(viewport);
        self.frame(restore)
    }

    /// Advances the controller. Fires a pending scroll recomputation once its delay has elapsed.
    pub fn tick(&mut self, now_ms: u64, viewport: &impl Viewport) -> Frame {
        let restore = self.grid.tick(now_ms, viewport);
        self.frame(restore)
    }
}
