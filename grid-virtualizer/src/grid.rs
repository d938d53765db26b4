use crate::geometry::{GeometryProber, ProbeState};
use crate::slice::{Rendered, slice_for};
use crate::window::{WindowInputs, compute_window};
use crate::{
    GridGeometry, LayoutProbe, MeasureError, RenderSlice, Throttle, Viewport, VirtualGridOptions,
    VirtualWindow,
};

/// A headless, measurement-driven virtualization engine for wrapping grids.
///
/// The engine holds no UI objects. The host drives it:
/// - after every commit, [`VirtualGrid::probe`] with a [`LayoutProbe`] until the geometry is known
/// - on scroll, [`VirtualGrid::on_scroll`]; on every frame/timer tick, [`VirtualGrid::tick`]
/// - on resize, [`VirtualGrid::on_resize`] with the container's new inner width
/// - when the collection changes, [`VirtualGrid::set_item_count`]
///
/// and renders whatever [`VirtualGrid::slice`] / [`VirtualGrid::render`] returns.
///
/// Each instance owns its own scroll throttle, so several grids can share one screen.
#[derive(Clone, Debug)]
pub struct VirtualGrid {
    options: VirtualGridOptions,
    prober: GeometryProber,
    window: VirtualWindow,
    throttle: Throttle,
    item_count: usize,
    /// Inner width the current geometry was measured against.
    measured_width: Option<u32>,
    /// Scroll offset and viewport height read by the last recomputation.
    last_viewport: Option<(u64, u32)>,
}

impl VirtualGrid {
    pub fn new(options: VirtualGridOptions) -> Self {
        vdebug!(
            tolerance = options.tolerance,
            throttle_delay_ms = options.throttle_delay_ms,
            "VirtualGrid::new"
        );
        Self {
            throttle: Throttle::new(options.throttle_delay_ms),
            options,
            prober: GeometryProber::new(),
            window: VirtualWindow::default(),
            item_count: 0,
            measured_width: None,
            last_viewport: None,
        }
    }

    pub fn options(&self) -> &VirtualGridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: VirtualGridOptions) {
        self.throttle.set_delay_ms(options.throttle_delay_ms);
        self.options = options;
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualGridOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Changes the tolerance. Takes effect on the next recomputation.
    pub fn set_tolerance(&mut self, tolerance: usize) {
        self.options.tolerance = tolerance;
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Tells the engine the item collection changed.
    ///
    /// Measured geometry survives and the window is recomputed for the new row count from the
    /// last scroll offset and viewport height the engine read. A probe that has not finished yet
    /// starts over, since the items it was reading may be gone.
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        vtrace!(from = self.item_count, to = item_count, "VirtualGrid::set_item_count");
        self.item_count = item_count;
        if self.prober.is_done() {
            self.refresh_window();
        } else {
            self.prober.reset();
            self.measured_width = None;
        }
        self.notify();
    }

    pub fn probe_state(&self) -> ProbeState {
        self.prober.state()
    }

    pub fn geometry(&self) -> Option<GridGeometry> {
        self.prober.geometry()
    }

    pub fn window(&self) -> VirtualWindow {
        self.window
    }

    /// Whether the collection is too small for probing to ever finish. The full list is rendered.
    pub fn is_degraded(&self) -> bool {
        !self.prober.can_complete(self.item_count)
    }

    pub fn is_throttled(&self) -> bool {
        self.throttle.is_armed()
    }

    /// Instant at which a pending scroll recomputation fires, if one is pending.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.throttle.deadline_ms()
    }

    /// Feeds the prober one step with the host's freshly committed layout.
    ///
    /// Returns `Ok(true)` when the probe state advanced, in which case the rendered slice has
    /// changed and the host should re-render and call `probe` again after the next commit.
    pub fn probe(&mut self, layout: &impl LayoutProbe) -> Result<bool, MeasureError> {
        let advanced = self.prober.step(layout, self.item_count)?;
        if advanced {
            self.after_probe_progress(layout);
        }
        Ok(advanced)
    }

    /// Like [`VirtualGrid::probe`], but keeps stepping while the layout can answer.
    pub fn probe_all(&mut self, layout: &impl LayoutProbe) -> Result<bool, MeasureError> {
        let advanced = self.prober.advance(layout, self.item_count)?;
        if advanced {
            self.after_probe_progress(layout);
        }
        Ok(advanced)
    }

    fn after_probe_progress(&mut self, layout: &impl LayoutProbe) {
        if self.measured_width.is_none() {
            self.measured_width = Some(layout.container_inner_width());
        }
        if self.prober.is_done() {
            self.window = VirtualWindow::default();
            self.refresh_window();
        }
        self.notify();
    }

    /// Reports the item container's inner width after a resize.
    ///
    /// A width different from the one the geometry was measured against invalidates the geometry
    /// and restarts probing. Returns `true` in that case.
    pub fn on_resize(&mut self, inner_width: u32) -> bool {
        match self.measured_width {
            Some(width) if width != inner_width => {
                vdebug!(from = width, to = inner_width, "width changed, re-probing");
                self.prober.reset();
                self.window = VirtualWindow::default();
                self.measured_width = None;
                self.notify();
                true
            }
            _ => false,
        }
    }

    /// Records a scroll event. Returns `true` if it armed a recomputation.
    ///
    /// Events arriving while a recomputation is pending are absorbed into it.
    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        let armed = self.throttle.trigger(now_ms);
        if armed {
            vtrace!(now_ms, "scroll recomputation armed");
        }
        armed
    }

    /// Fires a pending scroll recomputation once its throttle delay has elapsed.
    ///
    /// The scroll offset is read from `viewport` now, not when the scroll events arrived. Returns
    /// the offset that was read so the host can restore it after resizing the spacers.
    pub fn tick(&mut self, now_ms: u64, viewport: &impl Viewport) -> Option<u64> {
        if !self.throttle.poll(now_ms) {
            return None;
        }
        self.recompute(viewport)
    }

    /// Recomputes the window immediately, bypassing the throttle.
    ///
    /// Returns `None` while the geometry is unknown.
    pub fn recompute(&mut self, viewport: &impl Viewport) -> Option<u64> {
        self.prober.geometry()?;
        let scroll_offset = viewport.scroll_offset();
        self.last_viewport = Some((scroll_offset, viewport.viewport_height()));
        if self.refresh_window() {
            self.notify();
        }
        Some(scroll_offset)
    }

    /// Recomputes the window from the last viewport read. Returns `true` if it changed.
    fn refresh_window(&mut self) -> bool {
        let (Some(geometry), Some((scroll_offset, viewport_height))) =
            (self.prober.geometry(), self.last_viewport)
        else {
            return false;
        };
        let window = compute_window(WindowInputs::new(
            geometry,
            self.item_count,
            scroll_offset,
            viewport_height,
            self.options.tolerance,
        ));
        if window == self.window {
            return false;
        }
        vtrace!(
            scroll_offset,
            top = window.top_hidden_rows,
            bottom = window.bottom_hidden_rows,
            "window changed"
        );
        self.window = window;
        true
    }

    /// The index range to render and the spacer heights around it.
    ///
    /// - Geometry known: the computed window.
    /// - Probing: only the leading items the prober needs next.
    /// - Degraded (too few items to probe): the whole collection.
    pub fn slice(&self) -> RenderSlice {
        self.slice_for_count(self.item_count)
    }

    fn slice_for_count(&self, item_count: usize) -> RenderSlice {
        if let Some(geometry) = self.prober.geometry() {
            return slice_for(geometry, self.window, item_count);
        }
        match self.prober.required_items() {
            Some(required) if item_count >= required => RenderSlice::unvirtualized(required),
            _ => RenderSlice::unvirtualized(item_count),
        }
    }

    /// Renders the current slice of `items` with `render_item(item, index)`, where `index` is the
    /// item's position in `items`.
    pub fn render<T, R>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> R,
    ) -> Rendered<R> {
        if items.len() != self.item_count {
            vwarn!(
                items = items.len(),
                item_count = self.item_count,
                "render called with a collection of a different length; call set_item_count first"
            );
        }
        let slice = self.slice_for_count(items.len());
        Rendered::build(items, &slice, &self.options.class_name, render_item)
    }
}
