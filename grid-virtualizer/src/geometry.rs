//! Empirical measurement of the grid's wrapping geometry.
//!
//! The grid layout is owned by the host (typically CSS), so the number of columns is not known up
//! front. It is recovered from the boxes of the first few rendered items:
//!
//! 1. Items 0 and 1 give the item width and the horizontal gap; the container's inner width then
//!    gives the column count.
//! 2. Item `column_count` (the first item of the second row) gives the row height.
//!
//! Host boxes are rounded to whole pixels and the layout may cap or stretch its tracks, so the
//! width-based estimate can be off by a column or more. Step 2 checks it against the items' tops:
//! while item `column_count - 1` already sits on the second row the estimate shrinks, and while
//! item `column_count` still sits on the first row it grows, one column per step. If the
//! collection runs out before the second row is found, probing cannot complete and the grid is
//! rendered in full.
//!
//! Each step needs a few items to be committed first, so probing is driven one host commit at a
//! time via [`GeometryProber::step`].

use crate::{GridGeometry, ItemBox, LayoutProbe, MeasureError};

/// Where the prober is in its measurement sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProbeState {
    #[default]
    MeasuringColumns,
    MeasuringRowHeight {
        column_count: usize,
        container_top: u64,
    },
    Done(GridGeometry),
}

#[derive(Clone, Debug, Default)]
pub struct GeometryProber {
    state: ProbeState,
}

impl GeometryProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn geometry(&self) -> Option<GridGeometry> {
        match self.state {
            ProbeState::Done(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, ProbeState::Done(_))
    }

    /// Drops any measured geometry and starts over from column measurement.
    pub fn reset(&mut self) {
        if self.state != ProbeState::MeasuringColumns {
            vdebug!(state = ?self.state, "GeometryProber::reset");
        }
        self.state = ProbeState::MeasuringColumns;
    }

    /// How many leading items must be rendered for the current state to make progress.
    ///
    /// Returns `None` once the geometry is known.
    pub fn required_items(&self) -> Option<usize> {
        match self.state {
            ProbeState::MeasuringColumns => Some(2),
            ProbeState::MeasuringRowHeight { column_count, .. } => {
                Some(column_count.saturating_add(1))
            }
            ProbeState::Done(_) => None,
        }
    }

    /// Whether a collection of `item_count` items holds enough items to finish probing.
    ///
    /// When this is `false` the grid cannot be virtualized and should be rendered in full.
    pub fn can_complete(&self, item_count: usize) -> bool {
        match self.required_items() {
            Some(required) => item_count >= required,
            None => true,
        }
    }

    /// Runs at most one transition using the currently rendered items.
    ///
    /// Returns `Ok(true)` if the state advanced. Items that are not rendered yet leave the state
    /// untouched; call again after the host has committed the next render.
    pub fn step(
        &mut self,
        layout: &impl LayoutProbe,
        item_count: usize,
    ) -> Result<bool, MeasureError> {
        if !self.can_complete(item_count) {
            return Ok(false);
        }
        let next = match self.state {
            ProbeState::MeasuringColumns => measure_columns(layout)?,
            ProbeState::MeasuringRowHeight {
                column_count,
                container_top,
            } => measure_row_height(layout, column_count, container_top)?,
            ProbeState::Done(_) => None,
        };
        let Some(next) = next else {
            return Ok(false);
        };
        vtrace!(from = ?self.state, to = ?next, "GeometryProber::step");
        self.state = next;
        Ok(true)
    }

    /// Runs transitions until probing is done or blocked on unrendered items.
    ///
    /// Useful for hosts whose layout answers synchronously for every item already rendered.
    pub fn advance(
        &mut self,
        layout: &impl LayoutProbe,
        item_count: usize,
    ) -> Result<bool, MeasureError> {
        let mut progressed = false;
        while self.step(layout, item_count)? {
            progressed = true;
        }
        Ok(progressed)
    }
}

fn rendered_box(layout: &impl LayoutProbe, index: usize) -> Result<Option<ItemBox>, MeasureError> {
    match layout.item_box(index) {
        Ok(item) => Ok(Some(item)),
        Err(MeasureError::NotRendered { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

fn measure_columns(layout: &impl LayoutProbe) -> Result<Option<ProbeState>, MeasureError> {
    let (Some(first), Some(second)) = (rendered_box(layout, 0)?, rendered_box(layout, 1)?) else {
        return Ok(None);
    };
    let inner_width = layout.container_inner_width();
    let column_count = column_count_for(first, second, inner_width);
    vdebug!(column_count, inner_width, "measured columns");
    Ok(Some(ProbeState::MeasuringRowHeight {
        column_count,
        container_top: first.top,
    }))
}

fn measure_row_height(
    layout: &impl LayoutProbe,
    column_count: usize,
    container_top: u64,
) -> Result<Option<ProbeState>, MeasureError> {
    if column_count > 1 {
        let Some(last_of_row) = rendered_box(layout, column_count - 1)? else {
            return Ok(None);
        };
        if last_of_row.top != container_top {
            vdebug!(column_count, "estimated row wraps early, narrowing");
            return Ok(Some(ProbeState::MeasuringRowHeight {
                column_count: column_count - 1,
                container_top,
            }));
        }
    }
    let Some(second_row) = rendered_box(layout, column_count)? else {
        return Ok(None);
    };
    if second_row.top <= container_top {
        vdebug!(column_count, "estimated row wraps late, widening");
        return Ok(Some(ProbeState::MeasuringRowHeight {
            column_count: column_count + 1,
            container_top,
        }));
    }
    let row_height = u32::try_from(second_row.top - container_top).unwrap_or(u32::MAX);
    vdebug!(column_count, row_height, "measured row height");
    Ok(Some(ProbeState::Done(GridGeometry {
        column_count,
        row_height,
        container_top,
    })))
}

/// Number of columns implied by the first two items of a row and the container's inner width.
///
/// The last column carries no trailing gap, so one extra column fits if its item width alone fits
/// in what is left after the full `width + gap` strides.
pub fn column_count_for(first: ItemBox, second: ItemBox, inner_width: u32) -> usize {
    if second.top != first.top {
        return 1;
    }
    let width = first.width as i64;
    let gap = second.left as i64 - width - first.left as i64;
    let stride = width + gap;
    if stride <= 0 {
        return 1;
    }
    let inner = inner_width as i64;
    let mut columns = inner / stride;
    if inner - columns * stride >= width {
        columns += 1;
    }
    columns.max(1) as usize
}
