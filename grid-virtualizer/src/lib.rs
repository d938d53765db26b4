//! A headless virtualization engine for wrapping grids whose layout is owned by the host.
//!
//! For host-side workflows (event wiring, scroll restoration) and a layout simulator, see the
//! `grid-virtualizer-adapter` crate.
//!
//! The engine renders only the rows of a large collection that are inside (or near) the
//! viewport and replaces the rest with two spacer blocks, so native scrolling keeps its full
//! extent. Unlike list virtualizers that take item sizes up front, the grid geometry (items per
//! row, row height) is measured from the first rendered items, which makes it work with
//! responsive CSS grids.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - item boxes and the container's inner width ([`LayoutProbe`])
//! - scroll offset and viewport height ([`Viewport`])
//! - a millisecond clock for scroll throttling
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod grid;
mod layout;
mod options;
mod slice;
mod throttle;
mod types;
mod window;


pub use geometry::{GeometryProber, ProbeState, column_count_for};
pub use grid::VirtualGrid;
pub use layout::{LayoutProbe, MeasureError, Viewport};
pub use options::{OnChangeCallback, VirtualGridOptions};
pub use slice::{Rendered, slice_for};
pub use throttle::Throttle;
pub use types::{GridGeometry, ItemBox, RenderSlice, VirtualWindow};
pub use window::{WindowInputs, compute_window};
