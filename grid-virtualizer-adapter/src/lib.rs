//! Adapter utilities for the `grid-virtualizer` crate.
//!
//! The `grid-virtualizer` crate is UI-agnostic and focuses on measurement and window math. This
//! crate provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A [`Controller`] that sequences probing, throttled scroll recomputation, resize handling,
//!   and scroll restoration
//! - A deterministic [`SimulatedGrid`] layout for tests and demos
//!
//! This crate is intentionally framework-agnostic (no DOM or widget bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod sim;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Frame};
pub use sim::SimulatedGrid;
