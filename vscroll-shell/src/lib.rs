//! Framework-neutral presentation shell for the `vscroll` engine.
//!
//! The `vscroll` crate is UI-agnostic and focuses on the core math and state.
//! This crate provides the pieces a host UI needs to drive it:
//!
//! - two scroll-event coalescing policies: timestamp throttling (the
//!   historical best-effort variant) and frame coalescing (bounded staleness,
//!   never drops the final position of a burst)
//! - resize tracking with a synchronous initial measurement and symmetric
//!   observer registration
//! - the windowed item layout/rendering contract
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings): the host implements [`ContainerProbe`] over its real scroll
//! container, forwards raw events with millisecond timestamps, and calls
//! [`ListShell::on_frame`] once per rendering frame.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coalesce;
mod layout;
mod probe;
mod shell;
mod throttle;

#[cfg(test)]
mod tests;

pub use coalesce::{FrameCoalescer, PendingRecompute};
pub use layout::{ItemSlot, Placement, WindowLayout, compute_layout, render_window};
pub use probe::{ContainerProbe, ProbeError};
pub use shell::{FrameOutcome, ListShell, ScrollCoalescing, ScrollOutcome, ShellError};
pub use throttle::{FRAME_INTERVAL_MS, TimedThrottle};
