//! A headless fixed-height virtual scrolling engine.
//!
//! For scroll-event coalescing, resize tracking, and the item layout
//! contract, see the `vscroll-shell` crate.
//!
//! This crate focuses on the core contract of windowed rendering: given a
//! scroll offset, a viewport height, a fixed per-item height, and an overscan
//! margin, compute the contiguous index range worth materializing plus the
//! leading/trailing spacer sizes that preserve the full scrollable extent.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - a way to materialize item views for the indexes handed out
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod range;
mod state;
mod types;
mod window;


pub use options::{ConfigError, InitialOffset, OnChangeCallback, WindowOptions};
pub use range::{spacers, visible_range, window_range};
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{Align, ItemKey, ScrollDirection, Spacers, VisibleRange, WindowItem};
pub use window::ListWindow;
