//! Pure range arithmetic for fixed-height lists.
//!
//! These functions are total over their inputs: any `scroll_offset`, any
//! `viewport_height`, any `count` produce a range satisfying
//! `0 <= start_index <= end_index <= count`. Item height is structurally
//! positive (`NonZeroU32`), so there is no division-by-zero case to guard.

use core::num::NonZeroU32;

use crate::{Spacers, VisibleRange};

/// Computes the strictly visible index range for a scroll position.
///
/// `start_index` is the item under the viewport's top edge
/// (`floor(offset / h)`); `end_index` is one past the item under the bottom
/// edge (`ceil((offset + viewport) / h)`), both clamped to `[0, count]`.
///
/// An empty list or a zero-height viewport yields the empty range.
pub fn visible_range(
    scroll_offset: u64,
    viewport_height: u32,
    item_height: NonZeroU32,
    count: usize,
) -> VisibleRange {
    if count == 0 || viewport_height == 0 {
        return VisibleRange::EMPTY;
    }

    // Offsets past the end of the list collapse to the empty range at `count`.
    let h = item_height.get() as u64;
    let start = (scroll_offset / h).min(count as u64) as usize;
    let end = scroll_offset
        .saturating_add(viewport_height as u64)
        .div_ceil(h)
        .min(count as u64) as usize;

    VisibleRange {
        start_index: start,
        end_index: end,
    }
}

/// Widens the visible range by `overscan` items on each side, clamped to
/// `[0, count]`.
///
/// An empty visible range stays empty: overscan is margin around visible
/// content, not a way to conjure items when nothing is visible.
pub fn window_range(
    scroll_offset: u64,
    viewport_height: u32,
    item_height: NonZeroU32,
    count: usize,
    overscan: usize,
) -> VisibleRange {
    let visible = visible_range(scroll_offset, viewport_height, item_height, count);
    if visible.is_empty() {
        return visible;
    }

    VisibleRange {
        start_index: visible.start_index.saturating_sub(overscan),
        end_index: visible.end_index.saturating_add(overscan).min(count),
    }
}

/// Computes the leading/trailing placeholder extents for a windowed range.
///
/// Callers must pass a range produced by [`visible_range`]/[`window_range`]
/// for the same `count`; ranges are clamped defensively so a stale `count`
/// still cannot underflow.
pub fn spacers(range: VisibleRange, item_height: NonZeroU32, count: usize) -> Spacers {
    let h = item_height.get() as u64;
    let start = range.start_index.min(count) as u64;
    let end = range.end_index.min(count) as u64;

    Spacers {
        leading: start.saturating_mul(h),
        trailing: (count as u64 - end).saturating_mul(h),
    }
}
