use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;
use core::num::NonZeroU32;

use crate::range;
use crate::{
    Align, FrameState, ItemKey, ScrollDirection, ScrollState, Spacers, ViewportState,
    VisibleRange, WindowItem, WindowOptions,
};

/// A headless fixed-height virtual scrolling window.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the item data itself.
/// - Your shell drives it by providing viewport height and scroll offsets.
/// - Rendering is exposed via zero-allocation iteration (`for_each_window_item`).
///
/// For scroll-event coalescing and resize tracking, see the `vscroll-shell`
/// crate.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    viewport_height: u32,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ListWindow {
    /// Creates a new window from validated options.
    ///
    /// `options.initial_viewport` and `options.initial_offset` are applied
    /// immediately; the shell's first measurement overwrites the viewport.
    pub fn new(options: WindowOptions) -> Self {
        let scroll_offset = options.initial_offset.resolve();
        let viewport_height = options.initial_viewport.unwrap_or(0);
        wdebug!(
            count = options.count,
            overscan = options.overscan,
            "ListWindow::new"
        );
        Self {
            viewport_height,
            scroll_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        self.options = options;
        wtrace!(
            count = self.options.count,
            overscan = self.options.overscan,
            "ListWindow::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, producing a single notification.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame a shell updates the viewport, the scroll offset,
    /// and the scrolling flag together; without batching each setter would
    /// fire `on_change`, which can be expensive if the callback drives
    /// rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn item_height(&self) -> NonZeroU32 {
        self.options.item_height
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Records a raw scroll event timestamp and marks the window as
    /// scrolling.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once no scroll event has arrived for
    /// `is_scrolling_reset_delay_ms`. Call this from a frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag),
    /// and marks the window as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|w| {
            w.set_scroll_offset(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Applies a container resize notification in a single coalesced update.
    pub fn apply_resize_event(&mut self, height: u32) {
        wtrace!(height, "apply_resize_event");
        self.batch_update(|w| {
            w.set_viewport_height(height);
        });
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset_clamped(scroll_offset);
        });
    }

    /// Returns a lightweight snapshot of the current viewport geometry.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.viewport_height,
        }
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of viewport + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport geometry from a previously captured snapshot.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.apply_resize_event(viewport.height);
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `scroll.is_scrolling` is `true`, the internal scrolling timers
    /// are updated as if a scroll event happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_offset_event_clamped(scroll.offset, now_ms);
            return;
        }
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(scroll.offset);
            w.set_is_scrolling(false);
        });
    }

    /// Restores both viewport + scroll state from a previously captured
    /// snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(frame.viewport.height);
            w.restore_scroll_state(frame.scroll, now_ms);
        });
    }

    /// The full scrollable extent: `count * item_height`.
    pub fn total_size(&self) -> u64 {
        (self.options.count as u64).saturating_mul(self.options.item_height.get() as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size()
            .saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn key_for(&self, index: usize) -> ItemKey {
        (self.options.get_item_key)(index)
    }

    /// The strictly visible index range (no overscan) at the current state.
    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.scroll_offset, self.viewport_height)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_height: u32) -> VisibleRange {
        range::visible_range(
            scroll_offset,
            viewport_height,
            self.options.item_height,
            self.options.count,
        )
    }

    /// The overscanned index range worth materializing at the current state.
    pub fn window_range(&self) -> VisibleRange {
        self.window_range_for(self.scroll_offset, self.viewport_height)
    }

    pub fn window_range_for(&self, scroll_offset: u64, viewport_height: u32) -> VisibleRange {
        range::window_range(
            scroll_offset,
            viewport_height,
            self.options.item_height,
            self.options.count,
            self.options.overscan,
        )
    }

    /// Leading/trailing placeholder extents for the current window range.
    pub fn spacers(&self) -> Spacers {
        self.spacers_for(self.window_range())
    }

    pub fn spacers_for(&self, range: VisibleRange) -> Spacers {
        range::spacers(range, self.options.item_height, self.options.count)
    }

    /// The item whose extent contains `offset`, if any.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let h = self.options.item_height.get() as u64;
        Some(((offset / h) as usize).min(count - 1))
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count)
            .then(|| (index as u64).saturating_mul(self.options.item_height.get() as u64))
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        Some(start.saturating_add(self.options.item_height.get() as u64))
    }

    pub fn for_each_window_item(&self, f: impl FnMut(WindowItem)) {
        self.for_each_window_item_for(self.scroll_offset, self.viewport_height, f);
    }

    pub fn for_each_window_item_for(
        &self,
        scroll_offset: u64,
        viewport_height: u32,
        mut f: impl FnMut(WindowItem),
    ) {
        let range = self.window_range_for(scroll_offset, viewport_height);
        let height = self.options.item_height.get();
        let mut start = (range.start_index as u64).saturating_mul(height as u64);

        for index in range.start_index..range.end_index {
            f(WindowItem {
                key: self.key_for(index),
                index,
                start,
                height,
            });
            start = start.saturating_add(height as u64);
        }
    }

    /// Collects window items into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_window_item`];
    /// for maximum performance, reuse a scratch buffer in your shell.
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        self.collect_window_items_for(self.scroll_offset, self.viewport_height, out);
    }

    /// Collects window items into `out` for a given `scroll_offset`/
    /// `viewport_height` (clears `out` first).
    pub fn collect_window_items_for(
        &self,
        scroll_offset: u64,
        viewport_height: u32,
        out: &mut Vec<WindowItem>,
    ) {
        out.clear();
        self.for_each_window_item_for(scroll_offset, viewport_height, |it| out.push(it));
    }

    /// Programmatically scrolls to an index (no animation).
    ///
    /// This sets the internal `scroll_offset` to the computed (clamped)
    /// target and triggers `on_change`. It does **not** mark the window as
    /// "scrolling"; for user-scrolling semantics, pass the returned offset to
    /// `apply_scroll_offset_event_clamped` instead.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let height = self.options.item_height.get() as u64;
        let start = (index as u64).saturating_mul(height);
        let end = start.saturating_add(height);
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(height / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}
