use alloc::vec::Vec;

use vscroll::{ItemKey, ListWindow, Spacers};

/// How the host positions windowed items inside the scrollable content box.
///
/// Both strategies produce the same total scrollable height and the same
/// absolute position for every windowed item; they differ only in which
/// numbers the host consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Absolute-position each item at its `top` inside a content box of the
    /// full `total_size`.
    #[default]
    Absolute,
    /// Lay items out in flow order inside a content box padded by the
    /// leading/trailing spacers.
    Padded,
}

/// One materialized slot of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    /// Stable identity key for the host's view reconciliation.
    pub key: ItemKey,
    /// Logical index into the host's item list (not the slot position).
    pub index: usize,
    /// Absolute offset of the slot in the full content box
    /// (`index * item_height`).
    pub top: u64,
    pub height: u32,
}

/// A complete layout answer for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowLayout {
    pub placement: Placement,
    /// Full scrollable extent (`count * item_height`).
    pub total_size: u64,
    pub spacers: Spacers,
    pub slots: Vec<ItemSlot>,
}

impl WindowLayout {
    /// The offset of slot `i` as the host applies it under this placement.
    ///
    /// For `Absolute` this is the slot's stored `top`; for `Padded` it is
    /// reconstructed as `leading + i * item_height`. The two agree for every
    /// slot, which is what makes the strategies visually identical.
    pub fn slot_offset(&self, i: usize) -> Option<u64> {
        let slot = self.slots.get(i)?;
        Some(match self.placement {
            Placement::Absolute => slot.top,
            Placement::Padded => self
                .spacers
                .leading
                .saturating_add((i as u64).saturating_mul(slot.height as u64)),
        })
    }
}

/// Computes the layout for the window's current state.
pub fn compute_layout(window: &ListWindow, placement: Placement) -> WindowLayout {
    let mut slots = Vec::with_capacity(window.window_range().len());
    window.for_each_window_item(|it| {
        slots.push(ItemSlot {
            key: it.key,
            index: it.index,
            top: it.start,
            height: it.height,
        });
    });
    WindowLayout {
        placement,
        total_size: window.total_size(),
        spacers: window.spacers(),
        slots,
    }
}

/// Maps every windowed `(item, logical index)` pair through `render`.
///
/// Indexes beyond `items.len()` are skipped silently: a stale window over a
/// shrunken list yields a smaller (possibly empty) result rather than a
/// panic.
pub fn render_window<T, V>(
    window: &ListWindow,
    items: &[T],
    mut render: impl FnMut(&T, usize) -> V,
) -> Vec<V> {
    let range = window.window_range();
    let mut out = Vec::with_capacity(range.len());
    window.for_each_window_item(|it| {
        if let Some(item) = items.get(it.index) {
            out.push(render(item, it.index));
        }
    });
    out
}
