#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous index range into the host's item list.
///
/// `end_index` is exclusive: the windowed slice is `start_index..end_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Placeholder extents before and after the windowed items.
///
/// `leading + len * item_height + trailing` always equals the full scrollable
/// extent `count * item_height`, so the host's scrollbar reflects the whole
/// list without materializing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacers {
    pub leading: u64,
    pub trailing: u64,
}

/// Identity key for a windowed item, stable across recomputations.
pub type ItemKey = u64;

/// A render-ready description of one windowed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub key: ItemKey,
    /// Logical index into the host's item list (not the slot within the window).
    pub index: usize,
    /// Start offset in the scroll axis (`index * item_height`).
    pub start: u64,
    /// Fixed item height.
    pub height: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.height as u64)
    }
}
