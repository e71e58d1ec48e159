use alloc::sync::Arc;
use core::num::NonZeroU32;

use thiserror::Error;

use crate::ItemKey;
use crate::window::ListWindow;

/// A callback fired when a window state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `ListWindow::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Rejected window configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A zero item height would make every derived layout quantity
    /// meaningless, so it is refused at construction instead of clamped.
    #[error("item_height must be positive")]
    ZeroItemHeight,
}

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: closures are stored in `Arc`s so adapters can tweak a few
/// fields and call `ListWindow::set_options` without reallocating.
#[derive(Clone)]
pub struct WindowOptions {
    pub count: usize,
    /// Fixed height of every item in the scroll axis. Structurally positive;
    /// use [`WindowOptions::new`] to validate host-provided values.
    pub item_height: NonZeroU32,
    /// Extra items materialized on each side of the visible range.
    pub overscan: usize,
    /// Maps a logical index to a stable identity key for rendering.
    ///
    /// The default is the index itself, which is stable as long as the host
    /// list is not reordered.
    pub get_item_key: Arc<dyn Fn(usize) -> ItemKey + Send + Sync>,
    /// Viewport height applied at construction, until the shell's first real
    /// measurement arrives.
    pub initial_viewport: Option<u32>,
    /// Initial scroll offset (e.g. a saved position).
    pub initial_offset: InitialOffset,
    /// Optional callback fired when the window's state changes.
    ///
    /// The second argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,
    /// Debounced fallback duration for resetting `is_scrolling` after the
    /// last scroll event.
    pub is_scrolling_reset_delay_ms: u64,
}

impl WindowOptions {
    /// Creates options for a list of `count` items of fixed `item_height`
    /// pixels.
    ///
    /// Fails with [`ConfigError::ZeroItemHeight`] when `item_height == 0`.
    pub fn new(count: usize, item_height: u32) -> Result<Self, ConfigError> {
        let item_height = NonZeroU32::new(item_height).ok_or(ConfigError::ZeroItemHeight)?;
        Ok(Self {
            count,
            item_height,
            overscan: 1,
            get_item_key: Arc::new(|i| i as ItemKey),
            initial_viewport: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
            is_scrolling_reset_delay_ms: 150,
        })
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> ItemKey + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    /// Sets the viewport height to assume until the first measurement.
    pub fn with_initial_viewport(mut self, initial_viewport: Option<u32>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
