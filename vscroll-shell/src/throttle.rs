/// One frame at 60 Hz, the default throttle window.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Timestamp-based scroll throttling (the historical policy).
///
/// [`TimedThrottle::should_fire`] advances the window *before* the caller
/// reads the scroll position, preserving the historical behavior: when a
/// burst ends inside the throttle window, the final intermediate position is
/// never read, so the displayed range can lag the true offset until the next
/// event arrives. This is a documented best-effort policy kept for
/// comparison against [`crate::FrameCoalescer`]; prefer frame coalescing for
/// bounded staleness and no dropped final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedThrottle {
    min_interval_ms: u64,
    last_fired_ms: Option<u64>,
}

impl TimedThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_fired_ms: None,
        }
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    /// Returns `true` when the caller should read the scroll position now.
    ///
    /// The first event always fires; later events fire only once
    /// `min_interval_ms` has elapsed since the last fired one.
    pub fn should_fire(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_fired_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
        }
        self.last_fired_ms = Some(now_ms);
        true
    }

    /// Forgets the last fired timestamp, so the next event fires immediately.
    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}

impl Default for TimedThrottle {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}
