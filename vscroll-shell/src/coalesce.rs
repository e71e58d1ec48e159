/// A scheduled-but-not-yet-executed recomputation.
///
/// The owned replacement for the historical free-floating "animation frame
/// handle in a mutable ref": at most one exists per coalescer, and scheduling
/// a new one replaces (cancels) the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRecompute {
    /// Monotonic schedule generation. A replaced recompute's generation never
    /// executes.
    pub generation: u64,
    /// Timestamp of the scroll event that scheduled this recompute.
    pub scheduled_at_ms: u64,
}

/// Frame-coalesced scroll scheduling (the preferred policy).
///
/// Each raw event replaces any pending recompute, so at most one
/// recomputation runs per rendering frame, and the scroll position is read at
/// fire time. That read always observes the freshest value, including the
/// final position of a burst.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCoalescer {
    pending: Option<PendingRecompute>,
    next_generation: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a recomputation for the next frame, replacing any pending
    /// one. Returns the pending descriptor.
    pub fn schedule(&mut self, now_ms: u64) -> PendingRecompute {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        let pending = PendingRecompute {
            generation,
            scheduled_at_ms: now_ms,
        };
        self.pending = Some(pending);
        pending
    }

    /// Takes the pending recomputation, clearing the slot.
    ///
    /// Callers clear the slot *before* reading the scroll position, so a
    /// failed read cannot leave the coalescer wedged: the next event simply
    /// schedules again.
    pub fn take_pending(&mut self) -> Option<PendingRecompute> {
        self.pending.take()
    }

    /// Drops the pending recomputation without executing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingRecompute> {
        self.pending
    }
}
