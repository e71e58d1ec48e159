use thiserror::Error;

use vscroll::{ListWindow, WindowOptions};

use crate::coalesce::{FrameCoalescer, PendingRecompute};
use crate::probe::{ContainerProbe, ProbeError};
use crate::throttle::TimedThrottle;

/// Which coalescing policy a shell applies to raw scroll events.
///
/// Both are valid answers to "ordering/backpressure for a noisy event
/// source"; [`ScrollCoalescing::frame_coalesced`] is the production default,
/// [`ScrollCoalescing::throttled`] reproduces the historical variant for
/// comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollCoalescing {
    /// Timestamp throttling: read immediately when the window has elapsed,
    /// drop the event otherwise.
    Throttled(TimedThrottle),
    /// One recomputation per frame, reading the position at fire time.
    FrameCoalesced(FrameCoalescer),
}

impl ScrollCoalescing {
    pub fn throttled() -> Self {
        Self::Throttled(TimedThrottle::default())
    }

    pub fn frame_coalesced() -> Self {
        Self::FrameCoalesced(FrameCoalescer::new())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShellError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// What one raw scroll event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The offset was read and applied immediately (throttled policy). The
    /// carried value is the applied (clamped) offset.
    Applied(u64),
    /// The event fell inside the throttle window and was dropped.
    Throttled,
    /// A recomputation was scheduled for the next frame (frame coalescing).
    Scheduled(PendingRecompute),
}

/// What one frame tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The pending recomputation ran; the carried value is the applied
    /// (clamped) offset.
    Recomputed(u64),
    /// Nothing was pending this frame.
    Idle,
}

/// A mounted virtual list: engine + container probe + coalescing policy.
///
/// [`ListShell::mount`] measures the container synchronously, before any
/// resize notification can fire, so the first paint is already windowed
/// correctly, and attaches the resize observation exactly once. Dropping the
/// shell (or calling [`ListShell::unmount`]) cancels any pending
/// recomputation and detaches the observation, so a callback can never fire
/// against a disposed shell and remounts never accumulate observers.
#[derive(Debug)]
pub struct ListShell<P: ContainerProbe> {
    window: ListWindow,
    probe: P,
    coalescing: ScrollCoalescing,
}

impl<P: ContainerProbe> ListShell<P> {
    pub fn mount(
        options: WindowOptions,
        mut probe: P,
        coalescing: ScrollCoalescing,
    ) -> Result<Self, ShellError> {
        let mut window = ListWindow::new(options);
        let height = probe.viewport_height()?;
        window.apply_resize_event(height);
        probe.observe_resize();
        sdebug!(height, "ListShell::mount");
        Ok(Self {
            window,
            probe,
            coalescing,
        })
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn coalescing(&self) -> &ScrollCoalescing {
        &self.coalescing
    }

    /// Feeds one raw scroll event into the coalescing policy.
    ///
    /// Under the throttled policy this may read the probe and apply the
    /// offset immediately; under frame coalescing it only (re)schedules the
    /// single pending recomputation for the next [`ListShell::on_frame`].
    pub fn on_scroll_event(&mut self, now_ms: u64) -> Result<ScrollOutcome, ShellError> {
        match &mut self.coalescing {
            ScrollCoalescing::Throttled(throttle) => {
                if !throttle.should_fire(now_ms) {
                    return Ok(ScrollOutcome::Throttled);
                }
                let offset = self.probe.scroll_offset()?;
                self.window.apply_scroll_offset_event_clamped(offset, now_ms);
                Ok(ScrollOutcome::Applied(self.window.scroll_offset()))
            }
            ScrollCoalescing::FrameCoalesced(coalescer) => {
                let pending = coalescer.schedule(now_ms);
                strace!(
                    generation = pending.generation,
                    now_ms,
                    "recompute scheduled"
                );
                Ok(ScrollOutcome::Scheduled(pending))
            }
        }
    }

    /// Runs the per-frame work: the pending recomputation (if any) and the
    /// `is_scrolling` debounce.
    ///
    /// A probe failure is reported and returned, but the pending slot is
    /// cleared *before* the read, so one bad frame never disables coalescing:
    /// the next scroll event schedules again normally.
    pub fn on_frame(&mut self, now_ms: u64) -> Result<FrameOutcome, ShellError> {
        if let ScrollCoalescing::FrameCoalesced(coalescer) = &mut self.coalescing {
            // Clear the slot first: win or fail, this frame's schedule is spent.
            if coalescer.take_pending().is_some() {
                match self.probe.scroll_offset() {
                    Ok(offset) => {
                        strace!(offset, now_ms, "recompute");
                        self.window.batch_update(|w| {
                            w.apply_scroll_offset_event_clamped(offset, now_ms);
                            w.update_scrolling(now_ms);
                        });
                        return Ok(FrameOutcome::Recomputed(self.window.scroll_offset()));
                    }
                    Err(err) => {
                        swarn!(error = %err, "scroll probe failed; dropping pending recompute");
                        return Err(ShellError::Probe(err));
                    }
                }
            }
        }
        self.window.update_scrolling(now_ms);
        Ok(FrameOutcome::Idle)
    }

    /// Applies a resize notification from the host's observer.
    pub fn on_resize(&mut self, height: u32) {
        strace!(height, "on_resize");
        self.window.apply_resize_event(height);
    }

    /// Re-measures the container synchronously (e.g. after a layout change
    /// the host's observer cannot see). Returns the measured height.
    pub fn remeasure(&mut self) -> Result<u32, ShellError> {
        let height = self.probe.viewport_height()?;
        self.window.apply_resize_event(height);
        Ok(height)
    }

    /// Unmounts the shell.
    ///
    /// Equivalent to dropping it (pending work is cancelled and the resize
    /// observation detached); provided for explicitness at call sites.
    pub fn unmount(self) {}
}

impl<P: ContainerProbe> Drop for ListShell<P> {
    fn drop(&mut self) {
        if let ScrollCoalescing::FrameCoalesced(coalescer) = &mut self.coalescing {
            coalescer.cancel();
        }
        self.probe.unobserve_resize();
        sdebug!("ListShell::drop");
    }
}
