use alloc::string::String;

use thiserror::Error;

/// A live container read failed (e.g. the underlying view is already gone).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("container probe failed: {reason}")]
pub struct ProbeError {
    reason: String,
}

impl ProbeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The seam between the shell and the host's scroll container.
///
/// Implementations read live geometry from the real UI (a DOM element, a TUI
/// viewport, a test double). Reads are fallible: the shell treats a failure
/// as a reportable fault, never a panic, and never lets one wedge the
/// coalescing machinery.
pub trait ContainerProbe {
    /// The container's current scroll offset, read at call time.
    fn scroll_offset(&mut self) -> Result<u64, ProbeError>;

    /// The container's current rendered height (not the window's).
    fn viewport_height(&mut self) -> Result<u32, ProbeError>;

    /// Called exactly once per mount, after the initial measurement, so the
    /// host can attach its resize observation.
    fn observe_resize(&mut self) {}

    /// Called exactly once per unmount (or shell drop). Always paired with
    /// [`ContainerProbe::observe_resize`].
    fn unobserve_resize(&mut self) {}
}
