//! Animation-frame coalescing.
//!
//! Scroll, touch and wheel events can arrive many times per frame. The
//! [`Coalescer`] lets the first request in a frame schedule a callback and
//! swallows the rest until that callback has run.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

#[derive(Debug, Default)]
pub struct Coalescer {
    pending: bool,
    requested: u64,
    coalesced: u64,
}

impl Coalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger. Returns `true` if the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        self.requested += 1;
        true
    }

    /// Mark the scheduled frame as started. Returns `false` if it was cancelled.
    pub fn begin_frame(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Drop a scheduled frame that will never run (request failed or shutdown).
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Frames requested so far.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Triggers folded into an already pending frame.
    #[must_use]
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}
