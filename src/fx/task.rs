//! Explicit lifecycles for host-scheduled work
//!
//! The host (browser) hands out opaque handles for animation frames and timers.
//! These wrappers own the handle so each effect has at most one pending callback
//! and stopping it is an explicit operation.

/// A per-frame loop: idle, or running with the handle of its pending frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTask<H> {
    pending: Option<H>,
}

impl<H> Default for FrameTask<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameTask<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the handle of the next scheduled frame. Returns the previously pending
    /// handle, which the caller must cancel if it differs.
    pub fn schedule(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Stop the loop, yielding the pending handle for cancellation
    pub fn stop(&mut self) -> Option<H> {
        self.pending.take()
    }
}

/// A repeating timer that remembers its handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTask<H> {
    period_ms: u32,
    handle: Option<H>,
}

impl<H> IntervalTask<H> {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            handle: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn started(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Cancel the interval, yielding its handle for the host to clear
    pub fn cancel(&mut self) -> Option<H> {
        self.handle.take()
    }
}

/// Trailing-edge debounce: each trigger replaces the pending timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce<H> {
    quiet_ms: u32,
    pending: Option<H>,
}

impl<H> Debounce<H> {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn quiet_ms(&self) -> u32 {
        self.quiet_ms
    }

    /// Register a freshly scheduled timer. Returns the superseded one to clear.
    pub fn rearm(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Called when the timer fires
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_task_single_handle() {
        let mut task = FrameTask::new();
        assert!(!task.is_running());
        assert_eq!(task.schedule(1), None);
        assert_eq!(task.schedule(2), Some(1));
        assert!(task.is_running());
        assert_eq!(task.stop(), Some(2));
        assert_eq!(task.stop(), None);
        assert!(!task.is_running());
    }

    #[test]
    fn test_interval_cancel() {
        let mut task = IntervalTask::new(80);
        assert_eq!(task.period_ms(), 80);
        task.started(7);
        assert!(task.is_active());
        assert_eq!(task.cancel(), Some(7));
        assert!(!task.is_active());
    }

    #[test]
    fn test_debounce_rearm_returns_previous() {
        let mut d = Debounce::new(80);
        assert_eq!(d.rearm(1), None);
        assert_eq!(d.rearm(2), Some(1));
        assert!(d.is_pending());
        d.fired();
        assert!(!d.is_pending());
        assert_eq!(d.rearm(3), None);
    }
}
