//! Trailing debounce for resize triggers.

use std::time::{Duration, Instant};

/// Coalesces rapid resize triggers into a single trailing pass.
///
/// Every trigger overwrites the pending one and restarts the delay window,
/// so a burst of triggers fires exactly once, with the width of the final
/// trigger, once the window has been quiet for the full delay.
///
/// The debouncer never sleeps; the host polls it. The `_at` variants take
/// an explicit timestamp so the contract can be tested without waiting.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(f64, Instant)>,
}

impl ResizeDebouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a resize trigger now.
    pub fn trigger(&mut self, width: f64) {
        self.trigger_at(width, Instant::now());
    }

    /// Record a resize trigger at an explicit time. The delay window
    /// restarts from this trigger.
    pub fn trigger_at(&mut self, width: f64, now: Instant) {
        self.pending = Some((width, now));
    }

    /// Take the pending width if the quiet period has elapsed.
    pub fn poll(&mut self) -> Option<f64> {
        self.poll_at(Instant::now())
    }

    /// Take the pending width if the quiet period has elapsed as of `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<f64> {
        match self.pending {
            Some((width, at)) if now.saturating_duration_since(at) >= self.delay => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }

    /// Whether a trigger is waiting for its window to expire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending trigger without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
