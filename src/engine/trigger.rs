// src/engine/trigger.rs

use std::time::{Duration, Instant};

use tracing::debug;

/// Debounce-coalescing state for change triggers.
///
/// Semantics:
/// - Each recorded change (re)arms a deadline one window into the future, so
///   a rapid burst of N events settles into a single deadline.
/// - Changes arriving while a chain run is in progress sit in the runtime's
///   channel; when the loop drains them afterwards they land here and arm at
///   most one pending re-run, never N.
/// - `take()` clears the state and reports how many changes were coalesced.
///
/// This struct is pure bookkeeping (no timers of its own); the runtime owns
/// the actual `sleep_until` against [`ChangeCoalescer::deadline`].
#[derive(Debug)]
pub struct ChangeCoalescer {
    window: Duration,
    deadline: Option<Instant>,
    pending: usize,
}

impl ChangeCoalescer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            pending: 0,
        }
    }

    /// Record one change observed at `now`, pushing the deadline out by a
    /// full window (trailing-edge debounce).
    pub fn record(&mut self, now: Instant) {
        self.pending += 1;
        self.deadline = Some(now + self.window);
        debug!(pending = self.pending, "change recorded, debounce re-armed");
    }

    /// The instant at which the pending run becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True if a run is pending and its deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Consume the pending run, returning how many changes it coalesced.
    pub fn take(&mut self) -> usize {
        let coalesced = self.pending;
        self.pending = 0;
        self.deadline = None;
        coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn burst_of_events_coalesces_into_one_run() {
        let mut coalescer = ChangeCoalescer::new(WINDOW);
        let start = Instant::now();

        for i in 0..5 {
            coalescer.record(start + Duration::from_millis(i * 10));
        }

        // Not due until a full quiet window after the *last* event.
        let last = start + Duration::from_millis(40);
        assert!(!coalescer.is_due(last + Duration::from_millis(100)));
        assert!(coalescer.is_due(last + WINDOW));

        assert_eq!(coalescer.take(), 5);
        assert!(coalescer.deadline().is_none());
    }

    #[test]
    fn take_resets_and_later_changes_arm_again() {
        let mut coalescer = ChangeCoalescer::new(WINDOW);
        let start = Instant::now();

        coalescer.record(start);
        assert_eq!(coalescer.take(), 1);
        assert!(!coalescer.is_due(start + WINDOW * 2));

        coalescer.record(start + WINDOW * 3);
        assert_eq!(coalescer.deadline(), Some(start + WINDOW * 4));
        assert_eq!(coalescer.take(), 1);
    }

    #[test]
    fn each_event_extends_the_deadline() {
        let mut coalescer = ChangeCoalescer::new(WINDOW);
        let start = Instant::now();

        coalescer.record(start);
        coalescer.record(start + Duration::from_millis(150));

        assert!(!coalescer.is_due(start + WINDOW));
        assert!(coalescer.is_due(start + Duration::from_millis(150) + WINDOW));
    }
}
