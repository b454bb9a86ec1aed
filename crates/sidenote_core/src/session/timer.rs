//! Cancellable leave-debounce primitive.
//!
//! # Responsibility
//! - Hold the single scheduled "clear hover target" deadline and decide
//!   when it fires.
//!
//! # Invariants
//! - At most one deadline is pending at a time; rescheduling replaces it.
//! - Cancellation is unconditional: there is no partial-cancel state.
//! - Firing is driven by the caller handing in `now`; the primitive owns no
//!   thread and reads no clock, which keeps the 50ms window testable.

use std::time::{Duration, Instant};

/// Delay between a pointer leaving a target and the hover state clearing.
///
/// Long enough to bridge the gap when the pointer crosses the boundary
/// between two adjacent drop-eligible items, short enough to feel instant.
pub const LEAVE_DEBOUNCE: Duration = Duration::from_millis(50);

/// One cancellable scheduled deadline.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveDebounce {
    deadline: Option<Instant>,
}

impl LeaveDebounce {
    /// Creates an idle debounce with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules (or reschedules) the deadline at `now + LEAVE_DEBOUNCE`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + LEAVE_DEBOUNCE);
    }

    /// Cancels any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is currently pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes and reports a due deadline.
    ///
    /// Returns `true` exactly once per scheduled deadline, the first time
    /// `now` reaches it.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LeaveDebounce, LEAVE_DEBOUNCE};
    use std::time::{Duration, Instant};

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = LeaveDebounce::new();
        timer.schedule(start);

        assert!(!timer.fire_due(start));
        assert!(!timer.fire_due(start + Duration::from_millis(49)));
        assert!(timer.fire_due(start + LEAVE_DEBOUNCE));
        assert!(!timer.fire_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let start = Instant::now();
        let mut timer = LeaveDebounce::new();
        timer.schedule(start);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = LeaveDebounce::new();
        timer.schedule(start);
        timer.schedule(start + Duration::from_millis(40));

        assert!(!timer.fire_due(start + LEAVE_DEBOUNCE));
        assert!(timer.fire_due(start + Duration::from_millis(40) + LEAVE_DEBOUNCE));
    }
}
