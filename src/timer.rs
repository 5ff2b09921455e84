//! One-shot timers on a virtual millisecond clock.
//!
//! Nothing here sleeps. The host moves the clock forward and collects the
//! timers that became due, which keeps every roll reproducible in tests.

use alloc::collections::BTreeMap;

/// Handle of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Advance the running roll by one flicker step.
    FlickerTick,
    /// Start the automatic follow-up roll.
    AutoContinue,
}

/// A timer taken off the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    /// Handle the timer was scheduled under.
    pub id: TimerId,
    /// Kind of the timer.
    pub kind: TimerKind,
    /// Clock value at which it was due.
    pub due: u64,
}

/// Pending timers ordered by due time, then by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: u64,
    next_id: u64,
    pending: BTreeMap<(u64, TimerId), TimerKind>,
}

impl TimerQueue {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules a timer `delay` milliseconds after the current clock value.
    pub fn schedule(&mut self, kind: TimerKind, delay: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        self.pending.insert((due, id), kind);
        id
    }

    /// Cancels every pending timer of the given kind and returns how many were removed.
    pub fn cancel_kind(&mut self, kind: TimerKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, pending| *pending != kind);
        before - self.pending.len()
    }

    /// Drops all pending timers and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.pending.len();
        self.pending.clear();
        removed
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Removes the earliest timer if it is due at or before `until`.
    ///
    /// The clock moves to the timer's due time, so anything scheduled while
    /// handling it is relative to the moment it fired.
    pub fn pop_due(&mut self, until: u64) -> Option<FiredTimer> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due > until {
            return None;
        }
        let kind = self.pending.remove(&(due, id))?;
        self.now = self.now.max(due);
        Some(FiredTimer { id, kind, due })
    }

    /// Moves the clock forward. The clock never runs backwards.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}
