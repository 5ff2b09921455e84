use alloc::vec::Vec;

use log::{debug, trace};

use crate::source::RandomSource;
use crate::timer::TimerKind;

use super::{DrawEvent, DrawUpdate, Drawer};

impl<R: RandomSource> Drawer<R> {
    /// Fires the earliest timer due at or before `until`.
    pub(super) fn fire_next(&self, until: u64) -> Option<Vec<DrawUpdate>> {
        let fired = self.timers.lock().pop_due(until)?;
        trace!("{:?} fired at {} ms", fired.kind, fired.due);

        let event = match fired.kind {
            TimerKind::FlickerTick => DrawEvent::FlickerTick,
            TimerKind::AutoContinue => DrawEvent::AutoContinue,
        };
        Some(self.dispatch(event))
    }

    /// Moves the clock forward by `elapsed_ms` and fires every timer that
    /// becomes due, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{DrawOptions, Drawer};
    ///
    /// let drawer = Drawer::new(DrawOptions::default(), 3).unwrap();
    /// drawer.request_draw();
    /// drawer.advance(350);
    /// assert_eq!(drawer.snapshot().flicker_steps_taken, 3);
    /// drawer.advance(250);
    /// assert_eq!(drawer.draws_taken(), 1);
    /// ```
    pub fn advance(&self, elapsed_ms: u64) -> Vec<DrawUpdate> {
        let target = self.now().saturating_add(elapsed_ms);
        let mut updates = Vec::new();
        while let Some(fired) = self.fire_next(target) {
            updates.extend(fired);
        }
        self.timers.lock().advance_to(target);
        updates
    }

    /// Fires every pending timer, including ones scheduled along the way,
    /// regardless of how far the clock has to move.
    pub fn run_until_idle(&self) -> Vec<DrawUpdate> {
        let mut updates = Vec::new();
        while let Some(fired) = self.fire_next(u64::MAX) {
            updates.extend(fired);
        }
        updates
    }

    /// Returns the current clock value in milliseconds.
    pub fn now(&self) -> u64 {
        self.timers.lock().now()
    }

    /// Returns when the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.lock().next_deadline()
    }

    /// Returns the number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.lock().len()
    }

    /// Cancels all pending timers and abandons a running roll.
    ///
    /// Call this when the draw screen goes away. Returns the number of timers
    /// that were cancelled.
    pub fn teardown(&self) -> usize {
        let cancelled = self.timers.lock().clear();
        self.dispatch(DrawEvent::Teardown);
        debug!("teardown cancelled {cancelled} timer(s)");
        cancelled
    }
}
