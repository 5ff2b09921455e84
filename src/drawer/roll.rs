use alloc::vec::Vec;

use log::debug;

use crate::outcome::DrawOutcome;
use crate::source::RandomSource;
use crate::timer::TimerKind;

use super::{DrawEvent, DrawUpdate, Drawer};

impl<R: RandomSource> Drawer<R> {
    /// Handles a press of the primary control.
    ///
    /// - While a roll is animating the request is ignored and nothing is returned.
    /// - Once the turn has used all its draws, the turn is reset and
    ///   [`DrawUpdate::TurnReset`] is returned. No randomness is consumed.
    /// - Otherwise a roll sequence starts; advance the clock to play it out.
    ///
    /// A pending auto-continue roll is cancelled, since this request takes its place.
    pub fn request_draw(&self) -> Vec<DrawUpdate> {
        if !self.is_animating() {
            let cancelled = self.timers.lock().cancel_kind(TimerKind::AutoContinue);
            if cancelled > 0 {
                debug!("manual draw replaces pending auto-continue");
            }
        }

        self.dispatch(DrawEvent::Request)
    }

    /// Sets the auto-continue toggle.
    ///
    /// Turning it off cancels a pending automatic roll.
    pub fn set_auto_continue(&self, enabled: bool) -> Vec<DrawUpdate> {
        if !enabled {
            let cancelled = self.timers.lock().cancel_kind(TimerKind::AutoContinue);
            if cancelled > 0 {
                debug!("pending auto-continue cancelled");
            }
        }

        self.dispatch(DrawEvent::SetAutoContinue(enabled))
    }

    /// Flips the auto-continue toggle and returns the new setting.
    pub fn toggle_auto_continue(&self) -> bool {
        let enabled = !self.auto_continue();
        self.set_auto_continue(enabled);
        enabled
    }

    /// Requests a draw and plays the roll out immediately.
    ///
    /// Returns the resolved outcome, or `None` if the request did not start a
    /// roll (a roll was already animating, or the turn was reset). An
    /// auto-continue roll scheduled by the resolution stays pending.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{DrawOptions, Drawer};
    ///
    /// let drawer = Drawer::new(DrawOptions::default(), 7).unwrap();
    /// assert!(drawer.draw_now().is_some());
    /// assert!(drawer.draw_now().is_some());
    /// // Third press starts a new turn.
    /// assert_eq!(drawer.draw_now(), None);
    /// assert_eq!(drawer.draws_taken(), 0);
    /// ```
    pub fn draw_now(&self) -> Option<DrawOutcome> {
        let started = self
            .request_draw()
            .iter()
            .any(|update| matches!(update, DrawUpdate::RollStarted { .. }));
        if !started {
            return None;
        }

        while let Some(updates) = self.fire_next(u64::MAX) {
            let resolved = updates.iter().find_map(|update| match update {
                DrawUpdate::Resolved { outcome, .. } => Some(*outcome),
                _ => None,
            });
            if resolved.is_some() {
                return resolved;
            }
        }

        None
    }
}
