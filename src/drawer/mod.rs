//! Draw engine and state management.

use alloc::vec::Vec;

use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::error::OptionsError;
use crate::options::DrawOptions;
use crate::outcome::DrawOutcome;
use crate::source::RandomSource;
use crate::timer::TimerQueue;

mod clock;
mod roll;
pub mod state;
pub mod transition;

pub use state::{DrawPhase, TurnState};
pub use transition::{DrawEvent, DrawUpdate, Schedule, Transition, transition};

/// The deck-drawer engine: per-turn draw state, the roll animation timers, and
/// the random source that decides each draw.
///
/// Time is virtual. The host calls [`Drawer::advance`] from its frame loop (or
/// [`Drawer::run_until_idle`] in tests) and renders [`Drawer::snapshot`].
pub struct Drawer<R = ChaCha8Rng> {
    /// Engine options.
    pub options: DrawOptions,
    /// Current turn state. Only [`transition`] produces new values.
    state: Mutex<TurnState>,
    /// Pending flicker and auto-continue timers.
    pub timers: Mutex<TimerQueue>,
    /// Random source.
    pub source: Mutex<R>,
}

impl Drawer {
    /// Creates a new engine driven by a ChaCha8 generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`DrawOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{DrawOptions, Drawer};
    ///
    /// let drawer = Drawer::new(DrawOptions::default(), 42).unwrap();
    /// assert_eq!(drawer.draws_taken(), 0);
    /// ```
    pub fn new(options: DrawOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_source(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Drawer<R> {
    /// Creates a new engine driven by the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`DrawOptions::validate`].
    pub fn with_source(options: DrawOptions, source: R) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            state: Mutex::new(TurnState::new(options.auto_continue)),
            timers: Mutex::new(TimerQueue::new()),
            source: Mutex::new(source),
            options,
        })
    }

    /// Runs one event through [`transition`] and starts the timer it asks for.
    fn dispatch(&self, event: DrawEvent) -> Vec<DrawUpdate> {
        let mut state = self.state.lock();
        let mut source = self.source.lock();
        let current = core::mem::take(&mut *state);
        let Transition {
            state: next,
            updates,
            schedule,
        } = transition(current, event, &self.options, &mut *source);
        *state = next;
        drop(source);
        drop(state);

        if let Some(schedule) = schedule {
            let id = self.timers.lock().schedule(schedule.kind, schedule.delay_ms);
            trace!("{:?} scheduled as {id:?} in {} ms", schedule.kind, schedule.delay_ms);
        }

        updates
    }

    /// Returns a copy of the current turn state.
    pub fn snapshot(&self) -> TurnState {
        self.state.lock().clone()
    }

    /// Returns the current phase of the turn.
    pub fn phase(&self) -> DrawPhase {
        self.state.lock().phase()
    }

    /// Returns the number of draws resolved this turn.
    pub fn draws_taken(&self) -> u8 {
        self.state.lock().draws_taken
    }

    /// Returns the outcomes resolved this turn, in draw order.
    pub fn results(&self) -> Vec<DrawOutcome> {
        self.state.lock().draw_results.clone()
    }

    /// Returns the most recent resolved outcome.
    pub fn current_outcome(&self) -> Option<DrawOutcome> {
        self.state.lock().current_outcome
    }

    /// Returns the cosmetic outcome shown while rolling.
    pub fn preview_outcome(&self) -> Option<DrawOutcome> {
        self.state.lock().preview_outcome
    }

    /// Returns whether a roll is animating.
    ///
    /// While this is `true` the primary control should be disabled;
    /// [`Drawer::request_draw`] ignores requests anyway.
    pub fn is_animating(&self) -> bool {
        self.state.lock().is_animating
    }

    /// Returns whether auto-continue is enabled.
    pub fn auto_continue(&self) -> bool {
        self.state.lock().auto_continue
    }
}
