//! The transition function behind every change to [`TurnState`].
//!
//! [`transition`] is pure apart from the random values it pulls: it takes the
//! current state and an event, and returns the next state together with the
//! updates to report and at most one timer to schedule. The [`Drawer`] owns
//! the clock and feeds timer expiries back in as events.
//!
//! [`Drawer`]: crate::Drawer

use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::options::DrawOptions;
use crate::outcome::DrawOutcome;
use crate::source::RandomSource;
use crate::timer::TimerKind;

use super::state::TurnState;

/// Inputs to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEvent {
    /// The primary control was pressed.
    Request,
    /// A flicker timer expired.
    FlickerTick,
    /// The auto-continue timer expired.
    AutoContinue,
    /// The auto-continue toggle was set.
    SetAutoContinue(bool),
    /// The screen is going away; abandon any running roll.
    Teardown,
}

/// Observable effects of a transition, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawUpdate {
    /// The turn was reset after reaching its draw cap.
    TurnReset,
    /// A roll sequence began.
    RollStarted {
        /// One-based number of the draw within the turn.
        draw_number: u8,
        /// Whether the roll was started by the auto-continue timer.
        automatic: bool,
    },
    /// A cosmetic preview step.
    Flicker {
        /// One-based step number.
        step: u8,
        /// Outcome to display for this step.
        preview: DrawOutcome,
    },
    /// A roll resolved.
    Resolved {
        /// One-based number of the draw within the turn.
        draw_number: u8,
        /// The committed outcome.
        outcome: DrawOutcome,
    },
    /// The auto-continue toggle changed.
    AutoContinueChanged(bool),
    /// A running roll was abandoned.
    RollAbandoned,
}

/// A timer requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Timer to start.
    pub kind: TimerKind,
    /// Delay from the current clock value, in milliseconds.
    pub delay_ms: u64,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next state.
    pub state: TurnState,
    /// What changed, in order. Empty when the event was ignored.
    pub updates: Vec<DrawUpdate>,
    /// Timer to start, if any.
    pub schedule: Option<Schedule>,
}

impl Transition {
    const fn unchanged(state: TurnState) -> Self {
        Self {
            state,
            updates: Vec::new(),
            schedule: None,
        }
    }
}

/// Applies `event` to `state`.
///
/// Random values are only drawn by [`DrawEvent::FlickerTick`]: one per flicker
/// step, plus one more on the final step to resolve the roll.
pub fn transition<R: RandomSource + ?Sized>(
    state: TurnState,
    event: DrawEvent,
    options: &DrawOptions,
    source: &mut R,
) -> Transition {
    match event {
        DrawEvent::Request => request(state, options),
        DrawEvent::FlickerTick => flicker(state, options, source),
        DrawEvent::AutoContinue => auto_continue(state, options),
        DrawEvent::SetAutoContinue(enabled) => set_auto_continue(state, enabled),
        DrawEvent::Teardown => teardown(state),
    }
}

fn request(mut state: TurnState, options: &DrawOptions) -> Transition {
    if state.is_animating {
        trace!("draw requested while rolling; ignored");
        return Transition::unchanged(state);
    }

    if state.is_turn_over(options.draws_per_turn) {
        state.draws_taken = 0;
        state.draw_results.clear();
        state.current_outcome = None;
        debug!("turn reset");
        return Transition {
            state,
            updates: vec![DrawUpdate::TurnReset],
            schedule: None,
        };
    }

    start_roll(state, options, false)
}

fn start_roll(mut state: TurnState, options: &DrawOptions, automatic: bool) -> Transition {
    state.is_animating = true;
    state.flicker_steps_taken = 0;
    state.preview_outcome = None;

    let draw_number = state.draws_taken + 1;
    debug!("roll started: draw {draw_number} (automatic: {automatic})");

    Transition {
        state,
        updates: vec![DrawUpdate::RollStarted {
            draw_number,
            automatic,
        }],
        schedule: Some(Schedule {
            kind: TimerKind::FlickerTick,
            delay_ms: options.flicker_interval_ms,
        }),
    }
}

fn flicker<R: RandomSource + ?Sized>(
    mut state: TurnState,
    options: &DrawOptions,
    source: &mut R,
) -> Transition {
    if !state.is_animating {
        trace!("stale flicker tick; ignored");
        return Transition::unchanged(state);
    }

    let preview = DrawOutcome::from_unit(source.next_unit(), options.flicker_action_probability);
    state.flicker_steps_taken += 1;
    state.preview_outcome = Some(preview);

    let step = state.flicker_steps_taken;
    trace!("flicker {step}/{}: {preview}", options.flicker_steps);
    let mut updates = vec![DrawUpdate::Flicker { step, preview }];

    if step < options.flicker_steps {
        return Transition {
            state,
            updates,
            schedule: Some(Schedule {
                kind: TimerKind::FlickerTick,
                delay_ms: options.flicker_interval_ms,
            }),
        };
    }

    // Only this value decides the draw; the flicker values above are cosmetic.
    let outcome = DrawOutcome::from_unit(source.next_unit(), options.action_card_probability);
    state.draw_results.push(outcome);
    state.current_outcome = Some(outcome);
    state.draws_taken += 1;
    state.is_animating = false;
    state.preview_outcome = None;
    state.flicker_steps_taken = 0;

    let draw_number = state.draws_taken;
    debug!("roll resolved: draw {draw_number} is {outcome}");
    updates.push(DrawUpdate::Resolved {
        draw_number,
        outcome,
    });

    let schedule = (state.auto_continue && !state.is_turn_over(options.draws_per_turn)).then(|| {
        debug!(
            "auto-continue in {} ms",
            options.auto_continue_delay_ms
        );
        Schedule {
            kind: TimerKind::AutoContinue,
            delay_ms: options.auto_continue_delay_ms,
        }
    });

    Transition {
        state,
        updates,
        schedule,
    }
}

fn auto_continue(state: TurnState, options: &DrawOptions) -> Transition {
    if !state.auto_continue
        || state.is_animating
        || state.draws_taken == 0
        || state.is_turn_over(options.draws_per_turn)
    {
        trace!("stale auto-continue; ignored");
        return Transition::unchanged(state);
    }

    start_roll(state, options, true)
}

fn set_auto_continue(mut state: TurnState, enabled: bool) -> Transition {
    if state.auto_continue == enabled {
        return Transition::unchanged(state);
    }

    state.auto_continue = enabled;
    debug!("auto-continue {}", if enabled { "enabled" } else { "disabled" });
    Transition {
        state,
        updates: vec![DrawUpdate::AutoContinueChanged(enabled)],
        schedule: None,
    }
}

fn teardown(mut state: TurnState) -> Transition {
    if !state.is_animating {
        return Transition::unchanged(state);
    }

    state.is_animating = false;
    state.preview_outcome = None;
    state.flicker_steps_taken = 0;
    debug!("roll abandoned at draw {}", state.draws_taken + 1);
    Transition {
        state,
        updates: vec![DrawUpdate::RollAbandoned],
        schedule: None,
    }
}
