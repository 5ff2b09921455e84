//! Turn state types.

use alloc::vec::Vec;

use crate::outcome::DrawOutcome;

/// Where the engine is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// No draw has been taken this turn.
    Idle,
    /// A roll sequence is animating.
    Rolling {
        /// One-based number of the draw being rolled.
        draw_number: u8,
    },
    /// The last roll has resolved.
    Resolved {
        /// Draws taken so far this turn.
        draws_taken: u8,
    },
}

/// Everything the presentation layer needs to render the draw screen.
///
/// `draws_taken` always equals `draw_results.len()`, and `flicker_steps_taken`
/// is zero whenever `is_animating` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnState {
    /// Draws resolved this turn.
    pub draws_taken: u8,
    /// Resolved outcomes in draw order.
    pub draw_results: Vec<DrawOutcome>,
    /// Most recent resolved outcome.
    pub current_outcome: Option<DrawOutcome>,
    /// Whether a roll sequence is running.
    pub is_animating: bool,
    /// Cosmetic outcome shown while rolling.
    pub preview_outcome: Option<DrawOutcome>,
    /// Whether the next draw of the turn fires on its own.
    pub auto_continue: bool,
    /// Flicker steps performed by the running roll.
    pub flicker_steps_taken: u8,
}

impl TurnState {
    /// Creates the state of a fresh turn.
    #[must_use]
    pub const fn new(auto_continue: bool) -> Self {
        Self {
            draws_taken: 0,
            draw_results: Vec::new(),
            current_outcome: None,
            is_animating: false,
            preview_outcome: None,
            auto_continue,
            flicker_steps_taken: 0,
        }
    }

    /// Returns the current phase of the turn.
    #[must_use]
    pub const fn phase(&self) -> DrawPhase {
        if self.is_animating {
            DrawPhase::Rolling {
                draw_number: self.draws_taken + 1,
            }
        } else if self.draws_taken == 0 {
            DrawPhase::Idle
        } else {
            DrawPhase::Resolved {
                draws_taken: self.draws_taken,
            }
        }
    }

    /// Returns `true` once the turn has used all its draws.
    #[must_use]
    pub const fn is_turn_over(&self, draws_per_turn: u8) -> bool {
        self.draws_taken >= draws_per_turn
    }
}
