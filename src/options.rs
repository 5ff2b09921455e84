//! Engine configuration options.

use crate::error::OptionsError;

/// Configuration options for a [`Drawer`](crate::Drawer).
///
/// The defaults reproduce the table rules: two draws per turn, six flicker
/// steps 100 ms apart, a 60/40 split in favour of action cards, and a 700 ms
/// pause before an automatic second draw.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawrs::DrawOptions;
///
/// let options = DrawOptions::default()
///     .with_flicker_interval_ms(50)
///     .with_auto_continue(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    /// Number of draws allowed before the turn must be reset.
    pub draws_per_turn: u8,
    /// Number of cosmetic preview updates per roll.
    pub flicker_steps: u8,
    /// Delay between two flicker steps, in milliseconds.
    pub flicker_interval_ms: u64,
    /// Probability that a flicker step previews an action card.
    pub flicker_action_probability: f64,
    /// Probability that a roll resolves to an action card.
    pub action_card_probability: f64,
    /// Delay before the automatic follow-up roll, in milliseconds.
    pub auto_continue_delay_ms: u64,
    /// Initial position of the auto-continue toggle.
    pub auto_continue: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            draws_per_turn: 2,
            flicker_steps: 6,
            flicker_interval_ms: 100,
            flicker_action_probability: 0.5,
            action_card_probability: 0.6,
            auto_continue_delay_ms: 700,
            auto_continue: false,
        }
    }
}

const fn is_probability(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value <= 1.0
}

impl DrawOptions {
    /// Checks that the options describe a playable engine.
    ///
    /// # Errors
    ///
    /// Returns an error if a turn allows no draws, a roll has no flicker steps,
    /// or either probability is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.draws_per_turn == 0 {
            return Err(OptionsError::ZeroDrawsPerTurn);
        }
        if self.flicker_steps == 0 {
            return Err(OptionsError::ZeroFlickerSteps);
        }
        if !is_probability(self.flicker_action_probability)
            || !is_probability(self.action_card_probability)
        {
            return Err(OptionsError::InvalidProbability);
        }
        Ok(())
    }

    /// Total animated duration of one roll, in milliseconds.
    ///
    /// Saturates at `u64::MAX`.
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// assert_eq!(DrawOptions::default().roll_duration_ms(), 600);
    /// ```
    #[must_use]
    pub const fn roll_duration_ms(&self) -> u64 {
        self.flicker_interval_ms
            .saturating_mul(self.flicker_steps as u64)
    }

    /// Sets the number of draws per turn.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// let options = DrawOptions::default().with_draws_per_turn(3);
    /// assert_eq!(options.draws_per_turn, 3);
    /// ```
    #[must_use]
    pub const fn with_draws_per_turn(mut self, draws: u8) -> Self {
        self.draws_per_turn = draws;
        self
    }

    /// Sets the number of flicker steps per roll.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// let options = DrawOptions::default().with_flicker_steps(10);
    /// assert_eq!(options.flicker_steps, 10);
    /// ```
    #[must_use]
    pub const fn with_flicker_steps(mut self, steps: u8) -> Self {
        self.flicker_steps = steps;
        self
    }

    /// Sets the delay between flicker steps.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// let options = DrawOptions::default().with_flicker_interval_ms(40);
    /// assert_eq!(options.flicker_interval_ms, 40);
    /// ```
    #[must_use]
    pub const fn with_flicker_interval_ms(mut self, interval: u64) -> Self {
        self.flicker_interval_ms = interval;
        self
    }

    /// Sets the probability that a flicker step previews an action card.
    #[must_use]
    pub const fn with_flicker_action_probability(mut self, probability: f64) -> Self {
        self.flicker_action_probability = probability;
        self
    }

    /// Sets the probability that a roll resolves to an action card.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// let options = DrawOptions::default().with_action_card_probability(0.75);
    /// assert_eq!(options.action_card_probability, 0.75);
    /// ```
    #[must_use]
    pub const fn with_action_card_probability(mut self, probability: f64) -> Self {
        self.action_card_probability = probability;
        self
    }

    /// Sets the delay before the automatic follow-up roll.
    #[must_use]
    pub const fn with_auto_continue_delay_ms(mut self, delay: u64) -> Self {
        self.auto_continue_delay_ms = delay;
        self
    }

    /// Sets the initial auto-continue toggle.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::DrawOptions;
    ///
    /// let options = DrawOptions::default().with_auto_continue(true);
    /// assert!(options.auto_continue);
    /// ```
    #[must_use]
    pub const fn with_auto_continue(mut self, enabled: bool) -> Self {
        self.auto_continue = enabled;
        self
    }
}
