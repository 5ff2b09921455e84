//! Draw outcome types.

/// The category a draw resolves to.
///
/// Each category corresponds to one of the two physical decks on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawOutcome {
    /// Draw from the Action deck.
    ActionCard,
    /// Draw from the Body Part deck.
    BodyPart,
}

impl DrawOutcome {
    /// Maps a uniform value in `[0, 1)` to an outcome.
    ///
    /// Values strictly below `action_probability` yield [`DrawOutcome::ActionCard`].
    #[must_use]
    pub fn from_unit(value: f64, action_probability: f64) -> Self {
        if value < action_probability {
            Self::ActionCard
        } else {
            Self::BodyPart
        }
    }

    /// Human readable name of the outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ActionCard => "Action Card",
            Self::BodyPart => "Body Part",
        }
    }

    /// Instruction shown to the players once the draw has resolved.
    #[must_use]
    pub const fn deck_hint(self) -> &'static str {
        match self {
            Self::ActionCard => "Draw from the Action deck",
            Self::BodyPart => "Draw from the Body Part deck",
        }
    }
}

impl core::fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(DrawOutcome::from_unit(0.0, 0.6), DrawOutcome::ActionCard);
        assert_eq!(DrawOutcome::from_unit(0.599_999, 0.6), DrawOutcome::ActionCard);
        assert_eq!(DrawOutcome::from_unit(0.6, 0.6), DrawOutcome::BodyPart);
        assert_eq!(DrawOutcome::from_unit(0.999, 0.6), DrawOutcome::BodyPart);
    }

    #[test]
    fn labels() {
        assert_eq!(DrawOutcome::ActionCard.label(), "Action Card");
        assert_eq!(DrawOutcome::BodyPart.deck_hint(), "Draw from the Body Part deck");
    }
}
