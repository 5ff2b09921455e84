//! Presentation helpers for the draw screen and the reference screens that link to it.
//!
//! Nothing here touches engine state; every function reads a [`TurnState`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::drawer::TurnState;
use crate::options::DrawOptions;
use crate::outcome::DrawOutcome;

/// Screens of the companion app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The draw screen, served at the root.
    DeckDrawer,
    /// Rulebook text.
    Rulebook,
    /// Archetype reference cards.
    Sets,
}

/// A header link from one screen to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Screen the link points to.
    pub target: Screen,
    /// Link text.
    pub label: &'static str,
}

const DRAWER_LINKS: [NavLink; 2] = [
    NavLink {
        target: Screen::Sets,
        label: "Sets",
    },
    NavLink {
        target: Screen::Rulebook,
        label: "Rules",
    },
];

const BACK_TO_GAME: [NavLink; 1] = [NavLink {
    target: Screen::DeckDrawer,
    label: "Back to Game",
}];

impl Screen {
    /// All screens, draw screen first.
    pub const ALL: [Self; 3] = [Self::DeckDrawer, Self::Rulebook, Self::Sets];

    /// Route path of the screen.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::DeckDrawer => "/",
            Self::Rulebook => "/rulebook",
            Self::Sets => "/sets",
        }
    }

    /// Resolves a route path. A trailing slash is ignored.
    ///
    /// ```
    /// use drawrs::view::Screen;
    ///
    /// assert_eq!(Screen::from_path("/"), Some(Screen::DeckDrawer));
    /// assert_eq!(Screen::from_path("/sets/"), Some(Screen::Sets));
    /// assert_eq!(Screen::from_path("/nowhere"), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|screen| screen.path() == normalized)
    }

    /// Header title of the screen.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DeckDrawer => "Deck Drawer",
            Self::Rulebook => "Rulebook",
            Self::Sets => "Character Sets",
        }
    }

    /// Header links shown on the screen. Reference screens only link back.
    #[must_use]
    pub const fn nav_links(self) -> &'static [NavLink] {
        match self {
            Self::DeckDrawer => &DRAWER_LINKS,
            Self::Rulebook | Self::Sets => &BACK_TO_GAME,
        }
    }
}

/// Size of the roll button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollButtonSize {
    /// Centre button on the idle screen.
    Large,
    /// Smaller button under a resolved outcome.
    Medium,
}

impl RollButtonSize {
    /// Large until the turn has an outcome to show.
    #[must_use]
    pub const fn for_state(state: &TurnState) -> Self {
        if state.current_outcome.is_some() {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// Text of the roll button.
#[must_use]
pub const fn roll_button_label(
    state: &TurnState,
    options: &DrawOptions,
    size: RollButtonSize,
) -> &'static str {
    if state.is_animating {
        "Rolling..."
    } else if state.is_turn_over(options.draws_per_turn) {
        "Start New Turn"
    } else {
        match size {
            RollButtonSize::Large => "Press to Roll",
            RollButtonSize::Medium => "Draw Again",
        }
    }
}

/// Heading of the outcome panel: the preview while rolling, else the resolved outcome.
#[must_use]
pub const fn outcome_heading(state: &TurnState) -> Option<&'static str> {
    if state.is_animating {
        // The preview is unset for the first interval of a roll.
        match state.preview_outcome {
            Some(preview) => Some(preview.label()),
            None => Some(DrawOutcome::BodyPart.label()),
        }
    } else {
        match state.current_outcome {
            Some(outcome) => Some(outcome.label()),
            None => None,
        }
    }
}

/// Draw counter line, e.g. `Draws this turn: 1/2`.
#[must_use]
pub fn draw_counter(state: &TurnState, options: &DrawOptions) -> String {
    format!(
        "Draws this turn: {}/{}",
        state.draws_taken, options.draws_per_turn
    )
}

/// Rows of the previous-draws panel as `(caption, outcome label)` pairs.
///
/// Empty while a roll is animating, matching the panel being hidden.
#[must_use]
pub fn results_list(state: &TurnState) -> Vec<(String, &'static str)> {
    if state.is_animating {
        return Vec::new();
    }
    state
        .draw_results
        .iter()
        .enumerate()
        .map(|(index, outcome)| (format!("Draw {}:", index + 1), outcome.label()))
        .collect()
}
