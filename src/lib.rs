//! A deck-drawer roll engine for party card games, with optional `no_std` support.
//!
//! The crate provides a [`Drawer`] that owns the state of one turn: up to two
//! draws, each decided by a short animated roll that flickers between the two
//! decks before settling on an [`DrawOutcome`]. Timers run on a virtual clock
//! the host advances, and the random source is injectable, so every roll can be
//! replayed exactly.
//!
//! # Example
//!
//! ```
//! use drawrs::{DrawOptions, DrawUpdate, Drawer};
//!
//! let drawer = Drawer::new(DrawOptions::default(), 42).unwrap();
//! drawer.request_draw();
//! assert!(drawer.is_animating());
//!
//! let updates = drawer.run_until_idle();
//! assert!(matches!(updates.last(), Some(DrawUpdate::Resolved { draw_number: 1, .. })));
//! assert_eq!(drawer.draws_taken(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod drawer;
pub mod error;
pub mod options;
pub mod outcome;
pub mod source;
pub mod timer;
pub mod view;
mod sync;

// Re-export main types
pub use drawer::{
    DrawEvent, DrawPhase, DrawUpdate, Drawer, Schedule, Transition, TurnState, transition,
};
pub use error::{OptionsError, SourceError};
pub use options::DrawOptions;
pub use outcome::DrawOutcome;
pub use source::{RandomSource, ScriptedSource};
pub use timer::{FiredTimer, TimerId, TimerKind, TimerQueue};
