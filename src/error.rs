//! Error types for engine construction.
//!
//! Running the engine never fails; a draw requested during an animation is
//! ignored. Errors only come from rejecting a configuration up front.

use thiserror::Error;

/// Errors that can occur when validating [`DrawOptions`](crate::DrawOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A turn must allow at least one draw.
    #[error("draws per turn must be at least one")]
    ZeroDrawsPerTurn,
    /// A roll must flicker at least once before resolving.
    #[error("flicker steps must be at least one")]
    ZeroFlickerSteps,
    /// A probability is not finite or lies outside `[0, 1]`.
    #[error("probability must be a finite value between 0 and 1")]
    InvalidProbability,
}

/// Errors that can occur when building a scripted random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No values were supplied.
    #[error("scripted source needs at least one value")]
    Empty,
    /// A value is not in `[0, 1)`.
    #[error("scripted value at index {0} is outside [0, 1)")]
    OutOfRange(usize),
}
