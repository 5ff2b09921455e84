//! Random sources used by the roll sequence.
//!
//! The engine only ever asks for uniform values in `[0, 1)`, so a source is a
//! single method. [`ChaCha8Rng`] is the seeded production source and
//! [`ScriptedSource`] replays a fixed sequence for tests and demos.

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::SourceError;

/// A supplier of uniform random values.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// A source that replays a fixed list of values, wrapping around at the end.
///
/// ```
/// use drawrs::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([0.1, 0.9]).unwrap();
/// assert_eq!(source.next_unit(), 0.1);
/// assert_eq!(source.next_unit(), 0.9);
/// assert_eq!(source.next_unit(), 0.1);
/// assert_eq!(source.consumed(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    consumed: usize,
}

impl ScriptedSource {
    /// Creates a scripted source.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, SourceError> {
        let values = values.into();
        if values.is_empty() {
            return Err(SourceError::Empty);
        }
        if let Some(index) = values
            .iter()
            .position(|value| !(0.0..1.0).contains(value))
        {
            return Err(SourceError::OutOfRange(index));
        }
        Ok(Self {
            values,
            consumed: 0,
        })
    }

    /// Returns how many values have been handed out so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.consumed % self.values.len()];
        self.consumed += 1;
        value
    }
}
