//! Producing ticket numbers.
//!
//! A real recognizer only has to hand back the numbers it read; the
//! [`RecognizedNumbers`] adapter checks them against the game. Without one,
//! [`RandomSampler`] draws a plausible ticket from an injected
//! [`RandomSource`].

use crate::{CheckError, Result};
use lotto_core::{GameDefinition, LottoNumber};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Source of uniform integers for sampling.
pub trait RandomSource {
    /// Uniform draw from `low..=high`.
    fn next_in_range(&mut self, low: LottoNumber, high: LottoNumber) -> LottoNumber;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: LottoNumber, high: LottoNumber) -> LottoNumber {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of values, cycling when exhausted and clamping each
/// value into the requested range.
///
/// The list must contain enough distinct in-range values for the game being
/// sampled, otherwise [`RandomSampler`] never finishes. Test-only for that
/// reason.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct SequenceSource {
    values: Vec<LottoNumber>,
    index: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<LottoNumber>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, low: LottoNumber, high: LottoNumber) -> LottoNumber {
        if self.values.is_empty() {
            return low;
        }

        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(low, high)
    }
}

/// Produces the numbers on a ticket for a game.
///
/// Implementations return exactly `game.number_count` distinct numbers in
/// `1..=game.range`, ascending.
pub trait NumberSampler {
    fn sample(&mut self, game: &GameDefinition) -> Result<Vec<LottoNumber>>;
}

/// Mock recognizer: rejection sampling without replacement.
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    source: R,
}

impl<R: RandomSource> RandomSampler<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &R {
        &self.source
    }
}

impl RandomSampler<RngSource<StdRng>> {
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> NumberSampler for RandomSampler<R> {
    fn sample(&mut self, game: &GameDefinition) -> Result<Vec<LottoNumber>> {
        game.validate()?;

        let mut seen = HashSet::with_capacity(game.number_count);
        let mut numbers = Vec::with_capacity(game.number_count);

        while numbers.len() < game.number_count {
            let number = self.source.next_in_range(1, game.range);
            if seen.insert(number) {
                numbers.push(number);
            }
        }

        numbers.sort_unstable();
        tracing::debug!("Sampled {:?} for game {}", numbers, game.id);
        Ok(numbers)
    }
}

/// Adapter over numbers read by an external recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedNumbers {
    numbers: Vec<LottoNumber>,
}

impl RecognizedNumbers {
    pub fn new(numbers: Vec<LottoNumber>) -> Self {
        Self { numbers }
    }
}

impl NumberSampler for RecognizedNumbers {
    fn sample(&mut self, game: &GameDefinition) -> Result<Vec<LottoNumber>> {
        game.validate()?;

        let mut numbers = self.numbers.clone();
        numbers.sort_unstable();
        numbers.dedup();

        if let Some(out) = numbers.iter().find(|n| !game.contains(**n)) {
            return Err(CheckError::invalid_ticket(format!(
                "{} is outside 1..={} for game {}",
                out, game.range, game.id
            )));
        }

        if numbers.len() != game.number_count {
            return Err(CheckError::invalid_ticket(format!(
                "expected {} distinct numbers for game {}, got {}",
                game.number_count,
                game.id,
                numbers.len()
            )));
        }

        Ok(numbers)
    }
}
