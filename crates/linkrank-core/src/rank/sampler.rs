//! Weighted random selection used by the sampling estimator

use crate::error::Result;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws an index with probability proportional to its weight.
pub trait WeightedSampler {
    /// Pick an index in `0..weights.len()`.
    ///
    /// Fails if `weights` is empty, contains a negative or non-finite
    /// value, or sums to zero.
    fn sample(&mut self, weights: &[f64]) -> Result<usize>;
}

impl<S: WeightedSampler + ?Sized> WeightedSampler for &mut S {
    fn sample(&mut self, weights: &[f64]) -> Result<usize> {
        (**self).sample(weights)
    }
}

/// `WeightedSampler` backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WeightedSampler for RandomSampler<R> {
    fn sample(&mut self, weights: &[f64]) -> Result<usize> {
        let index = WeightedIndex::new(weights)?;
        Ok(index.sample(&mut self.rng))
    }
}
