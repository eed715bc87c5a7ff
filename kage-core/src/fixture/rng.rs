//! DeterministicRng - Seeded Content Randomness
//!
//! TigerStyle: the seed is explicit and retrievable; equal seeds produce
//! equal draw sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded pseudo-random source for fixture content.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl DeterministicRng {
    /// Create an rng from an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this rng was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a value in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        self.rng.gen_range(0..bound)
    }

    /// Pick one element from a non-empty slice.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");

        &items[self.rng.gen_range(0..items.len())]
    }
}
