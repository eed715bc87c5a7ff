//! FixtureConfig - Generation Parameters
//!
//! TigerStyle: explicit, bounded configuration.

use crate::constants::{FIXTURE_AUTHORS_COUNT, FIXTURE_POSTS_PER_AUTHOR_COUNT, FIXTURE_SEED_DEFAULT};

/// Parameters for a fixture generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Seed for the content rng. Equal seeds produce equal content.
    pub seed: u64,
    /// Number of authors to generate.
    pub authors: usize,
    /// Number of posts to generate per author.
    pub posts_per_author: usize,
}

impl FixtureConfig {
    /// Default dataset shape under an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: FIXTURE_SEED_DEFAULT,
            authors: FIXTURE_AUTHORS_COUNT,
            posts_per_author: FIXTURE_POSTS_PER_AUTHOR_COUNT,
        }
    }
}
