//! Fixture - Deterministic Dataset Generation
//!
//! Populates a store with a reproducible author/post dataset. The content
//! concern (names, titles, bodies) draws from a seeded rng and is
//! byte-identical across runs with the same seed; the identifier concern
//! (UUID v4) is deliberately separate and non-deterministic. Seeds are
//! logged so any dataset can be regenerated.

pub mod content;

mod config;
mod generator;
mod rng;

pub use config::FixtureConfig;
pub use generator::seed_store;
pub use rng::DeterministicRng;
