//! Инфраструктура вокруг движка:
//! - генерация ID;
//! - реализации RandomSource.

pub mod ids;
pub mod rng;

pub use ids::IdGenerator;
pub use rng::{DeterministicRng, NoShuffleRng, SystemRng};
