//! Deterministic daily puzzle generation: date-derived seeding, exhaustive
//! permutation/operator search, and the bank fallback.

mod core;
mod errors;
mod rng;
mod search;

pub use core::PuzzleGenerator;
pub use errors::GenerationError;
pub use rng::{SeededRng, date_seed};

#[cfg(test)]
mod tests;
