//! Random value generation for typed parameters
//!
//! Randomness comes from a `RandomSource`, so tests can drive generation
//! from a seeded or scripted source and check range invariants exactly.

pub mod alphabet;
pub mod generator;
pub mod random;

pub use alphabet::StringAlphabet;
pub use generator::{generate_values, ValueGenerator};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
