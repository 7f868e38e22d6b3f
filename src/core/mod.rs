//! Core utilities shared by the rest of the engine.
//!
//! Currently just the deterministic RNG; everything game-specific lives
//! in `cards`, `piles`, and `game`.

pub mod rng;

pub use rng::{GameRng, GameRngState};
