//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Injected**: The game owns its generator; no global RNG state
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use forty_thieves::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation
//! let mut rng2 = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for deck shuffling.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Fixed seeds give reproducible deals for tests; entropy
/// seeding gives a fresh deal per session.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rngs::OsRng.next_u64())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
