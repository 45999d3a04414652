//! Deterministic random number generation for deals and reshuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal and the same reshuffles
//! - **Reproducible**: `seed()` reports the seed so a game can be replayed
//! - **Chained deals**: `next_seed()` derives the seed of the following game
//!
//! ```
//! use pyramid_solitaire::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut x: Vec<u8> = (0..52).collect();
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for shuffling.
///
/// Uses ChaCha8 for speed while maintaining uniform permutations.
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

    /// Create an RNG with a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a seed for the next game.
    ///
    /// Successive calls give a deterministic chain of seeds.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place (Fisher–Yates, uniform over permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
