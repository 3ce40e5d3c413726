//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Forkable**: Each round draws from its own derived stream
//! - **Unbiased**: Fisher–Yates over a uniform index source
//!
//! ```
//! use rust_dominoes::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut round = rng.fork();
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! round.shuffle(&mut a);
//!
//! // Same seed, same fork counter = same shuffle
//! let mut rng2 = GameRng::new(42);
//! rng2.fork().shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for deck shuffling.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still available through [`GameRng::seed`] so a
    /// game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every round of a match its own shuffle.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..=max`.
    pub fn index_through(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    ///
    /// Walks from the last index down, swapping each slot with a uniformly
    /// chosen slot at or below it. Empty and single-element slices are left
    /// untouched.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_through(i);
            slice.swap(i, j);
        }
    }
}
