//! Seeded randomness for selectors and matches.
//!
//! A `GameRng` is a ChaCha8 stream keyed by a `u64` seed. Forks share the
//! seed and move to a stream id hashed from the parent's stream and the fork
//! index, so the sides of a match (or the games of a series, or forks of
//! those) draw independent sequences that still replay exactly from one seed.
//!
//! ```
//! use abalone_engine::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut side = root.fork();
//!
//! let mut replay = GameRng::new(42).fork();
//! assert_eq!(side.below(100), replay.below(100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha stream that can split off independent streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    chacha: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chacha: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed shared by this stream and all its forks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// ChaCha stream number this generator draws from.
    #[must_use]
    pub fn stream(&self) -> u64 {
        self.chacha.get_stream()
    }

    /// Split off a generator on a fresh stream.
    ///
    /// The parent's own sequence is not advanced. The `n`th fork of a
    /// generator on stream `s` always lands on `child_stream(s, n)`, so a
    /// fork tree replays identically.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;

        let mut chacha = self.chacha.clone();
        chacha.set_stream(child_stream(self.stream(), self.forks));
        chacha.set_word_pos(0);

        Self {
            chacha,
            seed: self.seed,
            forks: 0,
        }
    }

    /// Uniform integer in `0..n`. `n` must be positive.
    pub fn below(&mut self, n: usize) -> usize {
        self.chacha.gen_range(0..n)
    }

    /// Uniform pick from a slice, `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.chacha)
    }
}

/// SplitMix64 finalizer over the parent stream and fork index.
fn child_stream(parent: u64, fork: u64) -> u64 {
    let mut z = parent ^ fork.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
