//! Game constants and match configuration.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 61;

/// Marbles each player starts with.
pub const MARBLES_PER_PLAYER: usize = 14;

/// Captures needed to win.
pub const WIN_SCORE: u8 = 6;

/// Longest run of own marbles a single push can move.
pub const MAX_PUSH_LINE: usize = 3;

/// Longest run of enemy marbles a push can shove.
pub const MAX_ENEMY_LINE: usize = 2;

/// Configuration for running a match between two move selectors.
///
/// The engine has no draw rule; `max_turns` is the caller-side cutoff that
/// keeps selector-driven games finite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Stop the match once this many moves have been applied.
    pub max_turns: u32,

    /// Base seed; randomized selectors derive their streams from it.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 127,
            seed: 0,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn cutoff.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
