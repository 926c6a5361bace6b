//! Move selection contract.
//!
//! A `MoveSelector` is whatever picks the next move: an evolved network, a
//! search, a human, a test script. The engine only hands it the game and the
//! list from [`Game::valid_moves`], then validates whatever comes back.
//!
//! Two baselines live here for matches and tests:
//! - `RandomSelector`: uniform over the legal list, seeded
//! - `FirstMoveSelector`: first move in canonical order

use crate::core::{Game, GameRng, Move};

/// Picks one move for the player to move.
pub trait MoveSelector {
    /// Choose a move.
    ///
    /// `moves` is the engine's legal list for `game`, in canonical order.
    /// Returning `None` means the selector gives up. Returning a move not in
    /// `moves` is allowed, but the engine will reject it.
    fn select(&mut self, game: &Game, moves: &[Move]) -> Option<Move>;
}

impl<F> MoveSelector for F
where
    F: FnMut(&Game, &[Move]) -> Option<Move>,
{
    fn select(&mut self, game: &Game, moves: &[Move]) -> Option<Move> {
        self(game, moves)
    }
}

/// Uniform random choice among legal moves.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    /// Create a selector with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a selector drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, _game: &Game, moves: &[Move]) -> Option<Move> {
        self.rng.choose(moves).copied()
    }
}

/// Always plays the first legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveSelector;

impl MoveSelector for FirstMoveSelector {
    fn select(&mut self, _game: &Game, moves: &[Move]) -> Option<Move> {
        moves.first().copied()
    }
}
