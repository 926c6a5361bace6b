//! Match runner.
//!
//! Drives two move selectors through a game: ask the side to move for a move,
//! hand it to the engine, repeat until someone wins or the turn cutoff is
//! reached. The engine never resolves illegal moves itself; this is the
//! caller-side policy that does:
//!
//! - a selector whose move is rejected (or that gives up) forfeits
//! - a side with no legal move stalls the match, nobody wins
//! - `max_turns` applied moves end the match, nobody wins
//!
//! ## Usage
//!
//! ```
//! use abalone_engine::arena::Arena;
//! use abalone_engine::core::MatchConfig;
//! use abalone_engine::selection::RandomSelector;
//!
//! let arena = Arena::new(MatchConfig::default().with_max_turns(20));
//! let outcome = arena
//!     .play(&mut RandomSelector::new(1), &mut RandomSelector::new(2))
//!     .unwrap();
//! assert!(outcome.turns <= 20);
//! ```

mod outcome;

pub use outcome::{MatchEnd, MatchError, MatchOutcome, SeriesSummary};

use tracing::{debug, info, warn};

use crate::core::{Game, GameRng, MatchConfig, Player};
use crate::selection::{MoveSelector, RandomSelector};

/// Plays matches under a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    config: MatchConfig,
}

impl Arena {
    /// Create an arena.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a match from the starting position. `one` moves first.
    pub fn play(
        &self,
        one: &mut dyn MoveSelector,
        two: &mut dyn MoveSelector,
    ) -> Result<MatchOutcome, MatchError> {
        self.play_from(Game::new(), one, two)
    }

    /// Play a match from an arbitrary position.
    pub fn play_from(
        &self,
        mut game: Game,
        one: &mut dyn MoveSelector,
        two: &mut dyn MoveSelector,
    ) -> Result<MatchOutcome, MatchError> {
        let end = loop {
            if game.is_over() {
                break MatchEnd::Won;
            }
            if game.turn() >= self.config.max_turns {
                break MatchEnd::TurnLimit;
            }

            let player = game.current_player();
            let moves = game.valid_moves();
            if moves.is_empty() {
                debug!(%player, turn = game.turn(), "no legal move");
                break MatchEnd::Stalled;
            }

            let selector: &mut dyn MoveSelector = match player {
                Player::One => &mut *one,
                Player::Two => &mut *two,
            };

            let Some(mv) = selector.select(&game, &moves) else {
                warn!(%player, turn = game.turn(), "selector gave up");
                break MatchEnd::Forfeit(player);
            };

            match game.apply_move(&mv) {
                Ok(_) => {}
                Err(err) if err.is_fatal() => {
                    return Err(MatchError::Engine {
                        turn: game.turn(),
                        source: err,
                    });
                }
                Err(err) => {
                    warn!(%player, %mv, %err, turn = game.turn(), "illegal move, forfeit");
                    break MatchEnd::Forfeit(player);
                }
            }
        };

        let outcome = MatchOutcome::new(&game, end);
        info!(
            winner = ?outcome.winner,
            end = ?outcome.end,
            turns = outcome.turns,
            score_one = outcome.scores[Player::One],
            score_two = outcome.scores[Player::Two],
            "match finished"
        );

        Ok(outcome)
    }

    /// Play `games` matches of `selector` (as player 1) against uniform
    /// random opponents.
    ///
    /// Opponent streams are forked from the configured seed, so a series is
    /// reproducible.
    pub fn series_against_random(
        &self,
        games: u32,
        selector: &mut dyn MoveSelector,
    ) -> Result<SeriesSummary, MatchError> {
        let mut rng = GameRng::new(self.config.seed);
        let mut summary = SeriesSummary::default();

        for _ in 0..games {
            let mut opponent = RandomSelector::from_rng(rng.fork());
            let outcome = self.play(selector, &mut opponent)?;
            summary.record(&outcome, Player::One);
        }

        Ok(summary)
    }
}
