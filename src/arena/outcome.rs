//! Match results.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Game, MoveRecord, Player, PlayerMap, PushError};

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// A player reached the winning score.
    Won,
    /// This player submitted an illegal move or gave up.
    Forfeit(Player),
    /// The turn cutoff was reached.
    TurnLimit,
    /// The player to move had no legal move.
    Stalled,
}

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Winner, by score or by the opponent's forfeit.
    pub winner: Option<Player>,

    pub end: MatchEnd,

    /// Marbles captured by each player.
    pub scores: PlayerMap<u8>,

    /// Moves applied.
    pub turns: u32,

    /// Every applied move, oldest first.
    pub history: Vector<MoveRecord>,
}

impl MatchOutcome {
    pub(crate) fn new(game: &Game, end: MatchEnd) -> Self {
        let winner = match end {
            MatchEnd::Forfeit(loser) => Some(loser.opponent()),
            _ => game.winner(),
        };

        Self {
            winner,
            end,
            scores: game.scores().clone(),
            turns: game.turn(),
            history: game.history().clone(),
        }
    }

    /// Captures by `player` minus captures by the opponent.
    #[must_use]
    pub fn score_diff(&self, player: Player) -> i32 {
        i32::from(self.scores[player]) - i32::from(self.scores[player.opponent()])
    }
}

/// Aggregate over a series of matches, from one player's point of view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub forfeits: u32,
    /// Marbles captured by the player, summed over all games.
    pub captured: u32,
    /// Marbles lost by the player, summed over all games.
    pub conceded: u32,
}

impl SeriesSummary {
    pub(crate) fn record(&mut self, outcome: &MatchOutcome, player: Player) {
        self.games += 1;
        match outcome.winner {
            Some(p) if p == player => self.wins += 1,
            Some(_) => self.losses += 1,
            None => {}
        }
        if outcome.end == MatchEnd::Forfeit(player) {
            self.forfeits += 1;
        }
        self.captured += u32::from(outcome.scores[player]);
        self.conceded += u32::from(outcome.scores[player.opponent()]);
    }

    /// Average capture difference per game, in `[-6, 6]`.
    #[must_use]
    pub fn mean_score_diff(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (f64::from(self.captured) - f64::from(self.conceded)) / f64::from(self.games)
    }
}

/// Failure that stops a match: the engine contradicted itself.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("engine inconsistency on turn {turn}: {source}")]
    Engine {
        turn: u32,
        #[source]
        source: PushError,
    },
}
