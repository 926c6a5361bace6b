//! Error types.
//!
//! `PushError` covers every way a push can be refused. All variants except
//! `DestinationOccupied` are ordinary rule violations: the game is left
//! untouched and the caller decides what an illegal move costs.

use thiserror::Error;

use super::coord::Coord3D;
use super::player::Player;

/// Reason a push was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PushError {
    /// Origin is not one of the 61 board cells.
    #[error("invalid coordinate {0}")]
    InvalidCoordinate(Coord3D),

    /// Origin does not hold a marble of the player to move.
    #[error("not your marble at {at} ({player} to move)")]
    NotYourMarble { at: Coord3D, player: Player },

    #[error("no marble to push")]
    NoMarbleToPush,

    #[error("too many marbles to push (max {max}, got {got})")]
    TooManyMarbles { max: usize, got: usize },

    #[error("too many enemy marbles to push (max {max}, got {got})")]
    TooManyEnemyMarbles { max: usize, got: usize },

    /// The pushing run does not strictly outnumber the enemy run.
    #[error("not enough marbles to push enemy (got {got}, need {need})")]
    NotEnoughMarbles { got: usize, need: usize },

    /// An own marble sits behind enemy marbles in the pushed line.
    #[error("my marbles are sandwiching enemy marbles")]
    Sandwich,

    #[error("cannot push its own marbles out of the hexagon")]
    SelfElimination,

    /// The game already has a winner.
    #[error("game is over, {0} won")]
    GameOver(Player),

    /// Executor found a marble where validation promised an empty cell.
    #[error("destination {0} is already occupied")]
    DestinationOccupied(Coord3D),
}

impl PushError {
    /// Whether this error signals an engine bug rather than an illegal move.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, PushError::DestinationOccupied(_))
    }
}

/// Failure saving or restoring a game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),

    /// Decoded state breaks a board invariant.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}
