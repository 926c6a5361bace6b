//! Move representation.
//!
//! A `Move` is a tagged value. The engine currently knows one kind, the push
//! line: shove a run of marbles one step from an origin cell along a
//! direction. Callers treat moves as opaque values obtained from move
//! enumeration and handed back to the engine, so new kinds can be added
//! without changing that contract.

use serde::{Deserialize, Serialize};

use super::coord::Coord3D;
use super::direction::Direction;
use super::player::Player;

/// Push the line of marbles starting at `from` one step along `direction`.
///
/// Plain data: legality is decided by the rules, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PushLine {
    pub from: Coord3D,
    pub direction: Direction,
}

impl PushLine {
    #[must_use]
    pub const fn new(from: Coord3D, direction: Direction) -> Self {
        Self { from, direction }
    }
}

impl std::fmt::Display for PushLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PushLine from {} towards {}", self.from, self.direction)
    }
}

/// A complete game move.
///
/// ## Example
///
/// ```
/// use abalone_engine::core::{Coord3D, Direction, Move};
///
/// let mv = Move::push_line(Coord3D::ORIGIN, Direction::Right);
/// assert_eq!(mv.origin(), Coord3D::ORIGIN);
/// assert_eq!(mv.direction(), Direction::Right);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    PushLine(PushLine),
}

impl Move {
    /// Shorthand for a push-line move.
    #[must_use]
    pub const fn push_line(from: Coord3D, direction: Direction) -> Self {
        Move::PushLine(PushLine::new(from, direction))
    }

    /// Cell the move starts from.
    #[must_use]
    pub const fn origin(&self) -> Coord3D {
        match self {
            Move::PushLine(p) => p.from,
        }
    }

    /// Direction the move travels in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Move::PushLine(p) => p.direction,
        }
    }

    /// Key of the canonical move order: 2D row, 2D column, direction index.
    #[must_use]
    pub fn sort_key(&self) -> (i32, i32, usize) {
        let origin = self.origin().to_2d();
        (origin.y, origin.x, self.direction().index())
    }
}

impl From<PushLine> for Move {
    fn from(push: PushLine) -> Self {
        Move::PushLine(push)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::PushLine(p) => p.fmt(f),
        }
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for replay/debugging and for reconstructing training games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move applied.
    pub mv: Move,

    /// Turn counter before the move was applied.
    pub turn: u32,

    /// Whether an enemy marble was pushed off the board.
    pub captured: bool,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, mv: Move, turn: u32, captured: bool) -> Self {
        Self {
            player,
            mv,
            turn,
            captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_line_accessors() {
        let from = Coord3D::new(1, -1, 0);
        let mv = Move::push_line(from, Direction::TopLeft);

        assert_eq!(mv.origin(), from);
        assert_eq!(mv.direction(), Direction::TopLeft);
        assert_eq!(Move::from(PushLine::new(from, Direction::TopLeft)), mv);
    }

    #[test]
    fn test_sort_key() {
        let mv = Move::push_line(Coord3D::new(1, -3, 2), Direction::Left);
        assert_eq!(mv.sort_key(), (2, 1, 4));
    }

    #[test]
    fn test_display() {
        let mv = Move::push_line(Coord3D::ORIGIN, Direction::Right);
        assert_eq!(format!("{}", mv), "PushLine from (0, 0, 0) towards Right");
    }

    #[test]
    fn test_move_record() {
        let mv = Move::push_line(Coord3D::ORIGIN, Direction::Right);
        let record = MoveRecord::new(Player::Two, mv, 7, true);

        assert_eq!(record.player, Player::Two);
        assert_eq!(record.mv, mv);
        assert_eq!(record.turn, 7);
        assert!(record.captured);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::push_line(Coord3D::new(-2, 2, 0), Direction::BottomRight);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
