//! Rules entry points on `Game`: move enumeration and application.
//!
//! ## Implementation Notes
//!
//! - `valid_moves` is deterministic: same position, same list, same order
//! - `apply_move` either applies the whole move or leaves the game untouched
//! - Illegal moves are reported, never resolved; forfeits and penalties are
//!   the caller's business

use tracing::{debug, trace};

use crate::core::{Coord3D, Direction, Game, Move, MoveRecord, PushError, PushLine};

use super::push::{execute_push, plan_push, PushPlan};

impl Game {
    /// Enumerate every legal move for the player to move.
    ///
    /// Moves are ordered by origin row (2D `y`), then origin column (2D `x`),
    /// then direction in cyclic order. A finished game has no moves.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        let player = self.current_player();
        let mut moves: Vec<Move> = self
            .grid()
            .cells_of(player)
            .flat_map(|from| Direction::ALL.into_iter().map(move |d| PushLine::new(from, d)))
            .filter(|&push| plan_push(self, push).is_ok())
            .map(Move::PushLine)
            .collect();

        moves.sort_by_key(Move::sort_key);
        moves
    }

    /// Check a move without applying it.
    pub fn validate(&self, mv: &Move) -> Result<PushPlan, PushError> {
        match *mv {
            Move::PushLine(push) => plan_push(self, push),
        }
    }

    /// Whether `mv` would be accepted by [`Game::apply_move`].
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Apply a move for the player to move.
    ///
    /// Returns whether an enemy marble was captured. On error the game is
    /// unchanged.
    pub fn apply_move(&mut self, mv: &Move) -> Result<bool, PushError> {
        let plan = self.validate(mv).inspect_err(|err| {
            debug!(%mv, player = %self.current_player(), %err, "rejected move");
        })?;

        let mut grid = self.grid().clone();
        let captured = execute_push(&mut grid, &plan)? > 0;

        trace!(%mv, player = %plan.player, moved = plan.len(), captured, "applied move");

        self.replace_grid(grid);
        self.finish_move(MoveRecord::new(plan.player, *mv, self.turn(), captured));

        if let Some(winner) = self.winner() {
            debug!(%winner, turn = self.turn(), "game won");
        }

        Ok(captured)
    }

    /// Push the line starting at `from` one step along `direction`.
    pub fn push(&mut self, from: Coord3D, direction: Direction) -> Result<bool, PushError> {
        self.apply_move(&Move::push_line(from, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Occupant, Player};

    #[test]
    fn test_opening_move_count() {
        // Each side has the same mobility from the symmetric opening
        let mut game = Game::new();
        let first = game.valid_moves();
        assert!(!first.is_empty());

        game.set_current_player(Player::Two);
        assert_eq!(game.valid_moves().len(), first.len());
    }

    #[test]
    fn test_valid_moves_are_all_legal_and_sorted() {
        let game = Game::new();
        let moves = game.valid_moves();

        assert!(moves.iter().all(|m| game.is_legal(m)));

        let keys: Vec<_> = moves.iter().map(Move::sort_key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_apply_move_records_history() {
        let mut game = Game::new();
        let mv = game.valid_moves()[0];

        assert_eq!(game.apply_move(&mv), Ok(false));

        let record = game.history()[0];
        assert_eq!(record.player, Player::One);
        assert_eq!(record.mv, mv);
        assert_eq!(record.turn, 0);
        assert!(!record.captured);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.copy();

        // Player 2's marble
        let err = game.push(Coord3D::new(0, 4, -4), Direction::BottomLeft);
        assert!(matches!(err, Err(PushError::NotYourMarble { .. })));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_when_over() {
        let mut game = Game::empty();
        game.set_grid(Coord3D::ORIGIN, Occupant::Marble(Player::One));
        game.set_score(Player::One, 6);

        assert!(game.valid_moves().is_empty());
        assert_eq!(
            game.push(Coord3D::ORIGIN, Direction::Right),
            Err(PushError::GameOver(Player::One))
        );
    }
}
