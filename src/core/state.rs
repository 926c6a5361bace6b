//! Game state.
//!
//! ## Game
//!
//! Complete state of one Abalone game:
//! - Grid occupancy
//! - Captured-marble score per player
//! - Player to move, turn counter, winner
//! - Move history
//!
//! Rules (validation, application, enumeration) live in `crate::rules`; this
//! module owns the data and the invariants tying score to winner.
//!
//! ## Copies
//!
//! `Game::copy` is the exploration primitive. The grid is a fixed array and
//! the score map a fixed pair, so a copy never shares mutable state with its
//! source. History is an `im::Vector`: structurally shared, but persistent,
//! so appending to one game's history never shows up in another's.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::WIN_SCORE;
use super::coord::Coord3D;
use super::error::SnapshotError;
use super::player::{Occupant, Player, PlayerMap};
use crate::board::Grid;

/// One Abalone game.
///
/// Deserializing checks the score invariants, whatever the format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameFields")]
pub struct Game {
    grid: Grid,
    score: PlayerMap<u8>,
    current_player: Player,
    turn: u32,
    winner: Option<Player>,
    history: Vector<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game at the canonical starting position.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player 1
    /// - `turn`: 0
    /// - scores: 0 / 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_grid(Grid::starting())
    }

    /// Create a game on an empty board, for setting up positions by hand.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_grid(Grid::empty())
    }

    /// Create a game from an arbitrary grid, with Player 1 to move.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: PlayerMap::with_value(0),
            current_player: Player::One,
            turn: 0,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Fully independent copy for exploring a move without touching `self`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // === Grid ===

    /// Read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Occupant at `coord`, or `None` if `coord` is off the board.
    #[must_use]
    pub fn get_grid(&self, coord: Coord3D) -> Option<Occupant> {
        self.grid.get(coord)
    }

    /// Place or clear a marble, bypassing the rules.
    ///
    /// Intended for setting up positions. Returns the previous occupant, or
    /// `None` if `coord` is off the board.
    pub fn set_grid(&mut self, coord: Coord3D, occupant: Occupant) -> Option<Occupant> {
        self.grid.set(coord, occupant)
    }

    // === Turn ===

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hand the move to `player`, bypassing turn order. For setup only.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Record an applied move and pass the turn.
    pub(crate) fn finish_move(&mut self, record: MoveRecord) {
        if record.captured {
            self.score[record.player] += 1;
        }
        self.history.push_back(record);
        self.turn += 1;
        self.current_player = self.current_player.opponent();
        self.refresh_winner();
    }

    // === Score ===

    /// Marbles captured by `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u8 {
        self.score[player]
    }

    /// Scores of both players.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u8> {
        &self.score
    }

    /// Overwrite a score, bypassing the rules. For setup only.
    ///
    /// Clamped to the winning score; the winner is updated to match.
    pub fn set_score(&mut self, player: Player, score: u8) {
        self.score[player] = score.min(WIN_SCORE);
        self.refresh_winner();
    }

    // === Outcome ===

    /// Winner, once some player has captured six marbles.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    fn refresh_winner(&mut self) {
        self.winner = Player::ALL
            .into_iter()
            .find(|&p| self.score[p] >= WIN_SCORE);
    }

    // === History ===

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Display ===

    /// Human-readable dump of the board and score, for diagnostics.
    #[must_use]
    pub fn show(&self) -> String {
        format!(
            "turn {} | {} to move | score {}-{}\n{}",
            self.turn,
            self.current_player,
            self.score[Player::One],
            self.score[Player::Two],
            self.grid.show()
        )
    }

    // === Snapshots ===

    /// Encode the game as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Restore a game from [`Game::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

/// Serialized layout of `Game`, validated before it becomes one.
#[derive(Deserialize)]
struct GameFields {
    grid: Grid,
    score: PlayerMap<u8>,
    current_player: Player,
    turn: u32,
    winner: Option<Player>,
    history: Vector<MoveRecord>,
}

impl TryFrom<GameFields> for Game {
    type Error = SnapshotError;

    fn try_from(fields: GameFields) -> Result<Self, Self::Error> {
        for (player, &score) in fields.score.iter() {
            if score > WIN_SCORE {
                return Err(SnapshotError::Corrupt(format!(
                    "{player} has score {score}, above {WIN_SCORE}"
                )));
            }
        }

        let mut game = Game {
            grid: fields.grid,
            score: fields.score,
            current_player: fields.current_player,
            turn: fields.turn,
            winner: None,
            history: fields.history,
        };

        game.refresh_winner();
        if game.winner != fields.winner {
            return Err(SnapshotError::Corrupt(format!(
                "winner {:?} does not match scores {}-{}",
                fields.winner,
                game.score[Player::One],
                game.score[Player::Two]
            )));
        }

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Move};

    fn record(player: Player, captured: bool) -> MoveRecord {
        MoveRecord::new(player, Move::push_line(Coord3D::ORIGIN, Direction::Right), 0, captured)
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();

        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.score(Player::One), 0);
        assert_eq!(game.score(Player::Two), 0);
        assert_eq!(game.winner(), None);
        assert!(!game.is_over());
        assert!(game.history().is_empty());
        assert_eq!(game.grid(), &Grid::starting());
    }

    #[test]
    fn test_set_and_get_grid() {
        let mut game = Game::empty();
        let c = Coord3D::new(0, 1, -1);

        assert_eq!(game.set_grid(c, Occupant::Marble(Player::Two)), Some(Occupant::Empty));
        assert_eq!(game.get_grid(c), Some(Occupant::Marble(Player::Two)));
        assert_eq!(game.get_grid(Coord3D::new(9, -9, 0)), None);
    }

    #[test]
    fn test_finish_move_flips_player_and_counts_turn() {
        let mut game = Game::empty();

        game.finish_move(record(Player::One, false));
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.score(Player::One), 0);

        game.finish_move(record(Player::Two, true));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.score(Player::Two), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_winner_set_only_at_six() {
        let mut game = Game::empty();

        game.set_score(Player::Two, 5);
        assert_eq!(game.winner(), None);

        game.finish_move(record(Player::Two, true));
        assert_eq!(game.score(Player::Two), 6);
        assert_eq!(game.winner(), Some(Player::Two));
        assert!(game.is_over());
    }

    #[test]
    fn test_set_score_clamps_and_resets_winner() {
        let mut game = Game::empty();

        game.set_score(Player::One, 200);
        assert_eq!(game.score(Player::One), 6);
        assert_eq!(game.winner(), Some(Player::One));

        game.set_score(Player::One, 2);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Game::new();
        let mut copy = original.copy();

        copy.set_grid(Coord3D::ORIGIN, Occupant::Marble(Player::Two));
        copy.set_score(Player::Two, 3);
        copy.finish_move(record(Player::Two, false));

        assert_eq!(original.get_grid(Coord3D::ORIGIN), Some(Occupant::Empty));
        assert_eq!(original.score(Player::Two), 0);
        assert_eq!(original.turn(), 0);
        assert!(original.history().is_empty());

        // And the other way round
        original.set_grid(Coord3D::new(1, -1, 0), Occupant::Marble(Player::One));
        assert_eq!(copy.get_grid(Coord3D::new(1, -1, 0)), Some(Occupant::Empty));
    }

    #[test]
    fn test_show_has_header_and_board() {
        let game = Game::new();
        let dump = game.show();

        assert!(dump.starts_with("turn 0 | Player 1 to move | score 0-0\n"));
        assert_eq!(dump.lines().count(), 10);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::new();
        game.set_score(Player::One, 4);
        game.finish_move(record(Player::One, true));

        let bytes = game.to_bytes().unwrap();
        let restored = Game::from_bytes(&bytes).unwrap();

        assert_eq!(game, restored);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            Game::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_inconsistent_winner() {
        let mut game = Game::empty();
        game.winner = Some(Player::One);

        let bytes = game.to_bytes().unwrap();
        let err = Game::from_bytes(&bytes).unwrap_err();

        assert!(matches!(err, SnapshotError::Decode(_)));
        assert!(err.to_string().contains("does not match scores"), "{err}");
    }

    #[test]
    fn test_json_rejects_score_above_six() {
        let mut value = serde_json::to_value(Game::new()).unwrap();
        value["score"]["data"][0] = serde_json::json!(9);

        let err = serde_json::from_value::<Game>(value).unwrap_err();

        assert!(err.to_string().contains("Player 1 has score 9, above 6"), "{err}");
    }

    #[test]
    fn test_json_rejects_winner_without_six() {
        let mut value = serde_json::to_value(Game::new()).unwrap();
        value["winner"] = serde_json::json!("Two");

        assert!(serde_json::from_value::<Game>(value).is_err());
    }

    #[test]
    fn test_json_accepts_finished_game() {
        let mut game = Game::empty();
        game.set_score(Player::Two, 6);

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, game);
        assert_eq!(restored.winner(), Some(Player::Two));
    }
}
