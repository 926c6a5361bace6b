//! Board features for external evaluators.
//!
//! Transforms a game into the flat `f32` vector an external learner reads.
//! Encoders write into a caller-provided buffer so a trainer can fill one row
//! of a batch per game without intermediate allocations.

use crate::core::{Game, Player, CELL_COUNT};

/// Indicators per board cell.
pub const FEATURES_PER_CELL: usize = 2;

/// Length of a [`CellOccupancyEncoder`] vector.
pub const FEATURE_LEN: usize = CELL_COUNT * FEATURES_PER_CELL;

/// Encodes a game into a flat feature vector.
pub trait StateEncoder: Send + Sync {
    /// Number of values written per game.
    fn feature_len(&self) -> usize;

    /// Write the features of `game` into `out`.
    ///
    /// # Panics
    ///
    /// If `out.len() != self.feature_len()`.
    fn encode_into(&self, game: &Game, out: &mut [f32]);

    /// Encode into a fresh vector.
    fn encode(&self, game: &Game) -> Vec<f32> {
        let mut out = vec![0.0; self.feature_len()];
        self.encode_into(game, &mut out);
        out
    }
}

/// Two indicator features per board cell.
///
/// Cells are read in 2D row-major order (`y` from -4 to 4, then `x` from -4
/// to 4, skipping coordinates off the board). Each cell contributes
/// `[occupied by player 1, occupied by player 2]`, so the output has
/// `61 * 2 = 122` values, each 0.0 or 1.0.
///
/// ```
/// use abalone_engine::core::Game;
/// use abalone_engine::nn::{CellOccupancyEncoder, StateEncoder, FEATURE_LEN};
///
/// let features = CellOccupancyEncoder.encode(&Game::new());
/// assert_eq!(features.len(), FEATURE_LEN);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CellOccupancyEncoder;

impl StateEncoder for CellOccupancyEncoder {
    fn feature_len(&self) -> usize {
        FEATURE_LEN
    }

    fn encode_into(&self, game: &Game, out: &mut [f32]) {
        assert_eq!(out.len(), FEATURE_LEN, "feature buffer has the wrong length");

        // Grid iteration is already 2D row-major
        let cells = out.chunks_exact_mut(FEATURES_PER_CELL);
        for ((_, occupant), cell) in game.grid().iter().zip(cells) {
            let owner = occupant.owner();
            cell[0] = if owner == Some(Player::One) { 1.0 } else { 0.0 };
            cell[1] = if owner == Some(Player::Two) { 1.0 } else { 0.0 };
        }
    }
}
