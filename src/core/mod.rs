//! Core engine types: coordinates, directions, players, moves, errors,
//! RNG, configuration and game state.
//!
//! Everything here is plain data plus invariants. The rules that move
//! marbles around live in `crate::rules`.

pub mod action;
pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord, PushLine};
pub use config::{MatchConfig, CELL_COUNT, MARBLES_PER_PLAYER, MAX_ENEMY_LINE, MAX_PUSH_LINE, WIN_SCORE};
pub use coord::{Coord2D, Coord3D, BOARD_RADIUS};
pub use direction::Direction;
pub use error::{PushError, SnapshotError};
pub use player::{Occupant, Player, PlayerMap};
pub use rng::GameRng;
pub use state::Game;
