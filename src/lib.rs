//! # abalone-engine
//!
//! Abalone rules on the 61-cell hexagonal board, built for search and
//! neuroevolution training loops.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The engine validates and applies moves and reports
//!    outcomes. Choosing moves is the caller's job.
//!
//! 2. **Reject Before Mutating**: Every push is fully validated before the
//!    board changes. A rejected move leaves the game untouched.
//!
//! 3. **Cheap Deep Copies**: `Game` owns a dense 61-cell array and a
//!    persistent history, so exploring a hypothetical is a plain `clone`.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, players, moves, errors, RNG, configuration, game state
//! - `board`: Dense grid storage, empty and starting grids
//! - `rules`: Push validation and execution, move enumeration
//! - `nn`: Board features for external models
//! - `selection`: Move selection contract and baseline selectors
//! - `arena`: Match runner

pub mod arena;
pub mod board;
pub mod core;
pub mod nn;
#[cfg(feature = "python")]
pub mod python;
pub mod rules;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{
    Coord2D, Coord3D, Direction,
    Occupant, Player, PlayerMap,
    Move, MoveRecord, PushLine,
    PushError, SnapshotError,
    GameRng, MatchConfig,
    Game,
};

pub use crate::board::Grid;

pub use crate::rules::{plan_push, PushPlan};

pub use crate::nn::{CellOccupancyEncoder, StateEncoder, FEATURE_LEN};

pub use crate::selection::{FirstMoveSelector, MoveSelector, RandomSelector};

pub use crate::arena::{Arena, MatchEnd, MatchError, MatchOutcome, SeriesSummary};
