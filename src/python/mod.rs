//! Python bindings for the Abalone engine.
//!
//! Exposes the game, moves, board features and the match runner so an
//! external trainer can drive games from Python.
//!
//! # Quick Start
//!
//! ```python
//! import abalone_engine as ab
//!
//! game = ab.Game()
//! while not game.is_over() and game.turn < 127:
//!     moves = game.valid_moves()
//!     captured = game.apply_move(moves[0])
//!
//! features = game.features()  # numpy array, 122 floats
//! ```

use pyo3::prelude::*;

mod py_arena;
mod py_core;
mod py_game;
mod py_nn;

pub use py_arena::*;
pub use py_core::*;
pub use py_game::*;
pub use py_nn::*;

/// abalone_engine: Abalone rules for search and neuroevolution training.
///
/// This module provides:
/// - `Game` with move enumeration, validation and application
/// - `Move` push-line moves
/// - Board features for external models
/// - A match runner driving Python callables
#[pymodule]
fn abalone_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyMove>()?;
    m.add_class::<PyGame>()?;

    // Features
    m.add_class::<PyCellOccupancyEncoder>()?;

    // Matches
    m.add_class::<PyMatchOutcome>()?;
    m.add_function(wrap_pyfunction!(play_match, m)?)?;

    m.add("WIN_SCORE", crate::core::WIN_SCORE)?;
    m.add("CELL_COUNT", crate::core::CELL_COUNT)?;
    m.add("FEATURE_LEN", crate::nn::FEATURE_LEN)?;

    Ok(())
}
