//! Match runner bindings for Python.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use tracing::warn;

use crate::arena::{Arena, MatchEnd, MatchOutcome};
use crate::core::{Game, GameRng, MatchConfig, Move};
use crate::selection::{MoveSelector, RandomSelector};

use super::py_core::{player_from_py, PyMove};
use super::py_game::PyGame;

/// Selector backed by a Python callable `(game, moves) -> Move | None`.
///
/// A callable that raises or returns something other than a `Move` gives up
/// the match.
struct PyCallableSelector<'py> {
    callback: Bound<'py, PyAny>,
}

impl MoveSelector for PyCallableSelector<'_> {
    fn select(&mut self, game: &Game, moves: &[Move]) -> Option<Move> {
        let py_moves: Vec<PyMove> = moves.iter().copied().map(PyMove).collect();
        let result = match self.callback.call1((PyGame(game.clone()), py_moves)) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "selector callback failed");
                return None;
            }
        };
        match result.extract::<Option<PyMove>>() {
            Ok(mv) => mv.map(|m| m.0),
            Err(e) => {
                warn!(error = %e, "selector callback returned a non-move");
                None
            }
        }
    }
}

/// Result of a match played through `play_match`.
#[pyclass(name = "MatchOutcome")]
#[derive(Clone, Debug)]
pub struct PyMatchOutcome(pub MatchOutcome);

#[pymethods]
impl PyMatchOutcome {
    /// Winning player number, or None.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.0.winner.map(|p| p.number())
    }

    /// One of "won", "forfeit", "turn_limit", "stalled".
    #[getter]
    fn end(&self) -> &'static str {
        match self.0.end {
            MatchEnd::Won => "won",
            MatchEnd::Forfeit(_) => "forfeit",
            MatchEnd::TurnLimit => "turn_limit",
            MatchEnd::Stalled => "stalled",
        }
    }

    #[getter]
    fn turns(&self) -> u32 {
        self.0.turns
    }

    /// Captures as `(player 1, player 2)`.
    #[getter]
    fn scores(&self) -> (u8, u8) {
        (
            self.0.scores[crate::core::Player::One],
            self.0.scores[crate::core::Player::Two],
        )
    }

    /// Captures by `player` minus captures by the opponent.
    fn score_diff(&self, player: u8) -> PyResult<i32> {
        Ok(self.0.score_diff(player_from_py(player)?))
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchOutcome(winner={:?}, end={}, turns={}, scores={:?})",
            self.winner(),
            self.end(),
            self.0.turns,
            self.scores()
        )
    }
}

/// Play a match from the starting position.
///
/// `one` and `two` are callables `(game, moves) -> Move | None`; `None` in
/// their place plays uniformly random moves seeded from `seed`.
#[pyfunction]
#[pyo3(signature = (one = None, two = None, max_turns = 127, seed = 0))]
pub fn play_match<'py>(
    one: Option<Bound<'py, PyAny>>,
    two: Option<Bound<'py, PyAny>>,
    max_turns: u32,
    seed: u64,
) -> PyResult<PyMatchOutcome> {
    let config = MatchConfig::new().with_max_turns(max_turns).with_seed(seed);
    let mut rng = GameRng::new(seed);

    let mut one = side(one, &mut rng);
    let mut two = side(two, &mut rng);

    Arena::new(config)
        .play(one.as_mut(), two.as_mut())
        .map(PyMatchOutcome)
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

fn side<'py>(callback: Option<Bound<'py, PyAny>>, rng: &mut GameRng) -> Box<dyn MoveSelector + 'py> {
    match callback {
        Some(callback) => Box::new(PyCallableSelector { callback }),
        None => Box::new(RandomSelector::from_rng(rng.fork())),
    }
}
