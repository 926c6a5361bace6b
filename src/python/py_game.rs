//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Coord3D, Game, Occupant};
use crate::nn::{CellOccupancyEncoder, StateEncoder};

use super::py_core::{player_from_py, PyMove};

/// Python wrapper for an Abalone game.
///
/// Illegal moves raise `ValueError` and leave the game unchanged.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a game at the starting position, player 1 to move.
    #[new]
    fn new() -> Self {
        Self(Game::new())
    }

    /// Create a game on an empty board.
    #[staticmethod]
    fn empty() -> Self {
        Self(Game::empty())
    }

    /// Legal moves for the player to move, in canonical order.
    fn valid_moves(&self) -> Vec<PyMove> {
        self.0.valid_moves().into_iter().map(PyMove).collect()
    }

    /// Apply a move. Returns whether a marble was captured.
    fn apply_move(&mut self, mv: &PyMove) -> PyResult<bool> {
        self.0
            .apply_move(&mv.0)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Check whether a move is legal without applying it.
    fn is_legal(&self, mv: &PyMove) -> bool {
        self.0.is_legal(&mv.0)
    }

    fn is_over(&self) -> bool {
        self.0.is_over()
    }

    /// Winning player number, or None.
    fn winner(&self) -> Option<u8> {
        self.0.winner().map(|p| p.number())
    }

    /// Marbles captured by `player`.
    fn score(&self, player: u8) -> PyResult<u8> {
        Ok(self.0.score(player_from_py(player)?))
    }

    /// Player number to move.
    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player().number()
    }

    /// Number of moves applied.
    #[getter]
    fn turn(&self) -> u32 {
        self.0.turn()
    }

    /// Occupant at a cell: 0 empty, 1 or 2 for a marble, None off the board.
    fn get_grid(&self, x: i32, y: i32, z: i32) -> Option<u8> {
        self.0.get_grid(Coord3D::new(x, y, z)).map(Occupant::number)
    }

    /// Place an occupant (0, 1 or 2) on a cell. For setting up positions.
    fn set_grid(&mut self, x: i32, y: i32, z: i32, occupant: u8) -> PyResult<()> {
        let occupant = Occupant::from_number(occupant)
            .ok_or_else(|| PyValueError::new_err(format!("invalid occupant {occupant}")))?;
        let coord = Coord3D::new(x, y, z);
        self.0
            .set_grid(coord, occupant)
            .map(|_| ())
            .ok_or_else(|| PyValueError::new_err(format!("invalid coordinate {coord}")))
    }

    /// Board features as a flat float32 array (122 values).
    fn features<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, CellOccupancyEncoder.encode(&self.0))
    }

    /// Independent deep copy.
    fn copy(&self) -> Self {
        Self(self.0.copy())
    }

    fn __copy__(&self) -> Self {
        self.copy()
    }

    /// Text dump of the board.
    fn show(&self) -> String {
        self.0.show()
    }

    /// Serialize to a binary snapshot.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .0
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Restore from a binary snapshot.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Game::from_bytes(bytes)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let status = match self.0.winner() {
            Some(p) => format!("won by {p}"),
            None => "ongoing".to_string(),
        };
        format!(
            "Game(turn={}, to_move={}, score={}-{}, status={})",
            self.0.turn(),
            self.0.current_player().number(),
            self.0.score(crate::core::Player::One),
            self.0.score(crate::core::Player::Two),
            status
        )
    }
}
