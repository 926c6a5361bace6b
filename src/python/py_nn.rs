//! Feature bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::nn::{CellOccupancyEncoder, StateEncoder, FEATURE_LEN};

use super::py_game::PyGame;

/// Board features as float32 arrays, two indicators per cell.
#[pyclass(name = "CellOccupancyEncoder")]
#[derive(Clone, Default)]
pub struct PyCellOccupancyEncoder;

#[pymethods]
impl PyCellOccupancyEncoder {
    #[new]
    fn new() -> Self {
        Self
    }

    /// Values per game (122).
    #[getter]
    fn feature_len(&self) -> usize {
        FEATURE_LEN
    }

    /// Features of one game, shape `(122,)`.
    fn encode<'py>(&self, py: Python<'py>, game: &PyGame) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, CellOccupancyEncoder.encode(&game.0))
    }

    /// Features of many games, shape `(len(games), 122)`.
    fn encode_batch<'py>(
        &self,
        py: Python<'py>,
        games: Vec<PyRef<'py, PyGame>>,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let mut batch = vec![0.0; games.len() * FEATURE_LEN];
        for (game, row) in games.iter().zip(batch.chunks_exact_mut(FEATURE_LEN)) {
            CellOccupancyEncoder.encode_into(&game.0, row);
        }
        PyArray1::from_vec_bound(py, batch).reshape([games.len(), FEATURE_LEN])
    }

    fn __repr__(&self) -> String {
        format!("CellOccupancyEncoder(feature_len={FEATURE_LEN})")
    }
}
