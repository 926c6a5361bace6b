//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Coord3D, Direction, Move, Player};

/// Parse a player number (1 or 2).
pub(crate) fn player_from_py(number: u8) -> PyResult<Player> {
    Player::from_number(number)
        .ok_or_else(|| PyValueError::new_err(format!("invalid player {number}, expected 1 or 2")))
}

/// Python wrapper for a push-line move.
///
/// Directions are numbered in cyclic order: 0 TopRight, 1 Right,
/// 2 BottomRight, 3 BottomLeft, 4 Left, 5 TopLeft.
#[pyclass(name = "Move")]
#[derive(Clone, Copy, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Create a push-line move from a cube coordinate and a direction index.
    #[new]
    fn new(x: i32, y: i32, z: i32, direction: usize) -> PyResult<Self> {
        let direction = Direction::from_index(direction).ok_or_else(|| {
            PyValueError::new_err(format!("invalid direction {direction}, expected 0..6"))
        })?;
        Ok(Self(Move::push_line(Coord3D::new(x, y, z), direction)))
    }

    /// Origin cell as an `(x, y, z)` tuple.
    #[getter]
    fn origin(&self) -> (i32, i32, i32) {
        let c = self.0.origin();
        (c.x, c.y, c.z)
    }

    /// Direction index.
    #[getter]
    fn direction(&self) -> usize {
        self.0.direction().index()
    }

    fn __repr__(&self) -> String {
        let c = self.0.origin();
        format!("Move(({}, {}, {}), {})", c.x, c.y, c.z, self.0.direction())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
