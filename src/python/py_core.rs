//! Core type bindings for Python.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::Player;
use crate::error::{MoveError, RepositoryError, SnapshotError};

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its number (1 or 2).
    #[new]
    fn new(number: u8) -> PyResult<Self> {
        match number {
            1 => Ok(Self(Player::One)),
            2 => Ok(Self(Player::Two)),
            _ => Err(PyValueError::new_err(format!("no player {}", number))),
        }
    }

    /// Player number (1 or 2).
    #[getter]
    fn number(&self) -> u8 {
        self.0.number()
    }

    /// Board index of this player's store.
    fn store(&self) -> usize {
        self.0.store()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player({})", self.0.number())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.number())
    }
}

impl From<MoveError> for PyErr {
    fn from(err: MoveError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<RepositoryError> for PyErr {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => PyKeyError::new_err(err.to_string()),
            RepositoryError::InvalidMove { .. } => PyValueError::new_err(err.to_string()),
        }
    }
}

impl From<SnapshotError> for PyErr {
    fn from(err: SnapshotError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
