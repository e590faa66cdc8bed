//! Engine and repository bindings for Python.

use std::collections::BTreeMap;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use crate::core::{GameConfig, DEFAULT_BASE_URL, DEFAULT_SEEDS_PER_PIT, MAX_SEEDS_PER_PIT};
use crate::repository::{GameId, GameRepository, GameView, InMemoryRepository, MoveReport};
use crate::rules::Kalah;

use super::py_core::PyPlayer;

/// Python wrapper for the Kalah engine.
#[pyclass(name = "Kalah")]
#[derive(Clone)]
pub struct PyKalah(pub Kalah);

#[pymethods]
impl PyKalah {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seeds_per_pit: Seeds placed in each sowing pit
    #[new]
    #[pyo3(signature = (seeds_per_pit = DEFAULT_SEEDS_PER_PIT))]
    fn new(seeds_per_pit: u32) -> PyResult<Self> {
        check_seeds(seeds_per_pit)?;
        let config = GameConfig::new().with_seeds_per_pit(seeds_per_pit);
        Ok(Self(Kalah::with_config(&config)))
    }

    /// Check a 0-based pit index for the current player.
    fn is_valid_selection(&self, pit_index: isize) -> bool {
        self.0.is_valid_selection(pit_index)
    }

    /// Pit indices the current player may sow from.
    fn legal_moves(&self) -> Vec<usize> {
        self.0.legal_moves().into_vec()
    }

    /// Sow from a 0-based pit index.
    ///
    /// Returns the index that received the last seed.
    fn take_turn(&mut self, pit_index: usize) -> PyResult<usize> {
        Ok(self.0.take_turn(pit_index)?.last_pit)
    }

    /// Pit number (1-14) to seed count.
    fn status(&self) -> BTreeMap<u8, u32> {
        self.0.status().iter().collect()
    }

    /// Detect the end of the game, sweeping the board when it is over.
    fn check_game_over(&mut self) -> bool {
        self.0.check_game_over()
    }

    /// Winning player number, 0 for a draw.
    fn calculate_winner(&self) -> u8 {
        self.0.calculate_winner().code()
    }

    /// Player to move.
    #[getter]
    fn turn(&self) -> PyPlayer {
        PyPlayer(self.0.turn())
    }

    /// Raw pit array (indices 0-13) as a numpy vector.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.0.board().pits())
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __getstate__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.to_bytes()?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __setstate__(&mut self, state: &[u8]) -> PyResult<()> {
        self.0 = Kalah::from_bytes(state)?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!("Kalah(turn={}, phase={:?})", self.0.turn().number(), self.0.phase())
    }

    fn __str__(&self) -> String {
        self.0.board().to_string()
    }
}

/// Python wrapper for the in-memory game repository.
#[pyclass(name = "GameRepository")]
pub struct PyGameRepository(InMemoryRepository);

#[pymethods]
impl PyGameRepository {
    #[new]
    #[pyo3(signature = (seeds_per_pit = DEFAULT_SEEDS_PER_PIT, base_url = DEFAULT_BASE_URL.to_string()))]
    fn new(seeds_per_pit: u32, base_url: String) -> PyResult<Self> {
        check_seeds(seeds_per_pit)?;
        let config = GameConfig::new()
            .with_seeds_per_pit(seeds_per_pit)
            .with_base_url(base_url);
        Ok(Self(InMemoryRepository::new(config)))
    }

    /// Seeds each new game starts with per pit.
    #[getter]
    fn seeds_per_pit(&self) -> u32 {
        self.0.config().seeds_per_pit
    }

    /// Prefix of each game's display handle.
    #[getter]
    fn base_url(&self) -> String {
        self.0.config().base_url.clone()
    }

    /// Create a game; returns `{"id", "uri", "status"}`.
    fn create<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let view = py.allow_threads(|| self.0.create());
        view_dict(py, &view)
    }

    /// Play a 1-based pit number in game `id`.
    fn apply_move<'py>(&self, py: Python<'py>, id: u64, pit: i64) -> PyResult<Bound<'py, PyDict>> {
        let report = py.allow_threads(|| self.0.apply_move(GameId(id), pit))?;
        report_dict(py, &report)
    }

    /// Current view of game `id`.
    fn status<'py>(&self, py: Python<'py>, id: u64) -> PyResult<Bound<'py, PyDict>> {
        let view = py.allow_threads(|| self.0.status(GameId(id)))?;
        view_dict(py, &view)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }
}

fn check_seeds(seeds_per_pit: u32) -> PyResult<()> {
    if (1..=MAX_SEEDS_PER_PIT).contains(&seeds_per_pit) {
        Ok(())
    } else {
        Err(PyValueError::new_err(format!(
            "seeds_per_pit must be between 1 and {}",
            MAX_SEEDS_PER_PIT
        )))
    }
}

fn view_dict<'py>(py: Python<'py>, view: &GameView) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", view.id.raw())?;
    dict.set_item("uri", &view.uri)?;
    dict.set_item("status", view.status.iter().collect::<BTreeMap<u8, u32>>())?;
    Ok(dict)
}

fn report_dict<'py>(py: Python<'py>, report: &MoveReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = view_dict(py, &report.game)?;
    dict.set_item("game_over", report.game_over)?;
    dict.set_item("winner", report.winner.map(|result| result.code()))?;
    Ok(dict)
}
