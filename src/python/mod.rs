//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import kalah
//!
//! repo = kalah.GameRepository()
//! game = repo.create()
//! report = repo.apply_move(game["id"], 1)
//!
//! # Or drive an engine directly
//! board = kalah.Kalah()
//! board.take_turn(0)
//! print(board.observation())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// kalah: six-pit Kalah engine and in-memory game repository.
#[pymodule]
fn kalah(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyKalah>()?;
    m.add_class::<PyGameRepository>()?;
    Ok(())
}
