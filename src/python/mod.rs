//! Python bindings for the quiz ladder engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_millionaire as rm
//!
//! questions = [
//!     (level, f"Question {level}", ["one", "two", "three", "four"], "a")
//!     for level in range(1, 16)
//! ]
//! service = rm.GameService(questions, seed=42)
//!
//! game = service.start_game(player=1)
//! service.apply_help(1, game.id, "fifty_fifty")
//! service.answer(1, game.id, "a")
//! prize = service.cash_out(1, game.id)
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_service;

pub use py_game::*;
pub use py_service::*;

/// rust_millionaire: rules engine for a quiz ladder game.
#[pymodule]
fn rust_millionaire(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyGameService>()?;

    Ok(())
}
