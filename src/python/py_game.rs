//! Game and question bindings for Python.

use pyo3::prelude::*;

use crate::game::Game;

/// Read-only Python view of a game snapshot.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    #[getter]
    fn id(&self) -> u64 {
        self.0.id().raw()
    }

    #[getter]
    fn player(&self) -> u64 {
        self.0.player().raw()
    }

    /// One of "in_progress", "won", "failed", "cashed_out".
    #[getter]
    fn status(&self) -> &'static str {
        self.0.status().as_str()
    }

    #[getter]
    fn current_level(&self) -> u8 {
        self.0.current_level()
    }

    /// Banked prize (0 until the game ends).
    #[getter]
    fn prize(&self) -> u64 {
        self.0.prize()
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    /// Names of the helps already spent.
    fn used_helps(&self) -> Vec<&'static str> {
        self.0.used_helps().iter().map(|k| k.as_str()).collect()
    }

    /// Text of the current question, or None once finished.
    fn question_text(&self) -> Option<String> {
        self.0.current_question().map(|q| q.text().to_string())
    }

    /// Text of the last question answered correctly.
    #[getter]
    fn previous_question_text(&self) -> Option<String> {
        self.0.previous_question().map(|q| q.text().to_string())
    }

    /// `(letter, text)` pairs for the current question.
    fn question_options(&self) -> Vec<(String, String)> {
        self.0
            .current_question()
            .map(|q| {
                q.options()
                    .map(|(key, text)| (key.to_string(), text.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(id={}, status={}, level={}, prize={})",
            self.0.id().raw(),
            self.0.status(),
            self.0.current_level(),
            self.0.prize()
        )
    }
}
