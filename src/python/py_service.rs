//! Service bindings for Python.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, GameId, GameRng, PlayerId};
use crate::questions::{InMemoryPool, OptionKey, Question};
use crate::repository::{InMemoryLedger, InMemoryRepository};
use crate::service::{GameService, ServiceError};

use super::py_game::PyGame;

fn to_py_err(err: ServiceError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for GameService over in-memory storage.
#[pyclass(name = "GameService")]
pub struct PyGameService {
    inner: GameService,
}

#[pymethods]
impl PyGameService {
    /// Create a service with the classic ladder.
    ///
    /// # Arguments
    /// - questions: list of `(level, text, [a, b, c, d], correct_letter)`
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (questions, seed = 42))]
    fn new(questions: Vec<(u8, String, Vec<String>, String)>, seed: u64) -> PyResult<Self> {
        let mut pool = InMemoryPool::new();
        for (level, text, options, correct) in questions {
            let options: [String; 4] = options
                .try_into()
                .map_err(|_| PyValueError::new_err("each question needs exactly four options"))?;
            let correct = OptionKey::from_letter(&correct)
                .ok_or_else(|| PyValueError::new_err(format!("invalid correct option: {:?}", correct)))?;
            let question = Question::new(level, text, options, correct)
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
            pool.add(question);
        }

        let inner = GameService::new(
            Arc::new(EngineConfig::new()),
            GameRng::new(seed),
            Arc::new(pool),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryLedger::new()),
        );
        Ok(Self { inner })
    }

    fn start_game(&self, player: u64) -> PyResult<PyGame> {
        self.inner
            .start_game(PlayerId::new(player))
            .map(PyGame)
            .map_err(to_py_err)
    }

    fn game(&self, player: u64, game_id: u64) -> PyResult<PyGame> {
        self.inner
            .game(PlayerId::new(player), GameId::new(game_id))
            .map(PyGame)
            .map_err(to_py_err)
    }

    /// Answer with a letter. Returns whether the answer was correct.
    fn answer(&self, player: u64, game_id: u64, letter: &str) -> PyResult<bool> {
        self.inner
            .answer(PlayerId::new(player), GameId::new(game_id), letter)
            .map(|(outcome, _)| outcome.correct)
            .map_err(to_py_err)
    }

    /// Apply a help by name. Returns a human-readable description of the payload.
    fn apply_help(&self, player: u64, game_id: u64, help: &str) -> PyResult<String> {
        self.inner
            .apply_help(PlayerId::new(player), GameId::new(game_id), help)
            .map(|(payload, _)| payload.to_string())
            .map_err(to_py_err)
    }

    /// Cash out. Returns the banked prize.
    fn cash_out(&self, player: u64, game_id: u64) -> PyResult<u64> {
        self.inner
            .cash_out(PlayerId::new(player), GameId::new(game_id))
            .map(|game| game.prize())
            .map_err(to_py_err)
    }

    fn balance(&self, player: u64) -> u64 {
        self.inner.balance(PlayerId::new(player))
    }
}
