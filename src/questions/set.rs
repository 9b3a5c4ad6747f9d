//! Per-game question assignment.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::pool::QuestionPool;
use super::question::Question;
use crate::core::{GameRng, Ladder, Level};
use crate::game::{GameError, Result};

/// One question per ladder level, drawn once at game start.
///
/// Backed by `im::Vector` so cloning a game snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// `questions[i]` is the question for level `i + 1`.
    questions: Vector<Question>,
}

impl QuestionSet {
    /// Draw one question for every level `1..=N` of `ladder`.
    ///
    /// Fails with `InsufficientQuestions` naming the first level the pool
    /// cannot supply.
    pub fn draw(ladder: &Ladder, pool: &dyn QuestionPool, rng: &mut GameRng) -> Result<Self> {
        let mut questions = Vector::new();

        for level in 1..=ladder.top_level() {
            let question = pool
                .unused_at_level(level, 1, rng)
                .into_iter()
                .next()
                .ok_or(GameError::InsufficientQuestions { level })?;
            questions.push_back(question);
        }

        Ok(Self { questions })
    }

    /// Question for `level`, `None` for level 0 or beyond the top.
    #[must_use]
    pub fn question_at(&self, level: Level) -> Option<&Question> {
        level.checked_sub(1).and_then(|i| self.questions.get(i as usize))
    }

    /// Number of levels covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate questions in level order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
