//! Question pools.
//!
//! The engine only ever asks a pool for "N distinct questions at level L".
//! Where the questions live (database, file, memory) is the pool's business.

use rustc_hash::FxHashMap;

use super::question::Question;
use crate::core::{GameRng, Level};

/// Source of questions keyed by difficulty level.
pub trait QuestionPool {
    /// Up to `count` distinct questions for `level`, chosen with `rng`.
    ///
    /// Returns fewer than `count` when the level is short of questions.
    fn unused_at_level(&self, level: Level, count: usize, rng: &mut GameRng) -> Vec<Question>;

    /// How many questions exist for `level`.
    fn available_at_level(&self, level: Level) -> usize;
}

/// Question pool held in memory, bucketed by level.
///
/// ## Example
///
/// ```
/// use rust_millionaire::questions::{InMemoryPool, OptionKey, Question, QuestionPool};
///
/// let mut pool = InMemoryPool::new();
/// let options = ["1".into(), "2".into(), "3".into(), "4".into()];
/// pool.add(Question::new(1, "2 + 2 = ?", options, OptionKey::D).unwrap());
///
/// assert_eq!(pool.available_at_level(1), 1);
/// assert_eq!(pool.available_at_level(2), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPool {
    by_level: FxHashMap<Level, Vec<Question>>,
}

impl InMemoryPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question under its own level. Exact duplicates are ignored.
    pub fn add(&mut self, question: Question) {
        let bucket = self.by_level.entry(question.level()).or_default();
        if !bucket.contains(&question) {
            bucket.push(question);
        }
    }

    /// Total number of questions across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    /// Is the pool empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Question> for InMemoryPool {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut pool = Self::new();
        for question in iter {
            pool.add(question);
        }
        pool
    }
}

impl QuestionPool for InMemoryPool {
    fn unused_at_level(&self, level: Level, count: usize, rng: &mut GameRng) -> Vec<Question> {
        let Some(bucket) = self.by_level.get(&level) else {
            return Vec::new();
        };

        rng.sample_indices(bucket.len(), count)
            .into_iter()
            .map(|i| bucket[i].clone())
            .collect()
    }

    fn available_at_level(&self, level: Level) -> usize {
        self.by_level.get(&level).map_or(0, Vec::len)
    }
}
