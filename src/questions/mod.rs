//! Questions, question pools and per-game question sets.
//!
//! - `Question`: immutable multiple-choice question bound to a ladder level
//! - `QuestionPool`: where questions come from (trait + in-memory pool)
//! - `QuestionSet`: the one-question-per-level assignment drawn at game start

pub mod question;
pub mod pool;
pub mod set;

pub use question::{OptionKey, Question, QuestionError};
pub use pool::{InMemoryPool, QuestionPool};
pub use set::QuestionSet;
