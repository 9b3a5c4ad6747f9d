//! Multiple-choice question definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Level;

/// One of the four answer slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    /// All keys in display order.
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Slot index (A = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used at the request boundary.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            OptionKey::A => 'a',
            OptionKey::B => 'b',
            OptionKey::C => 'c',
            OptionKey::D => 'd',
        }
    }

    /// Parse a letter, case-insensitively.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_lowercase().as_str() {
            "a" => Some(OptionKey::A),
            "b" => Some(OptionKey::B),
            "c" => Some(OptionKey::C),
            "d" => Some(OptionKey::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Errors raised while building a question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("questions start at level 1")]
    LevelZero,

    #[error("question text is empty")]
    EmptyText,

    #[error("option {0} is empty")]
    EmptyOption(OptionKey),
}

/// A multiple-choice question. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    level: Level,
    text: String,
    options: [String; 4],
    correct: OptionKey,
}

impl Question {
    /// Create a question for `level` with options in A..D order.
    pub fn new(
        level: Level,
        text: impl Into<String>,
        options: [String; 4],
        correct: OptionKey,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if level == 0 {
            return Err(QuestionError::LevelZero);
        }
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if let Some(key) = OptionKey::ALL
            .into_iter()
            .find(|k| options[k.index()].trim().is_empty())
        {
            return Err(QuestionError::EmptyOption(key));
        }

        Ok(Self { level, text, options, correct })
    }

    /// Ladder level this question belongs to.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Question text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of a single option.
    #[must_use]
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    /// Iterate `(key, text)` pairs in A..D order.
    pub fn options(&self) -> impl Iterator<Item = (OptionKey, &str)> {
        OptionKey::ALL.into_iter().map(move |k| (k, self.option(k)))
    }

    /// The correct option.
    #[must_use]
    pub fn correct(&self) -> OptionKey {
        self.correct
    }

    /// Is `key` the correct option?
    #[must_use]
    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }

    /// The three incorrect options, in A..D order.
    pub fn incorrect(&self) -> impl Iterator<Item = OptionKey> + '_ {
        OptionKey::ALL.into_iter().filter(move |&k| k != self.correct)
    }
}
