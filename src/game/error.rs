use thiserror::Error;

use crate::core::{GameId, Level};
use crate::helps::HelpType;

/// Errors returned by game operations. All are recoverable and leave the
/// game untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("question pool has no question for level {level}")]
    InsufficientQuestions { level: Level },

    #[error("{game} is already finished")]
    GameAlreadyFinished { game: GameId },

    #[error("unknown help type: {0:?}")]
    UnknownHelpType(String),

    #[error("help {0} was already used in this game")]
    HelpAlreadyUsed(HelpType),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
