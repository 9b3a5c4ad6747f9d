//! # rust-millionaire
//!
//! Rules engine for a tiered multiple-choice quiz ladder ("millionaire"-style).
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `GameStateMachine` operations are synchronous, never
//!    block, and either fully apply or leave the game untouched.
//!
//! 2. **Explicit configuration**: the ladder and help tuning live in an
//!    `EngineConfig` passed to the machine, not in module constants.
//!
//! 3. **Injected randomness**: questions and help payloads come from a
//!    seedable `GameRng`, so games replay exactly in tests.
//!
//! ## Architecture
//!
//! - **Aggregate + repository**: a `Game` is an owned value. The repository
//!   guarantees one active game per player and rejects stale writes.
//!
//! - **Closed help set**: helps are a `HelpType` enum; unknown names are
//!   rejected at the boundary with `UnknownHelpType`.
//!
//! ## Modules
//!
//! - `core`: IDs, ladder, RNG, clock, configuration
//! - `questions`: questions, pools, per-game question sets
//! - `helps`: help kinds, payloads and the help engine
//! - `game`: the game aggregate and state machine
//! - `repository`: game storage and player balances
//! - `service`: request-facing orchestration

pub mod core;
pub mod questions;
pub mod helps;
pub mod game;
pub mod repository;
pub mod service;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameId, PlayerId, Level, Money,
    Ladder, LadderEntry, LadderError,
    GameRng, GameRngState,
    Clock, FixedClock, SystemClock,
    EngineConfig,
};

pub use crate::questions::{OptionKey, Question, QuestionError, QuestionPool, InMemoryPool, QuestionSet};

pub use crate::helps::{HelpType, HelpConfig, HelpConfigError, HelpPayload, AudienceVotes, FriendAdvice, HelpEngine};

pub use crate::game::{Game, GameStatus, GameError, GameStateMachine, AnswerOutcome};

pub use crate::repository::{GameRepository, RepositoryError, Versioned, InMemoryRepository, Ledger, InMemoryLedger};

pub use crate::service::{GameService, ServiceError};
