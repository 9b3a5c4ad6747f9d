//! Core engine types: identifiers, money, ladder, RNG, clock, configuration.
//!
//! Everything in here is game-agnostic plumbing shared by the question,
//! help and game modules. Nothing in `core` holds per-game mutable state.

pub mod ids;
pub mod ladder;
pub mod rng;
pub mod clock;
pub mod config;

pub use ids::{GameId, PlayerId, Level, Money};
pub use ladder::{Ladder, LadderEntry, LadderError};
pub use rng::{GameRng, GameRngState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
