//! Game persistence and balance bookkeeping.
//!
//! The state machine never persists anything itself. A `GameRepository`
//! stores games, guarantees at most one active game per player, and rejects
//! stale writes through a per-game version. A `Ledger` credits finished
//! games' prizes to player balances, once per game.
//!
//! `InMemoryRepository` and `InMemoryLedger` are complete reference
//! implementations used by `GameService` and the tests.

pub mod memory;
pub mod ledger;

pub use memory::InMemoryRepository;
pub use ledger::{InMemoryLedger, Ledger};

use thiserror::Error;

use crate::core::{GameId, PlayerId};
use crate::game::Game;

/// Errors returned by repositories.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(GameId),

    #[error("{0} already exists")]
    DuplicateId(GameId),

    #[error("{player} already has an active game: {game}")]
    ActiveGameExists { player: PlayerId, game: GameId },

    #[error("{game} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { game: GameId, expected: u64, actual: u64 },

    #[error("failed to encode or decode game: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// A stored value with its optimistic-lock version.
#[derive(Clone, Debug, PartialEq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

/// Storage for games.
///
/// Implementations must make `insert_if_no_active` an atomic
/// check-and-create, and `update` an atomic compare-and-swap on the version.
pub trait GameRepository: Send + Sync {
    /// Reserve a fresh game ID.
    fn allocate_id(&self) -> GameId;

    /// Store a new game unless its player already has an active one.
    ///
    /// Never overwrites: an ID that is already stored fails with `DuplicateId`.
    fn insert_if_no_active(&self, game: &Game) -> Result<Versioned<Game>>;

    /// Load a game.
    fn get(&self, id: GameId) -> Result<Versioned<Game>>;

    /// The player's in-progress game, if any.
    fn active_for(&self, player: PlayerId) -> Result<Option<Versioned<Game>>>;

    /// Overwrite a game if its stored version is still `expected_version`.
    ///
    /// Returns the new version.
    fn update(&self, game: &Game, expected_version: u64) -> Result<u64>;

    /// All of a player's games, oldest first.
    fn games_for(&self, player: PlayerId) -> Result<Vec<Game>>;
}
