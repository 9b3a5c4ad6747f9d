//! Request-facing game service.
//!
//! `GameService` is the thin layer a request handler talks to. It resolves
//! the game, checks ownership, runs one state-machine operation on a copy,
//! writes it back with a version check, and credits the ledger when the
//! game ends.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_millionaire::core::{EngineConfig, GameRng, PlayerId};
//! use rust_millionaire::questions::{InMemoryPool, OptionKey, Question};
//! use rust_millionaire::repository::{InMemoryLedger, InMemoryRepository};
//! use rust_millionaire::service::GameService;
//!
//! let pool: InMemoryPool = (1..=15)
//!     .map(|level| {
//!         let options = ["1".into(), "2".into(), "3".into(), "4".into()];
//!         Question::new(level, format!("q{level}"), options, OptionKey::B).unwrap()
//!     })
//!     .collect();
//!
//! let service = GameService::new(
//!     Arc::new(EngineConfig::new()),
//!     GameRng::new(7),
//!     Arc::new(pool),
//!     Arc::new(InMemoryRepository::new()),
//!     Arc::new(InMemoryLedger::new()),
//! );
//!
//! let player = PlayerId::new(1);
//! let game = service.start_game(player).unwrap();
//! service.answer(player, game.id(), "b").unwrap();
//! service.answer(player, game.id(), "b").unwrap();
//! let game = service.cash_out(player, game.id()).unwrap();
//!
//! assert_eq!(game.prize(), 200);
//! assert_eq!(service.balance(player), 200);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::core::{Clock, EngineConfig, GameId, GameRng, Money, PlayerId};
use crate::game::{AnswerOutcome, Game, GameError, GameStateMachine};
use crate::helps::HelpPayload;
use crate::questions::{OptionKey, QuestionPool};
use crate::repository::{GameRepository, Ledger, RepositoryError};

/// Errors returned by `GameService`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("player already has an active game: {game}")]
    ActiveGameExists { game: GameId },

    #[error("{game} does not belong to {player}")]
    NotOwner { player: PlayerId, game: GameId },

    #[error("invalid answer option: {0:?}")]
    InvalidOption(String),
}

/// Convenience Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Wires the state machine to storage and balances.
pub struct GameService {
    machine: Mutex<GameStateMachine>,
    pool: Arc<dyn QuestionPool + Send + Sync>,
    repository: Arc<dyn GameRepository>,
    ledger: Arc<dyn Ledger>,
}

impl GameService {
    /// Create a service using the system clock.
    pub fn new(
        config: Arc<EngineConfig>,
        rng: GameRng,
        pool: Arc<dyn QuestionPool + Send + Sync>,
        repository: Arc<dyn GameRepository>,
        ledger: Arc<dyn Ledger>,
    ) -> Self {
        Self {
            machine: Mutex::new(GameStateMachine::new(config, rng)),
            pool,
            repository,
            ledger,
        }
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        let machine = self.machine.into_inner().with_clock(clock);
        Self { machine: Mutex::new(machine), ..self }
    }

    /// Start a game, unless the player already has one in progress.
    pub fn start_game(&self, player: PlayerId) -> Result<Game> {
        if let Some(active) = self.repository.active_for(player)? {
            return Err(ServiceError::ActiveGameExists { game: active.value.id() });
        }

        let id = self.repository.allocate_id();
        let game = self.machine.lock().start(id, player, self.pool.as_ref())?;

        match self.repository.insert_if_no_active(&game) {
            Ok(stored) => Ok(stored.value),
            // Lost a race with a concurrent start
            Err(RepositoryError::ActiveGameExists { game, .. }) => {
                Err(ServiceError::ActiveGameExists { game })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load a game the player owns.
    pub fn game(&self, player: PlayerId, id: GameId) -> Result<Game> {
        let stored = self.repository.get(id)?;
        ensure_owner(&stored.value, player)?;
        Ok(stored.value)
    }

    /// The player's in-progress game, if any.
    pub fn active_game(&self, player: PlayerId) -> Result<Option<Game>> {
        Ok(self.repository.active_for(player)?.map(|v| v.value))
    }

    /// All of the player's games, oldest first.
    pub fn history(&self, player: PlayerId) -> Result<Vec<Game>> {
        Ok(self.repository.games_for(player)?)
    }

    /// Answer with a boundary letter (`"a"`..`"d"`).
    pub fn answer(&self, player: PlayerId, id: GameId, letter: &str) -> Result<(AnswerOutcome, Game)> {
        let option =
            OptionKey::from_letter(letter).ok_or_else(|| ServiceError::InvalidOption(letter.to_string()))?;
        self.mutate(player, id, |machine, game| machine.answer(game, option))
    }

    /// Apply a help named by its boundary identifier.
    pub fn apply_help(&self, player: PlayerId, id: GameId, help: &str) -> Result<(HelpPayload, Game)> {
        self.mutate(player, id, |machine, game| machine.apply_help(game, help))
    }

    /// Cash out, returning the finished game.
    pub fn cash_out(&self, player: PlayerId, id: GameId) -> Result<Game> {
        self.mutate(player, id, |machine, game| machine.cash_out(game))
            .map(|(_, game)| game)
    }

    /// Prize to display for a game.
    pub fn potential_prize(&self, game: &Game) -> Money {
        self.machine.lock().potential_prize(game)
    }

    /// Player's credited balance.
    pub fn balance(&self, player: PlayerId) -> Money {
        self.ledger.balance(player)
    }

    fn mutate<T>(
        &self,
        player: PlayerId,
        id: GameId,
        op: impl FnOnce(&mut GameStateMachine, &mut Game) -> crate::game::Result<T>,
    ) -> Result<(T, Game)> {
        let stored = self.repository.get(id)?;
        ensure_owner(&stored.value, player)?;

        let mut game = stored.value;
        let output = {
            let mut machine = self.machine.lock();
            op(&mut *machine, &mut game)?
        };
        self.repository.update(&game, stored.version)?;

        if game.is_finished() && self.ledger.credit(game.player(), game.id(), game.prize()) {
            debug!(game = %game.id(), prize = game.prize(), "finished game settled");
        }

        Ok((output, game))
    }
}

fn ensure_owner(game: &Game, player: PlayerId) -> Result<()> {
    if game.player() != player {
        return Err(ServiceError::NotOwner { player, game: game.id() });
    }
    Ok(())
}
