//! In-memory game repository.
//!
//! Rows hold bincode-encoded snapshots, so what comes back from `get` is
//! always a fresh copy and never aliases a caller's game.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::warn;

use super::{GameRepository, RepositoryError, Result, Versioned};
use crate::core::{GameId, PlayerId};
use crate::game::Game;

#[derive(Debug)]
struct Row {
    player: PlayerId,
    version: u64,
    snapshot: Vec<u8>,
}

#[derive(Debug, Default)]
struct Tables {
    next_id: u64,
    rows: FxHashMap<GameId, Row>,
    /// Player → in-progress game.
    active: FxHashMap<PlayerId, GameId>,
}

/// Repository backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.lock().rows.len()
    }

    /// Is the repository empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode(row: &Row) -> Result<Versioned<Game>> {
    Ok(Versioned {
        value: bincode::deserialize(&row.snapshot)?,
        version: row.version,
    })
}

impl GameRepository for InMemoryRepository {
    fn allocate_id(&self) -> GameId {
        let mut tables = self.tables.lock();
        tables.next_id += 1;
        GameId::new(tables.next_id)
    }

    fn insert_if_no_active(&self, game: &Game) -> Result<Versioned<Game>> {
        let snapshot = bincode::serialize(game)?;
        let mut tables = self.tables.lock();

        if let Some(&existing) = tables.active.get(&game.player()) {
            warn!(player = %game.player(), active = %existing, "refusing second active game");
            return Err(RepositoryError::ActiveGameExists { player: game.player(), game: existing });
        }
        if tables.rows.contains_key(&game.id()) {
            warn!(game = %game.id(), "refusing to overwrite stored game");
            return Err(RepositoryError::DuplicateId(game.id()));
        }

        if !game.is_finished() {
            tables.active.insert(game.player(), game.id());
        }
        tables.rows.insert(game.id(), Row { player: game.player(), version: 1, snapshot });

        Ok(Versioned { value: game.clone(), version: 1 })
    }

    fn get(&self, id: GameId) -> Result<Versioned<Game>> {
        let tables = self.tables.lock();
        let row = tables.rows.get(&id).ok_or(RepositoryError::NotFound(id))?;
        decode(row)
    }

    fn active_for(&self, player: PlayerId) -> Result<Option<Versioned<Game>>> {
        let tables = self.tables.lock();
        tables
            .active
            .get(&player)
            .and_then(|id| tables.rows.get(id))
            .map(decode)
            .transpose()
    }

    fn update(&self, game: &Game, expected_version: u64) -> Result<u64> {
        let snapshot = bincode::serialize(game)?;
        let mut tables = self.tables.lock();

        let row = tables.rows.get_mut(&game.id()).ok_or(RepositoryError::NotFound(game.id()))?;
        if row.version != expected_version {
            warn!(game = %game.id(), expected_version, actual = row.version, "stale game write rejected");
            return Err(RepositoryError::VersionConflict {
                game: game.id(),
                expected: expected_version,
                actual: row.version,
            });
        }

        row.version += 1;
        row.snapshot = snapshot;
        let version = row.version;

        if game.is_finished() && tables.active.get(&game.player()) == Some(&game.id()) {
            tables.active.remove(&game.player());
        }

        Ok(version)
    }

    fn games_for(&self, player: PlayerId) -> Result<Vec<Game>> {
        let tables = self.tables.lock();
        let mut rows: Vec<(&GameId, &Row)> =
            tables.rows.iter().filter(|(_, row)| row.player == player).collect();
        rows.sort_by_key(|(id, _)| **id);

        rows.into_iter()
            .map(|(_, row)| decode(row).map(|v| v.value))
            .collect()
    }
}
