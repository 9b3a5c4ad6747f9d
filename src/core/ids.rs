//! Identifiers and scalar aliases.
//!
//! ## GameId / PlayerId
//!
//! Opaque, type-safe identifiers. The engine never interprets them; the
//! repository allocates game IDs and the caller supplies player IDs.

use serde::{Deserialize, Serialize};

/// Prize amounts, in whole currency units.
pub type Money = u64;

/// Ladder level. Level 0 is "before the first question".
pub type Level = u8;

/// Game identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Player identifier, as resolved by the caller's auth layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id() {
        let id = GameId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Game(7)");
    }

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Player(3)");
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }
}
