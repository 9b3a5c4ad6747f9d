//! Player balances.

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{GameId, Money, PlayerId};

/// Credits finished games' prizes to player balances.
pub trait Ledger: Send + Sync {
    /// Credit `amount` for `game`. Returns `false` if that game was already
    /// credited, in which case nothing changes.
    fn credit(&self, player: PlayerId, game: GameId, amount: Money) -> bool;

    /// Current balance of `player`.
    fn balance(&self, player: PlayerId) -> Money;
}

#[derive(Debug, Default)]
struct Books {
    balances: FxHashMap<PlayerId, Money>,
    credited: FxHashSet<GameId>,
}

/// Ledger held in memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    books: Mutex<Books>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for InMemoryLedger {
    fn credit(&self, player: PlayerId, game: GameId, amount: Money) -> bool {
        let mut books = self.books.lock();
        if !books.credited.insert(game) {
            return false;
        }

        let balance = books.balances.entry(player).or_insert(0);
        *balance = balance.saturating_add(amount);
        debug!(player = %player, game = %game, amount, balance = *balance, "prize credited");
        true
    }

    fn balance(&self, player: PlayerId) -> Money {
        self.books.lock().balances.get(&player).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_once_per_game() {
        let ledger = InMemoryLedger::new();
        let player = PlayerId::new(1);

        assert!(ledger.credit(player, GameId::new(1), 200));
        assert!(!ledger.credit(player, GameId::new(1), 200));
        assert_eq!(ledger.balance(player), 200);

        assert!(ledger.credit(player, GameId::new(2), 1_000));
        assert_eq!(ledger.balance(player), 1_200);
    }

    #[test]
    fn test_zero_prize_still_marks_credited() {
        let ledger = InMemoryLedger::new();
        let player = PlayerId::new(7);

        assert!(ledger.credit(player, GameId::new(3), 0));
        assert!(!ledger.credit(player, GameId::new(3), 0));
        assert_eq!(ledger.balance(player), 0);
        assert_eq!(ledger.balance(PlayerId::new(8)), 0);
    }
}
