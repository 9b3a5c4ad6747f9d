//! The prize ladder.
//!
//! A `Ladder` is an ordered table of `(level, prize, fireproof)` entries for
//! levels `1..=N`. It carries no mutable state and is shared between games
//! behind an `Arc`.
//!
//! ## Prize rules
//!
//! - `prize_for_level(L)`: prize for *completing* level `L`.
//! - `cash_out_prize(L)`: what quitting before level `L + 1` banks.
//! - `fireproof_floor(L)`: what an incorrect answer after completing `L` keeps.
//!
//! ```
//! use rust_millionaire::core::Ladder;
//!
//! let ladder = Ladder::classic();
//! assert_eq!(ladder.top_level(), 15);
//! assert_eq!(ladder.prize_for_level(2), 200);
//! assert_eq!(ladder.fireproof_floor(7), 1_000);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{Level, Money};

/// Prizes of the classic fifteen-question ladder.
const CLASSIC_PRIZES: [Money; 15] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// Fireproof levels of the classic ladder.
const CLASSIC_FIREPROOF: [Level; 2] = [5, 10];

/// Errors raised while building a ladder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("ladder has no levels")]
    Empty,

    #[error("ladder has {0} levels, at most 255 are supported")]
    TooManyLevels(usize),

    #[error("entry {index} has level {found}, expected {expected}")]
    LevelGap { index: usize, expected: Level, found: Level },

    #[error("prize at level {level} does not exceed the previous level")]
    NonIncreasingPrize { level: Level },

    #[error("fireproof level {0} is outside the ladder")]
    FireproofOutOfRange(Level),
}

/// One rung of the ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderEntry {
    pub level: Level,
    pub prize: Money,
    pub fireproof: bool,
}

/// Validated prize ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LadderEntry>", into = "Vec<LadderEntry>")]
pub struct Ladder {
    /// `entries[i]` is level `i + 1`.
    entries: Vec<LadderEntry>,
}

impl Ladder {
    /// Build a ladder from explicit entries.
    ///
    /// Entries must be numbered `1..=N` in order with strictly increasing prizes.
    pub fn new(entries: Vec<LadderEntry>) -> Result<Self, LadderError> {
        if entries.is_empty() {
            return Err(LadderError::Empty);
        }
        if entries.len() > Level::MAX as usize {
            return Err(LadderError::TooManyLevels(entries.len()));
        }

        let mut previous: Option<Money> = None;
        for (index, entry) in entries.iter().enumerate() {
            let expected = (index + 1) as Level;
            if entry.level != expected {
                return Err(LadderError::LevelGap { index, expected, found: entry.level });
            }
            if previous.is_some_and(|p| entry.prize <= p) {
                return Err(LadderError::NonIncreasingPrize { level: entry.level });
            }
            previous = Some(entry.prize);
        }

        Ok(Self { entries })
    }

    /// Build a ladder from a prize list and the set of fireproof levels.
    pub fn from_prizes(prizes: &[Money], fireproof_levels: &[Level]) -> Result<Self, LadderError> {
        if let Some(&bad) = fireproof_levels
            .iter()
            .find(|&&l| l == 0 || l as usize > prizes.len())
        {
            return Err(LadderError::FireproofOutOfRange(bad));
        }

        let entries = prizes
            .iter()
            .enumerate()
            .map(|(i, &prize)| {
                let level = (i + 1) as Level;
                LadderEntry { level, prize, fireproof: fireproof_levels.contains(&level) }
            })
            .collect();

        Self::new(entries)
    }

    /// The classic fifteen-question ladder, fireproof at 1 000 and 32 000.
    #[must_use]
    pub fn classic() -> Self {
        let entries = CLASSIC_PRIZES
            .iter()
            .enumerate()
            .map(|(i, &prize)| {
                let level = (i + 1) as Level;
                LadderEntry { level, prize, fireproof: CLASSIC_FIREPROOF.contains(&level) }
            })
            .collect();
        Self { entries }
    }

    /// Number of levels (`N`).
    #[must_use]
    pub fn top_level(&self) -> Level {
        self.entries.len() as Level
    }

    /// All entries, ordered by level.
    #[must_use]
    pub fn entries(&self) -> &[LadderEntry] {
        &self.entries
    }

    /// Entry for a level, `None` for level 0 or beyond the top.
    #[must_use]
    pub fn entry(&self, level: Level) -> Option<&LadderEntry> {
        level.checked_sub(1).and_then(|i| self.entries.get(i as usize))
    }

    /// Is `level` a fireproof level?
    #[must_use]
    pub fn is_fireproof(&self, level: Level) -> bool {
        self.entry(level).is_some_and(|e| e.fireproof)
    }

    /// Prize for completing `level`.
    ///
    /// Level 0 is worth nothing; levels above the top clamp to the top prize.
    #[must_use]
    pub fn prize_for_level(&self, level: Level) -> Money {
        if level == 0 {
            return 0;
        }
        let idx = (level as usize).min(self.entries.len()) - 1;
        self.entries[idx].prize
    }

    /// Prize banked by cashing out with `level` questions completed.
    #[must_use]
    pub fn cash_out_prize(&self, level: Level) -> Money {
        if level > 0 {
            self.prize_for_level(level)
        } else {
            0
        }
    }

    /// Largest fireproof prize at or below `level`, or 0.
    #[must_use]
    pub fn fireproof_floor(&self, level: Level) -> Money {
        self.entries
            .iter()
            .take_while(|e| e.level <= level)
            .filter(|e| e.fireproof)
            .map(|e| e.prize)
            .last()
            .unwrap_or(0)
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<Vec<LadderEntry>> for Ladder {
    type Error = LadderError;

    fn try_from(entries: Vec<LadderEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Ladder> for Vec<LadderEntry> {
    fn from(ladder: Ladder) -> Self {
        ladder.entries
    }
}
