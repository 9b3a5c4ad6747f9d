//! The game aggregate.
//!
//! A `Game` is the whole persisted state of one play-through: where the
//! player stands on the ladder, which helps are spent, what the current
//! question's helps revealed, and how it ended. It is mutated only by
//! `GameStateMachine`; everything here is read access.
//!
//! Uses `im` collections so snapshots (repository writes, before/after
//! comparisons) clone in O(1).

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::{GameId, Level, Money, PlayerId};
use crate::helps::{HelpPayload, HelpType};
use crate::questions::{Question, QuestionSet};

/// Lifecycle status. Everything but `InProgress` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Failed,
    CashedOut,
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Identifier used in storage and at the request boundary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Failed => "failed",
            GameStatus::CashedOut => "cashed_out",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player's game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) player: PlayerId,
    pub(crate) status: GameStatus,
    /// Number of questions answered correctly.
    pub(crate) current_level: Level,
    /// Banked prize. Only meaningful once the game is finished.
    pub(crate) prize: Money,
    pub(crate) used_helps: OrdSet<HelpType>,
    /// Payloads revealed for the current question. Cleared on level-up.
    pub(crate) help_state: OrdMap<HelpType, HelpPayload>,
    pub(crate) questions: QuestionSet,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) finished_at: Option<OffsetDateTime>,
}

impl Game {
    pub(crate) fn new(
        id: GameId,
        player: PlayerId,
        questions: QuestionSet,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            player,
            status: GameStatus::InProgress,
            current_level: 0,
            prize: 0,
            used_helps: OrdSet::new(),
            help_state: OrdMap::new(),
            questions,
            created_at,
            finished_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of questions answered correctly so far.
    #[must_use]
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    /// Banked prize.
    ///
    /// Stays 0 while the game is in progress; use
    /// `GameStateMachine::potential_prize` for the standing to display.
    #[must_use]
    pub fn prize(&self) -> Money {
        self.prize
    }

    #[must_use]
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Set exactly when the game is finished.
    #[must_use]
    pub fn finished_at(&self) -> Option<OffsetDateTime> {
        self.finished_at
    }

    /// The drawn question set.
    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// The question the player is facing, `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.question_at(self.current_level.saturating_add(1))
    }

    /// The last question answered correctly, if any.
    #[must_use]
    pub fn previous_question(&self) -> Option<&Question> {
        self.questions.question_at(self.current_level)
    }

    /// Helps spent so far.
    #[must_use]
    pub fn used_helps(&self) -> &OrdSet<HelpType> {
        &self.used_helps
    }

    /// Has `kind` been spent?
    #[must_use]
    pub fn help_used(&self, kind: HelpType) -> bool {
        self.used_helps.contains(&kind)
    }

    /// Helps still available, in declaration order.
    pub fn available_helps(&self) -> impl Iterator<Item = HelpType> + '_ {
        HelpType::ALL.into_iter().filter(move |k| !self.help_used(*k))
    }

    /// What `kind` revealed about the current question, if it was used on it.
    #[must_use]
    pub fn help_payload(&self, kind: HelpType) -> Option<&HelpPayload> {
        self.help_state.get(&kind)
    }
}
