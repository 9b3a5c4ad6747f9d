//! Game state machine.
//!
//! Implements the four game operations: start, answer, apply help, cash out.
//!
//! ## Atomicity
//!
//! Every operation validates before it mutates. An `Err` means the game was
//! not touched, so callers can persist on `Ok` and simply drop the game on
//! `Err`.
//!
//! ## Concurrency
//!
//! Operations take `&mut Game` and never block. Serializing operations per
//! game, and making "no other active game" checks atomic with creation, is
//! the repository's job.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::{GameError, Result};
use super::state::{Game, GameStatus};
use crate::core::{Clock, EngineConfig, GameId, GameRng, GameRngState, Ladder, Money, PlayerId, SystemClock};
use crate::helps::{HelpEngine, HelpPayload, HelpType};
use crate::questions::{OptionKey, QuestionPool, QuestionSet};

/// Result of `GameStateMachine::answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Was the selected option correct?
    pub correct: bool,
    /// The question's correct option.
    pub correct_option: OptionKey,
}

/// Drives games through their lifecycle.
///
/// Holds the shared configuration plus this instance's RNG and clock.
/// One machine may serve many games; it keeps no per-game state.
pub struct GameStateMachine {
    config: Arc<EngineConfig>,
    helps: HelpEngine,
    rng: GameRng,
    clock: Arc<dyn Clock>,
}

impl GameStateMachine {
    /// Create a machine using the system clock.
    #[must_use]
    pub fn new(config: Arc<EngineConfig>, rng: GameRng) -> Self {
        let helps = HelpEngine::new(config.helps.clone());
        Self {
            config,
            helps,
            rng,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The ladder in use.
    #[must_use]
    pub fn ladder(&self) -> &Ladder {
        &self.config.ladder
    }

    /// RNG checkpoint, for replaying from the current position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Prize to display for `game`.
    ///
    /// While in progress this is the prize for the last completed level; once
    /// finished it is the banked prize.
    #[must_use]
    pub fn potential_prize(&self, game: &Game) -> Money {
        if game.is_finished() {
            game.prize
        } else {
            self.ladder().prize_for_level(game.current_level)
        }
    }

    // === Operations ===

    /// Start a new game for `player`, drawing one question per level.
    pub fn start(&mut self, id: GameId, player: PlayerId, pool: &dyn QuestionPool) -> Result<Game> {
        let questions = QuestionSet::draw(&self.config.ladder, pool, &mut self.rng)?;
        let game = Game::new(id, player, questions, self.clock.now());

        debug!(game = %id, player = %player, rng_seed = self.rng.seed(), "game started");
        Ok(game)
    }

    /// Answer the current question.
    ///
    /// A correct answer advances one level and wins at the top. A wrong
    /// answer fails the game, keeping the fireproof floor.
    pub fn answer(&mut self, game: &mut Game, selected: OptionKey) -> Result<AnswerOutcome> {
        ensure_in_progress(game)?;

        let level = game.current_level + 1;
        let question = game
            .questions
            .question_at(level)
            .ok_or(GameError::InsufficientQuestions { level })?;
        let correct = question.is_correct(selected);
        let correct_option = question.correct();

        if correct {
            game.current_level = level;
            game.help_state.clear();
            debug!(game = %game.id, level, "correct answer");

            if level >= self.ladder().top_level() {
                let prize = self.ladder().prize_for_level(level);
                self.finish(game, GameStatus::Won, prize);
            }
        } else {
            let prize = self.ladder().fireproof_floor(game.current_level);
            debug!(game = %game.id, level, %selected, %correct_option, "wrong answer");
            self.finish(game, GameStatus::Failed, prize);
        }

        Ok(AnswerOutcome { correct, correct_option })
    }

    /// Apply a help named by its boundary identifier.
    ///
    /// Unrecognized names fail with `UnknownHelpType`.
    pub fn apply_help(&mut self, game: &mut Game, help: &str) -> Result<HelpPayload> {
        ensure_in_progress(game)?;
        let kind: HelpType = help.parse()?;
        self.apply_help_kind(game, kind)
    }

    /// Apply a help to the current question. Each help works once per game.
    pub fn apply_help_kind(&mut self, game: &mut Game, kind: HelpType) -> Result<HelpPayload> {
        ensure_in_progress(game)?;
        if game.help_used(kind) {
            return Err(GameError::HelpAlreadyUsed(kind));
        }

        let level = game.current_level + 1;
        let question = game
            .questions
            .question_at(level)
            .ok_or(GameError::InsufficientQuestions { level })?;
        let payload = self.helps.apply(kind, question, &mut self.rng);

        game.used_helps.insert(kind);
        game.help_state.insert(kind, payload.clone());

        debug!(game = %game.id, level, help = %kind, "help applied");
        Ok(payload)
    }

    /// Quit now, banking the prize for the last completed level.
    pub fn cash_out(&mut self, game: &mut Game) -> Result<Money> {
        ensure_in_progress(game)?;

        let prize = self.ladder().cash_out_prize(game.current_level);
        self.finish(game, GameStatus::CashedOut, prize);
        Ok(prize)
    }

    fn finish(&self, game: &mut Game, status: GameStatus, prize: Money) {
        game.status = status;
        game.prize = prize;
        game.finished_at = Some(self.clock.now());
        game.help_state.clear();

        info!(game = %game.id, player = %game.player, ?status, level = game.current_level, prize, "game finished");
    }
}

fn ensure_in_progress(game: &Game) -> Result<()> {
    if game.is_finished() {
        return Err(GameError::GameAlreadyFinished { game: game.id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::questions::{InMemoryPool, Question};
    use time::OffsetDateTime;

    fn pool(levels: u8) -> InMemoryPool {
        (1..=levels)
            .map(|level| {
                let options = ["1".into(), "2".into(), "3".into(), "4".into()];
                let correct = OptionKey::ALL[(level as usize) % 4];
                Question::new(level, format!("q{}", level), options, correct).unwrap()
            })
            .collect()
    }

    fn machine() -> GameStateMachine {
        let clock = FixedClock(OffsetDateTime::from_unix_timestamp(1_000).unwrap());
        GameStateMachine::new(Arc::new(EngineConfig::new()), GameRng::new(42))
            .with_clock(Arc::new(clock))
    }

    fn correct_for(game: &Game) -> OptionKey {
        game.current_question().unwrap().correct()
    }

    fn wrong_for(game: &Game) -> OptionKey {
        game.current_question().unwrap().incorrect().next().unwrap()
    }

    fn game_at_level(machine: &mut GameStateMachine, level: u8) -> Game {
        let mut game = machine.start(GameId::new(1), PlayerId::new(1), &pool(15)).unwrap();
        for _ in 0..level {
            let key = correct_for(&game);
            machine.answer(&mut game, key).unwrap();
        }
        game
    }

    #[test]
    fn test_start() {
        let mut machine = machine();
        let game = machine.start(GameId::new(3), PlayerId::new(9), &pool(15)).unwrap();

        assert_eq!(game.id(), GameId::new(3));
        assert_eq!(game.player(), PlayerId::new(9));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.prize(), 0);
        assert_eq!(game.questions().len(), 15);
        assert_eq!(game.created_at().unix_timestamp(), 1_000);
    }

    #[test]
    fn test_start_insufficient_questions() {
        let mut machine = machine();
        let err = machine.start(GameId::new(1), PlayerId::new(1), &pool(3)).unwrap_err();
        assert_eq!(err, GameError::InsufficientQuestions { level: 4 });
    }

    #[test]
    fn test_correct_answer_advances() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 0);

        let key = correct_for(&game);
        let outcome = machine.answer(&mut game, key).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.correct_option, key);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.prize(), 0);
        assert_eq!(machine.potential_prize(&game), 100);
    }

    #[test]
    fn test_wrong_answer_below_fireproof() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 2);

        let key = wrong_for(&game);
        let outcome = machine.answer(&mut game, key).unwrap();

        assert!(!outcome.correct);
        assert_eq!(game.status(), GameStatus::Failed);
        assert_eq!(game.prize(), 0);
        assert!(game.finished_at().is_some());
    }

    #[test]
    fn test_wrong_answer_keeps_fireproof_floor() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 7);

        let key = wrong_for(&game);
        machine.answer(&mut game, key).unwrap();

        assert_eq!(game.status(), GameStatus::Failed);
        assert_eq!(game.prize(), 1_000);
        assert_eq!(game.current_level(), 7);
    }

    #[test]
    fn test_win_at_top() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 14);

        let key = correct_for(&game);
        machine.answer(&mut game, key).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_level(), 15);
        assert_eq!(game.prize(), 1_000_000);
        assert_eq!(machine.potential_prize(&game), 1_000_000);
    }

    #[test]
    fn test_cash_out() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 2);

        let prize = machine.cash_out(&mut game).unwrap();

        assert_eq!(prize, 200);
        assert_eq!(game.prize(), 200);
        assert_eq!(game.status(), GameStatus::CashedOut);
        assert_eq!(game.finished_at().unwrap().unix_timestamp(), 1_000);
    }

    #[test]
    fn test_cash_out_at_start_banks_nothing() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 0);

        assert_eq!(machine.cash_out(&mut game).unwrap(), 0);
        assert_eq!(game.status(), GameStatus::CashedOut);
    }

    #[test]
    fn test_help_single_use() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 0);

        let payload = machine.apply_help(&mut game, "fifty_fifty").unwrap();
        assert_eq!(payload.kind(), HelpType::FiftyFifty);
        assert_eq!(game.help_payload(HelpType::FiftyFifty), Some(&payload));

        let err = machine.apply_help(&mut game, "fifty_fifty").unwrap_err();
        assert_eq!(err, GameError::HelpAlreadyUsed(HelpType::FiftyFifty));
        assert_eq!(game.used_helps().len(), 1);
    }

    #[test]
    fn test_help_used_stays_spent_across_levels() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 0);

        machine.apply_help_kind(&mut game, HelpType::FriendCall).unwrap();
        let key = correct_for(&game);
        machine.answer(&mut game, key).unwrap();

        // Revealed data belongs to the old question
        assert!(game.help_payload(HelpType::FriendCall).is_none());
        assert!(game.help_used(HelpType::FriendCall));
        assert_eq!(
            machine.apply_help_kind(&mut game, HelpType::FriendCall),
            Err(GameError::HelpAlreadyUsed(HelpType::FriendCall))
        );
    }

    #[test]
    fn test_unknown_help_is_noop() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 1);
        let before = game.clone();

        let err = machine.apply_help(&mut game, "something").unwrap_err();

        assert_eq!(err, GameError::UnknownHelpType("something".into()));
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_game_rejects_everything() {
        let mut machine = machine();
        let mut game = game_at_level(&mut machine, 3);
        machine.cash_out(&mut game).unwrap();
        let snapshot = game.clone();
        let finished = GameError::GameAlreadyFinished { game: game.id() };

        assert_eq!(machine.answer(&mut game, OptionKey::A), Err(finished.clone()));
        assert_eq!(machine.apply_help(&mut game, "audience_help"), Err(finished.clone()));
        assert_eq!(machine.apply_help(&mut game, "bogus"), Err(finished.clone()));
        assert_eq!(machine.cash_out(&mut game), Err(finished));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_seeded_machines_replay_identically() {
        let config = Arc::new(EngineConfig::new());
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(OffsetDateTime::UNIX_EPOCH));
        let mut a = GameStateMachine::new(config.clone(), GameRng::new(5)).with_clock(clock.clone());
        let mut b = GameStateMachine::new(config, GameRng::new(5)).with_clock(clock);

        let mut ga = a.start(GameId::new(1), PlayerId::new(1), &pool(15)).unwrap();
        let mut gb = b.start(GameId::new(1), PlayerId::new(1), &pool(15)).unwrap();

        let pa = a.apply_help_kind(&mut ga, HelpType::AudienceHelp).unwrap();
        let pb = b.apply_help_kind(&mut gb, HelpType::AudienceHelp).unwrap();

        assert_eq!(pa, pb);
        assert_eq!(ga, gb);
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
