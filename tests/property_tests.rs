//! Property tests for ladder arithmetic, help contracts and terminal states.

use std::sync::Arc;

use proptest::prelude::*;
use rust_millionaire::core::{EngineConfig, GameId, GameRng, Ladder, PlayerId};
use rust_millionaire::game::{GameError, GameStateMachine};
use rust_millionaire::helps::{HelpEngine, HelpType};
use rust_millionaire::questions::{InMemoryPool, OptionKey, Question};

fn option_key() -> impl Strategy<Value = OptionKey> {
    prop::sample::select(OptionKey::ALL.to_vec())
}

/// Strictly increasing prize lists with an arbitrary fireproof subset.
fn ladder() -> impl Strategy<Value = Ladder> {
    prop::collection::vec((1u64..10_000, any::<bool>()), 1..30).prop_map(|steps| {
        let mut prize = 0;
        let mut prizes = Vec::new();
        let mut fireproof = Vec::new();
        for (i, (step, fp)) in steps.into_iter().enumerate() {
            prize += step;
            prizes.push(prize);
            if fp {
                fireproof.push((i + 1) as u8);
            }
        }
        Ladder::from_prizes(&prizes, &fireproof).unwrap()
    })
}

fn question(correct: OptionKey) -> Question {
    let options = ["1".into(), "2".into(), "3".into(), "4".into()];
    Question::new(1, "Pick one", options, correct).unwrap()
}

proptest! {
    #[test]
    fn ladder_prizes_strictly_increase(ladder in ladder()) {
        for l1 in 1..=ladder.top_level() {
            for l2 in (l1 + 1)..=ladder.top_level() {
                prop_assert!(ladder.prize_for_level(l1) < ladder.prize_for_level(l2));
            }
        }
    }

    #[test]
    fn fireproof_floor_is_bounded_and_monotone(ladder in ladder()) {
        let mut previous = 0;
        for level in 0..=ladder.top_level() {
            let floor = ladder.fireproof_floor(level);
            prop_assert!(floor <= ladder.cash_out_prize(level));
            prop_assert!(floor >= previous);
            if ladder.is_fireproof(level) {
                prop_assert_eq!(floor, ladder.prize_for_level(level));
            }
            previous = floor;
        }
    }

    #[test]
    fn fifty_fifty_keeps_correct(correct in option_key(), seed in any::<u64>()) {
        let keys = HelpEngine::default().fifty_fifty(&question(correct), &mut GameRng::new(seed));
        prop_assert_eq!(keys.len(), 2);
        prop_assert!(keys.contains(&correct));
        prop_assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn audience_is_a_distribution(correct in option_key(), seed in any::<u64>()) {
        let votes = HelpEngine::default().audience_help(&question(correct), &mut GameRng::new(seed));
        let mut total = 0.0;
        for (_, share) in votes.iter() {
            prop_assert!((0.0..=1.0).contains(&share));
            total += share;
        }
        prop_assert_eq!(votes.iter().count(), 4);
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn random_play_respects_invariants(
        moves in prop::collection::vec((0u8..4, option_key(), 0usize..3), 1..40),
        seed in any::<u64>(),
    ) {
        let pool: InMemoryPool = (1..=15)
            .map(|level| {
                let options = ["1".into(), "2".into(), "3".into(), "4".into()];
                Question::new(level, format!("q{}", level), options, OptionKey::ALL[level as usize % 4]).unwrap()
            })
            .collect();
        let mut machine = GameStateMachine::new(Arc::new(EngineConfig::new()), GameRng::new(seed));
        let mut game = machine.start(GameId::new(1), PlayerId::new(1), &pool).unwrap();

        for (action, key, help) in moves {
            let before = game.clone();
            let result = match action {
                0 => machine.answer(&mut game, key).map(|_| ()),
                1 => {
                    // Mostly-correct play so games climb the ladder
                    let correct = game.current_question().map(|q| q.correct()).unwrap_or(key);
                    machine.answer(&mut game, correct).map(|_| ())
                }
                2 => machine.apply_help_kind(&mut game, HelpType::ALL[help]).map(|_| ()),
                _ => machine.cash_out(&mut game).map(|_| ()),
            };

            // finished_at is set exactly when the game is over
            prop_assert_eq!(game.is_finished(), game.finished_at().is_some());
            prop_assert!(game.current_level() >= before.current_level());

            match result {
                Ok(()) => {}
                Err(GameError::GameAlreadyFinished { .. }) => {
                    prop_assert!(before.is_finished());
                    prop_assert_eq!(&game, &before);
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }

            if before.is_finished() {
                prop_assert_eq!(game.prize(), before.prize());
            }
        }
    }
}
