//! Help payload computation.
//!
//! All functions are pure apart from the injected RNG: the same question,
//! config and RNG state always produce the same payload.

use smallvec::SmallVec;

use super::config::HelpConfig;
use super::kind::HelpType;
use super::payload::{AudienceVotes, FriendAdvice, HelpPayload};
use crate::core::GameRng;
use crate::questions::{OptionKey, Question};

/// Computes help payloads. Holds only immutable tuning.
#[derive(Clone, Debug, Default)]
pub struct HelpEngine {
    config: HelpConfig,
}

impl HelpEngine {
    /// Create an engine with the given tuning.
    #[must_use]
    pub fn new(config: HelpConfig) -> Self {
        Self { config }
    }

    /// Compute the payload for `kind`.
    pub fn apply(&self, kind: HelpType, question: &Question, rng: &mut GameRng) -> HelpPayload {
        match kind {
            HelpType::FiftyFifty => HelpPayload::FiftyFifty(self.fifty_fifty(question, rng)),
            HelpType::AudienceHelp => HelpPayload::AudienceHelp(self.audience_help(question, rng)),
            HelpType::FriendCall => HelpPayload::FriendCall(self.friend_call(question, rng)),
        }
    }

    /// The correct option plus one random incorrect option, sorted.
    pub fn fifty_fifty(&self, question: &Question, rng: &mut GameRng) -> SmallVec<[OptionKey; 2]> {
        let wrong = random_incorrect(question, rng);
        let mut keys: SmallVec<[OptionKey; 2]> = SmallVec::new();
        keys.push(question.correct());
        keys.push(wrong);
        keys.sort_unstable();
        keys
    }

    /// A noisy poll: uniform weights, correct option boosted by `audience_bias`.
    pub fn audience_help(&self, question: &Question, rng: &mut GameRng) -> AudienceVotes {
        let mut weights = [0.0f64; 4];
        for key in OptionKey::ALL {
            weights[key.index()] = rng.gen_unit();
        }
        weights[question.correct().index()] += self.config.audience_bias();

        AudienceVotes::from_weights(weights)
    }

    /// Right with probability `friend_accuracy`, otherwise a random wrong option.
    pub fn friend_call(&self, question: &Question, rng: &mut GameRng) -> FriendAdvice {
        let suggested = if rng.gen_bool(self.config.friend_accuracy()) {
            question.correct()
        } else {
            random_incorrect(question, rng)
        };
        let confidence = rng.gen_range_f64(self.config.friend_confidence());

        FriendAdvice { suggested, confidence }
    }
}

fn random_incorrect(question: &Question, rng: &mut GameRng) -> OptionKey {
    let wrong: SmallVec<[OptionKey; 3]> = question.incorrect().collect();
    wrong[rng.gen_range_usize(0..wrong.len())]
}
