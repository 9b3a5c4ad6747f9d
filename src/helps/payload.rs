//! What each help reveals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::HelpType;
use crate::questions::OptionKey;

/// Audience poll result: one share per option, summing to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudienceVotes {
    shares: [f64; 4],
}

impl AudienceVotes {
    /// Normalize raw non-negative weights into shares.
    ///
    /// All-zero weights produce a uniform poll.
    #[must_use]
    pub fn from_weights(weights: [f64; 4]) -> Self {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Self { shares: [0.25; 4] };
        }
        Self { shares: weights.map(|w| w / total) }
    }

    /// Share of the vote for `key`.
    #[must_use]
    pub fn share(&self, key: OptionKey) -> f64 {
        self.shares[key.index()]
    }

    /// Iterate `(key, share)` in A..D order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, f64)> + '_ {
        OptionKey::ALL.into_iter().map(move |k| (k, self.share(k)))
    }

    /// Option with the largest share. Ties go to the earlier letter.
    #[must_use]
    pub fn leader(&self) -> OptionKey {
        self.iter()
            .fold((OptionKey::A, f64::MIN), |best, (k, s)| if s > best.1 { (k, s) } else { best })
            .0
    }
}

/// The friend's advice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendAdvice {
    pub suggested: OptionKey,
    /// Stated confidence in `[0, 1]`. Says nothing about actual correctness.
    pub confidence: f64,
}

/// Revealed data for one help.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HelpPayload {
    /// The two options left standing, sorted.
    FiftyFifty(SmallVec<[OptionKey; 2]>),
    AudienceHelp(AudienceVotes),
    FriendCall(FriendAdvice),
}

impl HelpPayload {
    /// Which help produced this payload.
    #[must_use]
    pub fn kind(&self) -> HelpType {
        match self {
            HelpPayload::FiftyFifty(_) => HelpType::FiftyFifty,
            HelpPayload::AudienceHelp(_) => HelpType::AudienceHelp,
            HelpPayload::FriendCall(_) => HelpType::FriendCall,
        }
    }
}

impl std::fmt::Display for HelpPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HelpPayload::FiftyFifty(keys) => {
                let letters: Vec<String> = keys.iter().map(ToString::to_string).collect();
                write!(f, "fifty_fifty: {}", letters.join(", "))
            }
            HelpPayload::AudienceHelp(votes) => {
                write!(f, "audience_help:")?;
                for (key, share) in votes.iter() {
                    write!(f, " {}={:.0}%", key, share * 100.0)?;
                }
                Ok(())
            }
            HelpPayload::FriendCall(advice) => write!(
                f,
                "friend_call: {} ({:.0}% sure)",
                advice.suggested,
                advice.confidence * 100.0
            ),
        }
    }
}
