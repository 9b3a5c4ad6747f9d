//! Help tuning parameters.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Errors raised by `HelpConfig::new`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelpConfigError {
    #[error("audience bias must be finite and non-negative, got {0}")]
    AudienceBias(f64),

    #[error("friend accuracy must be within [0, 1], got {0}")]
    FriendAccuracy(f64),

    #[error("friend confidence range {0:?} must be a non-empty range within [0, 1]")]
    FriendConfidence(Range<f64>),
}

/// Tuning for the randomized helps.
///
/// Always valid: built through `HelpConfig::new` or deserialized through the
/// same checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HelpConfigRepr", into = "HelpConfigRepr")]
pub struct HelpConfig {
    audience_bias: f64,
    friend_accuracy: f64,
    friend_confidence: Range<f64>,
}

/// Wire form. Missing fields fall back to the defaults.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct HelpConfigRepr {
    audience_bias: f64,
    friend_accuracy: f64,
    friend_confidence: Range<f64>,
}

impl Default for HelpConfigRepr {
    fn default() -> Self {
        HelpConfig::default().into()
    }
}

impl TryFrom<HelpConfigRepr> for HelpConfig {
    type Error = HelpConfigError;

    fn try_from(repr: HelpConfigRepr) -> Result<Self, Self::Error> {
        HelpConfig::new(repr.audience_bias, repr.friend_accuracy, repr.friend_confidence)
    }
}

impl From<HelpConfig> for HelpConfigRepr {
    fn from(config: HelpConfig) -> Self {
        Self {
            audience_bias: config.audience_bias,
            friend_accuracy: config.friend_accuracy,
            friend_confidence: config.friend_confidence,
        }
    }
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            audience_bias: 0.6,
            friend_accuracy: 0.8,
            friend_confidence: 0.4..1.0,
        }
    }
}

impl HelpConfig {
    /// Create a validated help configuration.
    pub fn new(
        audience_bias: f64,
        friend_accuracy: f64,
        friend_confidence: Range<f64>,
    ) -> Result<Self, HelpConfigError> {
        let config = Self { audience_bias, friend_accuracy, friend_confidence };
        config.validate()?;
        Ok(config)
    }

    /// Extra raw weight given to the correct option in an audience poll.
    ///
    /// Each option starts from a uniform `[0, 1)` weight. With the default of
    /// 0.6 the correct option leads most polls but not all of them.
    #[must_use]
    pub fn audience_bias(&self) -> f64 {
        self.audience_bias
    }

    /// Probability that the friend suggests the correct option.
    #[must_use]
    pub fn friend_accuracy(&self) -> f64 {
        self.friend_accuracy
    }

    /// Range the friend's stated confidence is drawn from.
    #[must_use]
    pub fn friend_confidence(&self) -> Range<f64> {
        self.friend_confidence.clone()
    }

    fn validate(&self) -> Result<(), HelpConfigError> {
        if !self.audience_bias.is_finite() || self.audience_bias < 0.0 {
            return Err(HelpConfigError::AudienceBias(self.audience_bias));
        }
        if !(0.0..=1.0).contains(&self.friend_accuracy) {
            return Err(HelpConfigError::FriendAccuracy(self.friend_accuracy));
        }
        let conf = &self.friend_confidence;
        if !(conf.start >= 0.0 && conf.end <= 1.0 && conf.start < conf.end) {
            return Err(HelpConfigError::FriendConfidence(conf.clone()));
        }
        Ok(())
    }
}
