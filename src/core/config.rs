//! Engine configuration.
//!
//! The ladder and help tuning are passed into the state machine as one
//! immutable `EngineConfig` rather than read from module-level constants,
//! so tests and deployments can substitute their own.

use serde::{Deserialize, Serialize};

use super::ladder::Ladder;
use crate::helps::HelpConfig;

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Prize ladder.
    pub ladder: Ladder,

    /// Help tuning.
    #[serde(default)]
    pub helps: HelpConfig,
}

impl EngineConfig {
    /// Classic ladder with default help tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ladder.
    #[must_use]
    pub fn with_ladder(mut self, ladder: Ladder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Replace the help tuning.
    #[must_use]
    pub fn with_help_config(mut self, helps: HelpConfig) -> Self {
        self.helps = helps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::new();
        assert_eq!(config.ladder.top_level(), 15);
        assert_eq!(config.helps, HelpConfig::default());
    }

    #[test]
    fn test_config_builder() {
        let ladder = Ladder::from_prizes(&[1, 2, 3], &[1]).unwrap();
        let helps = HelpConfig::new(0.3, 0.9, 0.5..0.6).unwrap();

        let config = EngineConfig::new()
            .with_ladder(ladder.clone())
            .with_help_config(helps.clone());

        assert_eq!(config.ladder, ladder);
        assert_eq!(config.helps, helps);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"ladder":[{"level":1,"prize":50,"fireproof":true}]}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.ladder.top_level(), 1);
        assert_eq!(config.ladder.fireproof_floor(1), 50);
        assert_eq!(config.helps, HelpConfig::default());
    }

    #[test]
    fn test_config_from_json_rejects_invalid_helps() {
        let json = r#"{"ladder":[{"level":1,"prize":50,"fireproof":false}],"helps":{"friend_accuracy":1.5}}"#;
        assert!(serde_json::from_str::<EngineConfig>(json).is_err());

        let json = r#"{"ladder":[{"level":1,"prize":50,"fireproof":false}],"helps":{"audience_bias":-0.5}}"#;
        assert!(serde_json::from_str::<EngineConfig>(json).is_err());

        let json = r#"{"ladder":[{"level":1,"prize":50,"fireproof":false}],"helps":{"friend_accuracy":1.0}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.helps.friend_accuracy(), 1.0);
        assert_eq!(config.helps.audience_bias(), 0.6);
    }
}
