//! Help kinds and their boundary names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::game::GameError;

/// The closed set of helps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    FiftyFifty,
    AudienceHelp,
    FriendCall,
}

impl HelpType {
    /// Every help kind.
    pub const ALL: [HelpType; 3] = [HelpType::FiftyFifty, HelpType::AudienceHelp, HelpType::FriendCall];

    /// Identifier used by request handlers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HelpType::FiftyFifty => "fifty_fifty",
            HelpType::AudienceHelp => "audience_help",
            HelpType::FriendCall => "friend_call",
        }
    }
}

impl std::fmt::Display for HelpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HelpType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GameError::UnknownHelpType(s.to_string()))
    }
}
