//! One-shot helps.
//!
//! Three kinds of help exist, each usable once per game:
//!
//! - **FiftyFifty**: strike out two wrong options
//! - **AudienceHelp**: a noisy poll over all four options
//! - **FriendCall**: a fallible advisor's suggestion
//!
//! `HelpEngine` only computes payloads. Tracking which helps a game has
//! spent is the state machine's job.

pub mod kind;
pub mod config;
pub mod payload;
pub mod engine;

pub use kind::HelpType;
pub use config::{HelpConfig, HelpConfigError};
pub use payload::{AudienceVotes, FriendAdvice, HelpPayload};
pub use engine::HelpEngine;
