//! The game aggregate and its state machine.
//!
//! `Game` is plain data. `GameStateMachine` owns the configuration, RNG and
//! clock, and is the only thing that moves a game between states:
//!
//! ```text
//! InProgress ──answer(correct, top)──▶ Won
//!     │  ▲
//!     │  └──answer(correct) / apply_help
//!     ├──answer(wrong)──▶ Failed
//!     └──cash_out──────▶ CashedOut
//! ```

pub mod error;
pub mod state;
pub mod machine;

pub use error::{GameError, Result};
pub use state::{Game, GameStatus};
pub use machine::{AnswerOutcome, GameStateMachine};
