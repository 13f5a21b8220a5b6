//! Interactive game
//!
//! Round acquisition, the session state machine and the input capability
//! they read from.

mod config;
pub mod input;
mod round;
mod session;

pub use config::{ConfigError, DEFAULT_LENGTHS, DEFAULT_ROUNDS, DEFAULT_TIME_LIMIT, GameConfig};
pub use input::{BlockingLineSource, LineSource, TimedLine};
pub use round::{QUIT_COMMAND, Round, RoundController, RoundError, Submission};
pub use session::{Game, GameSummary, Phase, ScoredRound};
