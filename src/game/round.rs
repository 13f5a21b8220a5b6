//! Round controller
//!
//! Obtains one candidate word of a randomly chosen length within the time limit.

use super::config::GameConfig;
use super::input::LineSource;
use crate::core::validate_word_length;
use crate::output::display::{print_length_mismatch, print_prompt};
use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

/// Literal that ends the game from any prompt
pub const QUIT_COMMAND: &str = "quit";

/// What the player handed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A word whose length matched the target
    Word(String),
    /// The player asked to stop, or input ended
    Quit,
}

/// A completed word acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Length the accepted answer had to match
    pub target_length: usize,
    /// Time spent on the accepted answer
    pub elapsed: Duration,
    pub submission: Submission,
    /// Prompts issued, including ones rejected for length
    pub attempts: u32,
}

impl Round {
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.submission {
            Submission::Word(word) => Some(word),
            Submission::Quit => None,
        }
    }
}

/// Error type for rounds that produce no submission
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("Time limit exceeded!")]
    Timeout {
        target_length: usize,
        elapsed: Duration,
        limit: Duration,
    },
    #[error("failed to read answer: {0}")]
    Io(#[from] io::Error),
}

/// Runs the prompt / read / check cycle for a single round
pub struct RoundController<'a> {
    config: &'a GameConfig,
}

impl<'a> RoundController<'a> {
    #[must_use]
    pub const fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Prompt until the player gives a word of the right length, quits, or runs out of time
    ///
    /// A length mismatch re-prompts with a freshly drawn length. There is no
    /// retry bound; the loop ends only on a matching word, `quit`, end of
    /// input, a timeout or an I/O error.
    ///
    /// The time limit is checked after each read returns. A slow answer is
    /// still read in full and then rejected.
    ///
    /// # Errors
    /// Returns `RoundError::Timeout` when an answer took longer than the
    /// configured limit, or `RoundError::Io` if reading input or writing the
    /// prompt fails.
    pub fn acquire<S, W, R>(
        &self,
        input: &mut S,
        out: &mut W,
        rng: &mut R,
    ) -> Result<Round, RoundError>
    where
        S: LineSource,
        W: Write,
        R: Rng,
    {
        let limit = self.config.time_limit();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let target_length = self.config.pick_length(rng);
            log::debug!("attempt {attempts}: target length {target_length}");

            print_prompt(out, target_length, limit)?;

            let Some(line) = input.read_timed_line()? else {
                log::info!("input closed, treating as quit");
                return Ok(Round {
                    target_length,
                    elapsed: Duration::ZERO,
                    submission: Submission::Quit,
                    attempts,
                });
            };
            log::debug!("answer {:?} after {:?}", line.text, line.elapsed);

            if line.elapsed > limit {
                log::warn!(
                    "answer took {:.1}s, limit is {:.1}s",
                    line.elapsed.as_secs_f64(),
                    limit.as_secs_f64()
                );
                return Err(RoundError::Timeout {
                    target_length,
                    elapsed: line.elapsed,
                    limit,
                });
            }

            if line.text.to_lowercase() == QUIT_COMMAND {
                return Ok(Round {
                    target_length,
                    elapsed: line.elapsed,
                    submission: Submission::Quit,
                    attempts,
                });
            }

            if !validate_word_length(&line.text, target_length as i64) {
                print_length_mismatch(out, target_length)?;
                continue;
            }

            return Ok(Round {
                target_length,
                elapsed: line.elapsed,
                submission: Submission::Word(line.text),
                attempts,
            });
        }
    }
}
