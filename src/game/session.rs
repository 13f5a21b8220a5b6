//! Game loop
//!
//! Drives rounds until the round limit is reached or the player quits,
//! checking each word against the dictionary and accumulating the score.

use super::config::GameConfig;
use super::input::LineSource;
use super::round::{Round, RoundController, RoundError, Submission};
use crate::core::LetterValues;
use crate::output::display::{
    print_error, print_game_over, print_invalid_word, print_quit, print_word_score,
};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;

/// Session state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The last round timed out; the next iteration resumes play
    TimedOutRound,
    Quit,
    Complete,
}

/// A word that was accepted and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRound {
    pub word: String,
    pub score: u32,
    pub elapsed: Duration,
}

/// Final state of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub total_score: u32,
    pub rounds_completed: u32,
    pub round_limit: u32,
    /// Either `Phase::Quit` or `Phase::Complete`
    pub outcome: Phase,
    pub timeouts: u32,
    pub rejected_words: u32,
    pub scored: Vec<ScoredRound>,
}

/// Mutable per-game state, owned by the loop
#[derive(Debug)]
struct Session {
    total_score: u32,
    rounds_completed: u32,
    round_limit: u32,
    phase: Phase,
    timeouts: u32,
    rejected_words: u32,
    scored: Vec<ScoredRound>,
}

impl Session {
    const fn new(round_limit: u32) -> Self {
        Self {
            total_score: 0,
            rounds_completed: 0,
            round_limit,
            phase: Phase::Running,
            timeouts: 0,
            rejected_words: 0,
            scored: Vec::new(),
        }
    }

    const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::TimedOutRound)
            && self.rounds_completed < self.round_limit
    }

    fn record(&mut self, round: ScoredRound) {
        self.total_score += round.score;
        self.rounds_completed += 1;
        self.scored.push(round);
        self.phase = if self.rounds_completed >= self.round_limit {
            Phase::Complete
        } else {
            Phase::Running
        };
    }

    fn into_summary(self) -> GameSummary {
        GameSummary {
            total_score: self.total_score,
            rounds_completed: self.rounds_completed,
            round_limit: self.round_limit,
            outcome: self.phase,
            timeouts: self.timeouts,
            rejected_words: self.rejected_words,
            scored: self.scored,
        }
    }
}

/// A configured game, borrowing the shared letter table and dictionary
pub struct Game<'a> {
    letters: &'a LetterValues,
    dictionary: &'a Dictionary,
    config: GameConfig,
}

impl<'a> Game<'a> {
    #[must_use]
    pub const fn new(letters: &'a LetterValues, dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self {
            letters,
            dictionary,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play a full session
    ///
    /// Rounds that time out, use a word outside the dictionary or fail to
    /// score are reported and do not count toward the round limit.
    ///
    /// # Errors
    /// Returns an I/O error if reading input or writing output fails. No
    /// game outcome is an error.
    pub fn play<S, W, R>(&self, input: &mut S, out: &mut W, rng: &mut R) -> io::Result<GameSummary>
    where
        S: LineSource,
        W: Write,
        R: Rng,
    {
        let controller = RoundController::new(&self.config);
        let mut session = Session::new(self.config.rounds());
        log::info!(
            "starting game: {} rounds, {:?} limit, lengths {:?}",
            self.config.rounds(),
            self.config.time_limit(),
            self.config.lengths()
        );

        while session.is_active() {
            match controller.acquire(input, out, rng) {
                Ok(Round {
                    submission: Submission::Quit,
                    ..
                }) => {
                    print_quit(out, session.total_score)?;
                    session.phase = Phase::Quit;
                }
                Ok(Round {
                    submission: Submission::Word(word),
                    elapsed,
                    ..
                }) => self.judge(word, elapsed, &mut session, out)?,
                Err(e @ RoundError::Timeout { .. }) => {
                    print_error(out, &e)?;
                    session.timeouts += 1;
                    session.phase = Phase::TimedOutRound;
                }
                Err(RoundError::Io(e)) => return Err(e),
            }
        }

        if session.phase == Phase::Complete {
            print_game_over(out, session.total_score)?;
        }
        log::info!(
            "game ended ({:?}): {} points over {} rounds",
            session.phase,
            session.total_score,
            session.rounds_completed
        );

        Ok(session.into_summary())
    }

    /// Check a length-valid word against the dictionary and score it
    fn judge<W: Write>(
        &self,
        word: String,
        elapsed: Duration,
        session: &mut Session,
        out: &mut W,
    ) -> io::Result<()> {
        session.phase = Phase::Running;

        if !self.dictionary.is_valid_word(&word) {
            log::debug!("rejected {word:?}: not in dictionary");
            session.rejected_words += 1;
            return print_invalid_word(out);
        }

        match self.letters.score(&word) {
            Ok(score) => {
                print_word_score(out, score)?;
                session.record(ScoredRound {
                    word,
                    score,
                    elapsed,
                });
                Ok(())
            }
            Err(e) => {
                session.rejected_words += 1;
                print_error(out, &e)
            }
        }
    }
}
