//! Word scoring
//!
//! Sums letter values for a word, rejecting anything that is not purely alphabetic.

use super::letters::LetterValues;
use thiserror::Error;

/// Error type for words that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Input must be alphabetic")]
    Empty,
    #[error("Input must be alphabetic (found {found:?} at position {position})")]
    NonAlphabetic { found: char, position: usize },
}

impl LetterValues {
    /// Score a word against this table
    ///
    /// # Errors
    /// Returns `ScoreError` if the word is empty or contains any character
    /// other than an ASCII letter (digits, whitespace, punctuation, accented letters).
    pub fn score(&self, word: &str) -> Result<u32, ScoreError> {
        if word.is_empty() {
            return Err(ScoreError::Empty);
        }

        word.chars().enumerate().try_fold(0u32, |total, (position, ch)| {
            self.value(ch)
                .map(|points| total + points)
                .ok_or(ScoreError::NonAlphabetic { found: ch, position })
        })
    }
}

/// Score a word with the standard tile values
///
/// # Errors
/// Returns `ScoreError` if the word is not purely alphabetic.
///
/// # Examples
/// ```
/// use scrabble_score::core::calculate_score;
///
/// assert_eq!(calculate_score("cabbage").unwrap(), 14);
/// assert_eq!(calculate_score("CABbAge").unwrap(), 14);
/// assert!(calculate_score("cab123").is_err());
/// ```
pub fn calculate_score(word: &str) -> Result<u32, ScoreError> {
    LetterValues::STANDARD.score(word)
}
