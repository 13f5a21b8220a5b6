//! Word scoring command
//!
//! Scores words given on the command line without starting a game.

use crate::core::{LetterValues, ScoreError};
use crate::wordlists::Dictionary;

/// Score and dictionary status for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    /// Character count
    pub length: usize,
    pub score: Result<u32, ScoreError>,
    pub in_dictionary: bool,
}

/// Score each word and look it up in the dictionary
///
/// Invalid words are reported in place rather than aborting the batch.
pub fn score_words<S: AsRef<str>>(
    words: &[S],
    letters: &LetterValues,
    dictionary: &Dictionary,
) -> Vec<WordReport> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            WordReport {
                word: word.to_string(),
                length: word.chars().count(),
                score: letters.score(word),
                in_dictionary: dictionary.is_valid_word(word),
            }
        })
        .collect()
}
