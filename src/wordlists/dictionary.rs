//! Dictionary membership
//!
//! A read-only set of lowercase words, built once and shared by reference.

use super::embedded::WORDS;
use rustc_hash::FxHashSet;

/// Immutable set of known words
///
/// Entries are stored lowercase; lookups lowercase the query first.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Entries are trimmed and lowercased. Empty entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    /// The dictionary bundled with the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Check whether a word is in the dictionary, ignoring case
    ///
    /// # Examples
    /// ```
    /// use scrabble_score::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["hello", "world"]);
    /// assert!(dictionary.is_valid_word("HeLLo"));
    /// assert!(!dictionary.is_valid_word("xyzzy"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word of a given character length
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(move |w| w.chars().count() == length)
            .map(String::as_str)
    }
}
