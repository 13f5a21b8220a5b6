//! Word length validation

/// Check whether a word has exactly `length` characters
///
/// Counts Unicode scalar values, not bytes. Negative lengths never match.
///
/// # Examples
/// ```
/// use scrabble_score::core::validate_word_length;
///
/// assert!(validate_word_length("hello", 5));
/// assert!(!validate_word_length("hello", 6));
/// ```
#[must_use]
pub fn validate_word_length(word: &str, length: i64) -> bool {
    usize::try_from(length).is_ok_and(|expected| word.chars().count() == expected)
}
