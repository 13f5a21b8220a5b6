//! Scrabble Score
//!
//! A timed, round-based word game: enter a word of the requested length
//! before the clock runs out and earn its Scrabble tile value.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_score::core::{LetterValues, validate_word_length};
//! use scrabble_score::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! assert!(dictionary.is_valid_word("Cabbage"));
//! assert!(validate_word_length("cabbage", 7));
//! assert_eq!(LetterValues::STANDARD.score("cabbage").unwrap(), 14);
//! ```

// Scoring and validation
pub mod core;

// Dictionary
pub mod wordlists;

// Rounds and the session loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
