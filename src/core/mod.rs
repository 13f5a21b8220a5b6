//! Core scoring and validation
//!
//! Pure functions and immutable tables with no I/O. Everything here is
//! deterministic and cheap to test.

mod length;
mod letters;
mod scoring;

pub use length::validate_word_length;
pub use letters::LetterValues;
pub use scoring::{ScoreError, calculate_score};
