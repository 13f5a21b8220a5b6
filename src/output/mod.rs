//! Terminal output formatting
//!
//! Display utilities for game messages, summaries and command results.

pub mod display;
pub mod formatters;

pub use display::{print_summary, print_word_reports};
