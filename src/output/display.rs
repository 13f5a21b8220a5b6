//! Display functions for game messages and command results
//!
//! Every function writes to a caller-supplied writer so sessions can be
//! captured in tests. Lines that players read back are colored as a whole.

use super::formatters::{format_seconds, plural, score_bar};
use crate::commands::WordReport;
use crate::game::{GameSummary, Phase};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

/// Ask for a word of the given length
pub fn print_prompt<W: Write>(out: &mut W, length: usize, limit: Duration) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Please enter a word of length {length}. You have {} seconds.",
            format_seconds(limit)
        )
        .bright_cyan()
    )?;
    writeln!(out, "Enter 'quit' to exit the game at any time.\n")?;
    out.flush()
}

pub fn print_length_mismatch<W: Write>(out: &mut W, length: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Word must be {length} characters long.").yellow()
    )
}

/// Report a recoverable round failure
pub fn print_error<W: Write>(out: &mut W, error: &impl Display) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {error}").red())
}

pub fn print_invalid_word<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Invalid word. Try again.".red())
}

pub fn print_word_score<W: Write>(out: &mut W, score: u32) -> io::Result<()> {
    writeln!(out, "{}", format!("Word score: {score}").green().bold())
}

pub fn print_quit<W: Write>(out: &mut W, total: u32) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("You chose to quit. Your total score is {total}.").bright_yellow()
    )
}

pub fn print_game_over<W: Write>(out: &mut W, total: u32) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Game over. Your total score is {total}.")
            .bright_green()
            .bold()
    )
}

/// Print the end-of-session summary table
pub fn print_summary<W: Write>(out: &mut W, summary: &GameSummary) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, " {} ", "SESSION SUMMARY".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;

    let outcome = match summary.outcome {
        Phase::Complete => "completed",
        _ => "ended early",
    };
    writeln!(
        out,
        "\n   Rounds:       {}/{} ({outcome})",
        summary.rounds_completed, summary.round_limit
    )?;
    writeln!(out, "   Total score:  {}", summary.total_score)?;
    writeln!(out, "   Timeouts:     {}", plural(summary.timeouts, "round"))?;
    writeln!(
        out,
        "   Rejected:     {}",
        plural(summary.rejected_words, "word")
    )?;

    if summary.scored.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n   {}", "Words played:".bright_cyan().bold())?;
    let best = summary.scored.iter().map(|r| r.score).max().unwrap_or(0);
    for (i, round) in summary.scored.iter().enumerate() {
        writeln!(
            out,
            "   {:>2}. {:<10} {:>3} {} {}s",
            i + 1,
            round.word.to_uppercase(),
            round.score,
            score_bar(round.score, best, 20).green(),
            format_seconds(round.elapsed)
        )?;
    }

    Ok(())
}

/// Print results of the `score` command
pub fn print_word_reports<W: Write>(out: &mut W, reports: &[WordReport]) -> io::Result<()> {
    for report in reports {
        let status = if report.in_dictionary {
            "in dictionary".green()
        } else {
            "not in dictionary".yellow()
        };

        match &report.score {
            Ok(score) => writeln!(
                out,
                "{:<12} {:>3} points  {} letters  {status}",
                report.word,
                score,
                report.length
            )?,
            Err(e) => writeln!(
                out,
                "{:<12} {}",
                report.word,
                format!("Error: {e}").red()
            )?,
        }
    }

    Ok(())
}
