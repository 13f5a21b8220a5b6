//! Interactive play command
//!
//! Runs one game session on the given console and prints the summary.

use crate::game::{Game, GameSummary, LineSource};
use crate::output::print_summary;
use rand::Rng;
use std::io::{self, Write};

/// Play a session and print its summary
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S, W, R>(
    game: &Game<'_>,
    input: &mut S,
    out: &mut W,
    rng: &mut R,
) -> io::Result<GameSummary>
where
    S: LineSource,
    W: Write,
    R: Rng,
{
    let summary = game.play(input, out, rng)?;
    print_summary(out, &summary)?;
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterValues;
    use crate::game::{BlockingLineSource, GameConfig, Phase};
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn play_from_reader_prints_summary() {
        let dictionary = Dictionary::embedded();
        let config = GameConfig::new(10, Duration::from_secs(15), 5, 5).unwrap();
        let game = Game::new(&LetterValues::STANDARD, &dictionary, config);

        let mut input = BlockingLineSource::new(Cursor::new("hello\nquiz\nquit\n"));
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        let summary = run_play(&game, &mut input, &mut out, &mut rng).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(summary.outcome, Phase::Quit);
        assert_eq!(summary.rounds_completed, 1);
        assert!(output.contains("Word must be 5 characters long."));
        assert!(output.contains("SESSION SUMMARY"));
        assert!(output.contains("HELLO"));
    }
}
