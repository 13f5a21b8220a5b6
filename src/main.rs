//! Scrabble Score - CLI
//!
//! Timed word-scoring game on the terminal, plus a one-shot scoring mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrabble_score::{
    commands::{run_play, score_words},
    core::LetterValues,
    game::{
        BlockingLineSource, DEFAULT_LENGTHS, DEFAULT_ROUNDS, DEFAULT_TIME_LIMIT, Game, GameConfig,
    },
    output::print_word_reports,
    wordlists::{Dictionary, loader::load_from_file},
};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "scrabble_score",
    about = "Enter words of a random length against the clock and score Scrabble points",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load the dictionary from a file (one word per line) instead of the bundled list
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the timed game (default)
    Play {
        /// Number of scored rounds
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,

        /// Seconds allowed per answer
        #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT.as_secs_f64())]
        time_limit: f64,

        /// Shortest word length to ask for
        #[arg(long, default_value_t = *DEFAULT_LENGTHS.start())]
        min_length: usize,

        /// Longest word length to ask for
        #[arg(long, default_value_t = *DEFAULT_LENGTHS.end())]
        max_length: usize,

        /// Seed for the word length sequence
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score words without playing
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Play {
            rounds: DEFAULT_ROUNDS,
            time_limit: DEFAULT_TIME_LIMIT.as_secs_f64(),
            min_length: *DEFAULT_LENGTHS.start(),
            max_length: *DEFAULT_LENGTHS.end(),
            seed: None,
        }
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {path}"))?,
        None => Dictionary::embedded(),
    };

    if dictionary.is_empty() {
        anyhow::bail!("dictionary contains no words");
    }
    log::debug!("dictionary loaded: {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Built once, shared by reference for the rest of the process
    let letters = LetterValues::STANDARD;
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Play {
            rounds,
            time_limit,
            min_length,
            max_length,
            seed,
        } => run_play_command(
            &letters,
            &dictionary,
            rounds,
            time_limit,
            (min_length, max_length),
            seed,
        ),
        Commands::Score { words } => {
            let reports = score_words(&words, &letters, &dictionary);
            print_word_reports(&mut io::stdout().lock(), &reports)?;
            Ok(())
        }
    }
}

fn run_play_command(
    letters: &LetterValues,
    dictionary: &Dictionary,
    rounds: u32,
    time_limit: f64,
    (min_length, max_length): (usize, usize),
    seed: Option<u64>,
) -> Result<()> {
    let time_limit = Duration::try_from_secs_f64(time_limit)
        .with_context(|| format!("invalid time limit: {time_limit}"))?;
    let config = GameConfig::new(rounds, time_limit, min_length, max_length)?;
    let game = Game::new(letters, dictionary, config);

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut input = BlockingLineSource::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    run_play(&game, &mut input, &mut out, &mut rng).context("game aborted")?;
    Ok(())
}
