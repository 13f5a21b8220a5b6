//! Word list loading utilities
//!
//! Builds a `Dictionary` from a file or from any line-oriented reader.

use super::dictionary::Dictionary;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Load a dictionary from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabble_score::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(word_lines(content.lines())))
}

/// Load a dictionary from a buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading a line fails.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(Dictionary::from_words(word_lines(
        lines.iter().map(String::as_str),
    )))
}

fn word_lines<'a>(lines: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_skips_blanks_and_comments() {
        let input = "# header\nhello\n\n  World  \n#ignored\n";
        let dictionary = load_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_valid_word("hello"));
        assert!(dictionary.is_valid_word("world"));
        assert!(!dictionary.is_valid_word("ignored"));
    }

    #[test]
    fn reader_empty() {
        let dictionary = load_from_reader(Cursor::new("")).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn missing_file_is_error() {
        assert!(load_from_file("definitely/not/a/real/wordlist.txt").is_err());
    }

    #[test]
    fn load_from_bundled_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");
        let dictionary = load_from_file(path).unwrap();
        assert_eq!(dictionary.len(), Dictionary::embedded().len());
    }
}
