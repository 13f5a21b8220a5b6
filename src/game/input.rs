//! Line input with post-hoc timing
//!
//! The round controller only needs one capability from the outside world:
//! block for a line and report how long the wait took.

use std::io::{self, BufRead};
use std::time::{Duration, Instant};

/// One line of user input and the time spent waiting for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    pub text: String,
    pub elapsed: Duration,
}

/// Source of user answers
pub trait LineSource {
    /// Block until a full line is available
    ///
    /// Returns `Ok(None)` once input is exhausted. The line terminator is
    /// stripped; other whitespace is preserved.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying reader.
    fn read_timed_line(&mut self) -> io::Result<Option<TimedLine>>;
}

/// Reads from a buffered reader, timing each blocking read
///
/// Timing starts when the read begins and stops when it returns, so the
/// limit is checked after the fact rather than interrupting a slow answer.
pub struct BlockingLineSource<R> {
    reader: R,
}

impl<R: BufRead> BlockingLineSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BlockingLineSource<R> {
    fn read_timed_line(&mut self) -> io::Result<Option<TimedLine>> {
        let start = Instant::now();
        let mut text = String::new();
        let read = self.reader.read_line(&mut text)?;
        let elapsed = start.elapsed();

        if read == 0 {
            return Ok(None);
        }

        strip_line_ending(&mut text);
        Ok(Some(TimedLine { text, elapsed }))
    }
}

fn strip_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// Pre-recorded answers with simulated response times
#[cfg(test)]
pub(crate) struct ScriptedLines {
    lines: std::collections::VecDeque<TimedLine>,
}

#[cfg(test)]
impl ScriptedLines {
    /// Answers that all arrive after `delay`
    pub(crate) fn new<'a>(answers: impl IntoIterator<Item = &'a str>, delay: Duration) -> Self {
        Self::timed(answers.into_iter().map(|a| (a, delay)))
    }

    pub(crate) fn timed<'a>(answers: impl IntoIterator<Item = (&'a str, Duration)>) -> Self {
        let lines = answers
            .into_iter()
            .map(|(text, elapsed)| TimedLine {
                text: text.to_string(),
                elapsed,
            })
            .collect();
        Self { lines }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedLines {
    fn read_timed_line(&mut self) -> io::Result<Option<TimedLine>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blocking_source_strips_terminators() {
        let mut source = BlockingLineSource::new(Cursor::new("hello\nworld\r\n last \n"));

        let first = source.read_timed_line().unwrap().unwrap();
        assert_eq!(first.text, "hello");
        assert_eq!(source.read_timed_line().unwrap().unwrap().text, "world");
        assert_eq!(source.read_timed_line().unwrap().unwrap().text, " last ");
        assert!(source.read_timed_line().unwrap().is_none());
    }

    #[test]
    fn blocking_source_final_line_without_newline() {
        let mut source = BlockingLineSource::new(Cursor::new("quit"));
        assert_eq!(source.read_timed_line().unwrap().unwrap().text, "quit");
        assert!(source.read_timed_line().unwrap().is_none());
    }

    #[test]
    fn blocking_source_measures_fast_reads() {
        let mut source = BlockingLineSource::new(Cursor::new("hello\n"));
        let line = source.read_timed_line().unwrap().unwrap();
        assert!(line.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut source = BlockingLineSource::new(Cursor::new("\n"));
        assert_eq!(source.read_timed_line().unwrap().unwrap().text, "");
    }

    #[test]
    fn scripted_lines_replay_in_order() {
        let mut source = ScriptedLines::timed([
            ("one", Duration::from_secs(1)),
            ("two", Duration::from_secs(20)),
        ]);

        let first = source.read_timed_line().unwrap().unwrap();
        assert_eq!(first.elapsed, Duration::from_secs(1));
        assert_eq!(source.remaining(), 1);
        let second = source.read_timed_line().unwrap().unwrap();
        assert_eq!(second.text, "two");
        assert_eq!(second.elapsed, Duration::from_secs(20));
        assert!(source.read_timed_line().unwrap().is_none());
    }
}
