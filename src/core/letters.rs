//! Letter value table
//!
//! Maps each of the 26 ASCII letters to its Scrabble point value.

use std::fmt;

/// Immutable letter-to-points table
///
/// Lookups are case-insensitive. Every letter A-Z has exactly one value in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterValues {
    values: [u8; 26],
}

impl LetterValues {
    /// Standard English Scrabble tile values
    pub const STANDARD: Self = Self::from_groups(&[
        ("AEIOULNRST", 1),
        ("DG", 2),
        ("BCMP", 3),
        ("FHVWY", 4),
        ("K", 5),
        ("JX", 8),
        ("QZ", 10),
    ]);

    /// Build a table from `(letters, points)` groups
    ///
    /// Letters not named in any group are left at zero, which `is_complete` reports.
    const fn from_groups(groups: &[(&str, u8)]) -> Self {
        let mut values = [0u8; 26];
        let mut g = 0;
        while g < groups.len() {
            let (letters, points) = groups[g];
            let bytes = letters.as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                values[(bytes[i] - b'A') as usize] = points;
                i += 1;
            }
            g += 1;
        }
        Self { values }
    }

    /// Point value of a letter, or `None` for anything outside A-Z / a-z
    ///
    /// # Examples
    /// ```
    /// use scrabble_score::core::LetterValues;
    ///
    /// let table = LetterValues::STANDARD;
    /// assert_eq!(table.value('q'), Some(10));
    /// assert_eq!(table.value('Q'), Some(10));
    /// assert_eq!(table.value('7'), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value(&self, letter: char) -> Option<u32> {
        if letter.is_ascii_alphabetic() {
            let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
            Some(self.values[index] as u32)
        } else {
            None
        }
    }

    /// Whether every letter has a value in `1..=10`
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|&v| (1..=10).contains(&v))
    }

    /// Iterate `(letter, points)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        (b'A'..=b'Z').zip(self.values.iter()).map(|(letter, &v)| (char::from(letter), u32::from(v)))
    }
}

impl Default for LetterValues {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for LetterValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (letter, points) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{letter}={points}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_complete() {
        assert!(LetterValues::STANDARD.is_complete());
        assert_eq!(LetterValues::STANDARD.iter().count(), 26);
    }

    #[test]
    fn standard_values_match_tile_groups() {
        let table = LetterValues::STANDARD;
        for (letters, points) in [
            ("AEIOULNRST", 1),
            ("DG", 2),
            ("BCMP", 3),
            ("FHVWY", 4),
            ("K", 5),
            ("JX", 8),
            ("QZ", 10),
        ] {
            for letter in letters.chars() {
                assert_eq!(table.value(letter), Some(points), "letter {letter}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = LetterValues::STANDARD;
        for (upper, points) in table.iter() {
            assert_eq!(table.value(upper.to_ascii_lowercase()), Some(points));
        }
    }

    #[test]
    fn non_letters_have_no_value() {
        let table = LetterValues::STANDARD;
        assert_eq!(table.value('1'), None);
        assert_eq!(table.value(' '), None);
        assert_eq!(table.value('-'), None);
        assert_eq!(table.value('é'), None);
    }

    #[test]
    fn partial_table_is_incomplete() {
        let table = LetterValues::from_groups(&[("AEIOU", 1)]);
        assert!(!table.is_complete());
        assert_eq!(table.value('b'), Some(0));
    }

    #[test]
    fn display_lists_all_letters() {
        let text = LetterValues::STANDARD.to_string();
        assert!(text.starts_with("A=1 B=3 C=3"));
        assert!(text.ends_with("Z=10"));
    }
}
