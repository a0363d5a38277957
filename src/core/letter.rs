//! Puzzle letters and tiles
//!
//! A `Letter` is a single ASCII letter normalized to lowercase at construction,
//! so every comparison in the crate works on one case.

use std::fmt;

/// A single puzzle letter, always stored as a lowercase ASCII byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Letter;
    ///
    /// let letter = Letter::new('Q').unwrap();
    /// assert_eq!(letter.as_char(), 'q');
    ///
    /// assert!(Letter::new('7').is_none());
    /// assert!(Letter::new('é').is_none());
    /// ```
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            // ASCII alphabetic chars always fit in one byte
            Some(Self(c.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    /// Create a letter from a raw byte, normalizing to lowercase
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// The lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// The lowercase byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Check whether a normalized word contains this letter
    #[inline]
    #[must_use]
    pub fn appears_in(self, word: &str) -> bool {
        word.as_bytes().contains(&self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the seven selectable letters of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: Letter,
    pub is_center: bool,
}

impl Tile {
    #[must_use]
    pub const fn new(letter: Letter, is_center: bool) -> Self {
        Self { letter, is_center }
    }
}

/// Distinct letters of a word in order of first appearance
///
/// Stops early once more than `limit` distinct letters have been seen, so
/// callers checking for an exact count never scan further than they must.
/// Returns `None` if the word contains a non-letter.
#[must_use]
pub fn distinct_letters(word: &str, limit: usize) -> Option<Vec<Letter>> {
    let mut seen: Vec<Letter> = Vec::with_capacity(limit + 1);
    for byte in word.bytes() {
        let letter = Letter::from_byte(byte)?;
        if !seen.contains(&letter) {
            seen.push(letter);
            if seen.len() > limit {
                break;
            }
        }
    }
    Some(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_uppercase_normalized() {
        assert_eq!(Letter::new('A'), Letter::new('a'));
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'z');
        assert_eq!(Letter::from_byte(b'M').unwrap().as_byte(), b'm');
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('-').is_none());
        assert!(Letter::new('3').is_none());
        assert!(Letter::from_byte(b'\'').is_none());
    }

    #[test]
    fn letter_appears_in() {
        let h = Letter::new('h').unwrap();
        assert!(h.appears_in("heating"));
        assert!(!h.appears_in("painted"));
    }

    #[test]
    fn letter_display() {
        let letter = Letter::new('G').unwrap();
        assert_eq!(format!("{letter}"), "g");
    }

    #[test]
    fn distinct_letters_first_appearance_order() {
        let letters = distinct_letters("tabletop", 7).unwrap();
        let text: String = letters.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "tableop");
    }

    #[test]
    fn distinct_letters_stops_after_limit() {
        // "background" has 10 distinct letters; the scan stops at the 8th
        let letters = distinct_letters("background", 7).unwrap();
        assert_eq!(letters.len(), 8);
    }

    #[test]
    fn distinct_letters_rejects_non_letters() {
        assert!(distinct_letters("co-op", 7).is_none());
    }
}
