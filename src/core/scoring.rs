//! Word scoring rules
//!
//! A four-letter word is worth a flat 1 point; longer words are worth one point
//! per letter. A word that uses every tile letter at least once is a pangram and
//! earns a bonus on top.

use super::Tile;
use std::fmt;

/// Bonus awarded for a pangram in the standard game
pub const PANGRAM_BONUS: u32 = 7;

/// Minimum accepted word length in the standard game
pub const MIN_WORD_LENGTH: usize = 4;

/// Check whether `word` uses every tile letter at least once
///
/// # Examples
/// ```
/// use spelling_bee::core::{Letter, Tile, is_pangram};
///
/// let tiles: Vec<Tile> = "heating"
///     .chars()
///     .enumerate()
///     .map(|(i, c)| Tile::new(Letter::new(c).unwrap(), i == 0))
///     .collect();
///
/// assert!(is_pangram("heating", &tiles));
/// assert!(!is_pangram("thing", &tiles));
/// ```
#[must_use]
pub fn is_pangram(word: &str, tiles: &[Tile]) -> bool {
    tiles.iter().all(|tile| tile.letter.appears_in(word))
}

/// Points for the length of a word, without any pangram bonus
#[inline]
#[must_use]
pub const fn length_points(len: usize) -> u32 {
    if len == MIN_WORD_LENGTH { 1 } else { len as u32 }
}

/// Score a validated word against the current tiles
///
/// The pangram check looks at the entered word itself, not at any dictionary entry.
#[must_use]
pub fn score_word(word: &str, tiles: &[Tile], pangram_bonus: u32) -> u32 {
    let base = if is_pangram(word, tiles) {
        pangram_bonus
    } else {
        0
    };
    base + length_points(word.len())
}

/// Progress rank for a round, from the share of the maximum score reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Beginner,
    GoodStart,
    MovingUp,
    Good,
    Solid,
    Nice,
    Great,
    Amazing,
    Genius,
    QueenBee,
}

impl Rank {
    /// Every rank with the percentage of the maximum score needed to reach it
    pub const THRESHOLDS: [(Self, u32); 10] = [
        (Self::Beginner, 0),
        (Self::GoodStart, 2),
        (Self::MovingUp, 5),
        (Self::Good, 8),
        (Self::Solid, 15),
        (Self::Nice, 25),
        (Self::Great, 40),
        (Self::Amazing, 50),
        (Self::Genius, 70),
        (Self::QueenBee, 100),
    ];

    /// Rank for `score` out of `max_score`
    #[must_use]
    pub fn for_score(score: u32, max_score: u32) -> Self {
        if max_score == 0 {
            return Self::Beginner;
        }
        let reached = u64::from(score) * 100;
        Self::THRESHOLDS
            .iter()
            .rev()
            .find(|&&(_, pct)| reached >= u64::from(pct) * u64::from(max_score))
            .map_or(Self::Beginner, |&(rank, _)| rank)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::GoodStart => "Good Start",
            Self::MovingUp => "Moving Up",
            Self::Good => "Good",
            Self::Solid => "Solid",
            Self::Nice => "Nice",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
            Self::Genius => "Genius",
            Self::QueenBee => "Queen Bee",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
