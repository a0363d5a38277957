//! Core domain types for the puzzle
//!
//! Letters, tiles and the scoring rules. Everything here is pure and has no
//! knowledge of the dictionary or of round state.

mod letter;
mod scoring;

pub use letter::{Letter, Tile, distinct_letters};
pub use scoring::{MIN_WORD_LENGTH, PANGRAM_BONUS, Rank, is_pangram, length_points, score_word};
