//! Live round state
//!
//! Owned exclusively by the engine. The presentation layer only ever sees it
//! through shared references.

use super::flag::InvalidFlag;
use crate::core::{Letter, Rank, Tile, distinct_letters, is_pangram};
use crate::dictionary::PUZZLE_LETTERS;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// One puzzle round
///
/// `tiles[0]` is always the center tile; the other six can be reordered by a shuffle.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    pangram: String,
    tiles: [Tile; PUZZLE_LETTERS],
    entered: String,
    accepted: Vec<String>,
    score: u32,
    invalid: InvalidFlag,
    max_score: u32,
    solution_count: usize,
}

impl PuzzleState {
    /// Derive a fresh round from a seed word
    ///
    /// The distinct letters become the tiles in order of first appearance; the
    /// first one is the center. `None` unless there are exactly seven.
    pub(crate) fn from_pangram(pangram: &str) -> Option<Self> {
        let letters = distinct_letters(pangram, PUZZLE_LETTERS)?;
        if letters.len() != PUZZLE_LETTERS {
            return None;
        }
        let tiles = std::array::from_fn(|i| Tile::new(letters[i], i == 0));

        Some(Self {
            pangram: pangram.to_ascii_lowercase(),
            tiles,
            entered: String::new(),
            accepted: Vec::new(),
            score: 0,
            invalid: InvalidFlag::default(),
            max_score: 0,
            solution_count: 0,
        })
    }

    pub(crate) fn with_totals(mut self, max_score: u32, solution_count: usize) -> Self {
        self.max_score = max_score;
        self.solution_count = solution_count;
        self
    }

    /// The seed word this round was built from
    #[must_use]
    pub fn pangram(&self) -> &str {
        &self.pangram
    }

    #[must_use]
    pub const fn tiles(&self) -> &[Tile; PUZZLE_LETTERS] {
        &self.tiles
    }

    #[must_use]
    pub const fn center_tile(&self) -> Tile {
        self.tiles[0]
    }

    #[must_use]
    pub const fn center_letter(&self) -> Letter {
        self.tiles[0].letter
    }

    /// The six non-center tiles in display order
    #[must_use]
    pub fn outer_tiles(&self) -> &[Tile] {
        &self.tiles[1..]
    }

    /// The tile for a typed character, if it is one of this round's letters
    #[must_use]
    pub fn tile_for(&self, c: char) -> Option<Tile> {
        let letter = Letter::new(c)?;
        self.tiles.iter().copied().find(|tile| tile.letter == letter)
    }

    /// Letters typed but not yet submitted
    #[must_use]
    pub fn entered(&self) -> &str {
        &self.entered
    }

    /// Accepted words in the order they were found
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.accepted.iter().any(|found| found == word)
    }

    /// Accepted words that use every tile letter
    pub fn found_pangrams(&self) -> impl Iterator<Item = &str> {
        self.accepted
            .iter()
            .map(String::as_str)
            .filter(|word| is_pangram(word, &self.tiles))
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether the "not a word" indicator is showing
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid.is_set()
    }

    /// Score of finding every playable word
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Number of playable words in the dictionary
    #[must_use]
    pub const fn solution_count(&self) -> usize {
        self.solution_count
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::for_score(self.score, self.max_score)
    }

    pub(crate) fn push_letter(&mut self, letter: Letter) {
        self.entered.push(letter.as_char());
    }

    pub(crate) fn pop_letter(&mut self) {
        self.entered.pop();
    }

    pub(crate) fn clear_entered(&mut self) {
        self.entered.clear();
    }

    pub(crate) fn shuffle_outer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles[1..].shuffle(rng);
    }

    /// Record the entered word as found and clear the buffer
    pub(crate) fn commit(&mut self, points: u32) -> String {
        let word = std::mem::take(&mut self.entered);
        self.accepted.push(word.clone());
        self.score += points;
        word
    }

    pub(crate) fn raise_invalid(&mut self, now: Instant, display: Duration) {
        self.invalid.raise(now, display);
    }

    pub(crate) fn expire_invalid(&mut self, now: Instant) -> bool {
        self.invalid.expire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tiles_follow_first_appearance() {
        let state = PuzzleState::from_pangram("tabletop").unwrap();
        let letters: String = state.tiles().iter().map(|t| t.letter.as_char()).collect();
        assert_eq!(letters, "tableop");
        assert_eq!(state.center_letter(), Letter::new('t').unwrap());
    }

    #[test]
    fn exactly_one_center_tile() {
        let state = PuzzleState::from_pangram("heating").unwrap();
        assert_eq!(state.tiles().iter().filter(|t| t.is_center).count(), 1);
        assert!(state.center_tile().is_center);
        assert!(state.outer_tiles().iter().all(|t| !t.is_center));
        assert_eq!(state.outer_tiles().len(), 6);
    }

    #[test]
    fn seed_needs_seven_distinct_letters() {
        assert!(PuzzleState::from_pangram("thing").is_none());
        assert!(PuzzleState::from_pangram("mountains").is_none());
        assert!(PuzzleState::from_pangram("co-op").is_none());
    }

    #[test]
    fn uppercase_seed_normalized() {
        let state = PuzzleState::from_pangram("HEATING").unwrap();
        assert_eq!(state.pangram(), "heating");
        assert_eq!(state.center_letter().as_char(), 'h');
    }

    #[test]
    fn tile_for_typed_letter() {
        let state = PuzzleState::from_pangram("heating").unwrap();
        assert_eq!(state.tile_for('H'), Some(state.center_tile()));
        assert!(state.tile_for('g').is_some_and(|t| !t.is_center));
        assert_eq!(state.tile_for('z'), None);
        assert_eq!(state.tile_for('1'), None);
    }

    #[test]
    fn shuffle_keeps_center_and_letters() {
        let mut state = PuzzleState::from_pangram("heating").unwrap();
        let mut before: Vec<Tile> = state.tiles().to_vec();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            state.shuffle_outer(&mut rng);
            assert_eq!(state.tiles()[0], before[0]);
        }
        let mut after: Vec<Tile> = state.tiles().to_vec();
        before.sort_by_key(|t| t.letter);
        after.sort_by_key(|t| t.letter);
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_reorders_outer_tiles() {
        let mut state = PuzzleState::from_pangram("heating").unwrap();
        let original: Vec<Tile> = state.outer_tiles().to_vec();
        let mut rng = StdRng::seed_from_u64(17);

        let mut reordered = false;
        for _ in 0..20 {
            state.shuffle_outer(&mut rng);
            let outer = state.outer_tiles();
            reordered |= outer != original.as_slice();

            // Still the same six tiles, each exactly once
            let mut sorted = outer.to_vec();
            sorted.sort_by_key(|t| t.letter);
            let mut expected = original.clone();
            expected.sort_by_key(|t| t.letter);
            assert_eq!(sorted, expected);
        }
        assert!(reordered, "twenty shuffles never changed the outer order");
    }

    #[test]
    fn commit_records_word_and_score() {
        let mut state = PuzzleState::from_pangram("heating").unwrap();
        for c in "thing".chars() {
            state.push_letter(Letter::new(c).unwrap());
        }
        let word = state.commit(5);

        assert_eq!(word, "thing");
        assert_eq!(state.entered(), "");
        assert_eq!(state.accepted_words(), ["thing"]);
        assert_eq!(state.score(), 5);
        assert!(state.has_found("thing"));
    }

    #[test]
    fn found_pangrams_filters_accepted() {
        let mut state = PuzzleState::from_pangram("heating").unwrap();
        for word in ["thin", "heating"] {
            for c in word.chars() {
                state.push_letter(Letter::new(c).unwrap());
            }
            state.commit(1);
        }
        assert_eq!(state.found_pangrams().collect::<Vec<_>>(), vec!["heating"]);
    }

    #[test]
    fn rank_uses_totals() {
        let mut state = PuzzleState::from_pangram("heating")
            .unwrap()
            .with_totals(40, 10);
        assert_eq!(state.rank(), Rank::Beginner);
        for c in "heating".chars() {
            state.push_letter(Letter::new(c).unwrap());
        }
        state.commit(20);
        assert_eq!(state.rank(), Rank::Amazing);
    }
}
