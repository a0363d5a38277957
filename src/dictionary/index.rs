//! In-memory dictionary index
//!
//! Words are bucketed by their first three letters, the flattened form of a
//! letter → letter → letter → words trie. Lookups narrow to one bucket and
//! test membership there; solution enumeration skips every bucket whose prefix
//! uses a letter outside the puzzle.

use super::DictionaryError;
use crate::core::{Letter, MIN_WORD_LENGTH, Tile, distinct_letters};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Number of distinct letters in a puzzle
pub const PUZZLE_LETTERS: usize = 7;

/// Length of the bucket key
const PREFIX_LEN: usize = 3;

type Prefix = [u8; PREFIX_LEN];

/// Filters applied to every line while building the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Shortest accepted word
    pub min_length: usize,
    /// Words containing any of these letters are dropped
    pub excluded_letters: Vec<Letter>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            excluded_letters: Letter::new('s').into_iter().collect(),
        }
    }
}

impl BuildOptions {
    /// Replace the exclusion set with the letters of `letters`
    ///
    /// Non-letter characters are ignored.
    #[must_use]
    pub fn with_excluded(mut self, letters: &str) -> Self {
        self.excluded_letters = letters.chars().filter_map(Letter::new).collect();
        self.excluded_letters.sort_unstable();
        self.excluded_letters.dedup();
        self
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

/// Counters from a build pass, for logging and diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub lines: usize,
    pub indexed: usize,
    pub blank: usize,
    pub malformed: usize,
    pub too_short: usize,
    pub excluded: usize,
    pub duplicates: usize,
}

/// Read-only word index built once from a raw word list
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    buckets: FxHashMap<Prefix, FxHashSet<Box<str>>>,
    pangram_candidates: Vec<Box<str>>,
    stats: BuildStats,
}

/// Check whether a word can seed a puzzle
///
/// True when the word is at least seven letters long and has exactly seven
/// distinct letters. The scan gives up as soon as an eighth distinct letter shows up.
///
/// # Examples
/// ```
/// use spelling_bee::dictionary::is_pangram_candidate;
///
/// assert!(is_pangram_candidate("heating"));
/// assert!(is_pangram_candidate("tabletop"));
/// assert!(!is_pangram_candidate("rotten"));
/// assert!(!is_pangram_candidate("gardenias"));
/// ```
#[must_use]
pub fn is_pangram_candidate(word: &str) -> bool {
    word.len() >= PUZZLE_LETTERS
        && distinct_letters(word, PUZZLE_LETTERS).is_some_and(|letters| letters.len() == PUZZLE_LETTERS)
}

/// Trim and lowercase a raw line; `None` if it holds anything but ASCII letters
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}

fn prefix_of(word: &str) -> Option<Prefix> {
    word.as_bytes().get(..PREFIX_LEN)?.try_into().ok()
}

/// Bit for a lowercase ASCII letter
#[inline]
const fn letter_bit(byte: u8) -> u32 {
    1 << (byte - b'a')
}

fn tile_mask(tiles: &[Tile]) -> u32 {
    tiles
        .iter()
        .fold(0, |mask, tile| mask | letter_bit(tile.letter.as_byte()))
}

impl DictionaryIndex {
    /// Build an index from raw lines
    ///
    /// Each line is trimmed and lowercased, then dropped if it is blank, holds
    /// a non-letter, is shorter than `options.min_length` (or the three-letter
    /// bucket key) or contains an excluded letter. Accepted words that are
    /// pangram-eligible are also recorded as puzzle seeds.
    ///
    /// Lines with apostrophes, hyphens, digits or non-ASCII letters are not
    /// indexed even when long enough, so `contains` is false for them: no
    /// sequence of tiles can spell them.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::dictionary::{BuildOptions, DictionaryIndex};
    ///
    /// let index = DictionaryIndex::build(["Heating", "thin", "stain", "hat"], &BuildOptions::default());
    ///
    /// assert!(index.contains("HEATING"));
    /// assert!(index.contains("thin"));
    /// assert!(!index.contains("stain")); // excluded letter
    /// assert!(!index.contains("hat")); // too short
    /// assert_eq!(index.candidate_count(), 1);
    /// ```
    pub fn build<I, S>(lines: I, options: &BuildOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let min_length = options.min_length.max(PREFIX_LEN);

        for line in lines {
            let raw = line.as_ref();
            index.stats.lines += 1;

            if raw.trim().is_empty() {
                index.stats.blank += 1;
                continue;
            }
            let Some(word) = normalize(raw) else {
                tracing::trace!(line = raw, "skipping line with non-letter characters");
                index.stats.malformed += 1;
                continue;
            };
            if word.len() < min_length {
                index.stats.too_short += 1;
                continue;
            }
            if options
                .excluded_letters
                .iter()
                .any(|letter| letter.appears_in(&word))
            {
                index.stats.excluded += 1;
                continue;
            }

            index.insert(word);
        }

        tracing::info!(
            lines = index.stats.lines,
            indexed = index.stats.indexed,
            candidates = index.pangram_candidates.len(),
            skipped = index.stats.lines - index.stats.indexed - index.stats.duplicates,
            "dictionary index built"
        );
        index
    }

    fn insert(&mut self, word: String) {
        let Some(prefix) = prefix_of(&word) else {
            return;
        };
        let candidate = is_pangram_candidate(&word);
        let word = word.into_boxed_str();
        let bucket = self.buckets.entry(prefix).or_default();
        if bucket.contains(&word) {
            self.stats.duplicates += 1;
            return;
        }
        if candidate {
            self.pangram_candidates.push(word.clone());
        }
        bucket.insert(word);
        self.stats.indexed += 1;
    }

    /// Check whether a word is in the index, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };
        prefix_of(&word)
            .and_then(|prefix| self.buckets.get(&prefix))
            .is_some_and(|bucket| bucket.contains(word.as_str()))
    }

    /// Pick a puzzle seed uniformly at random
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no indexed word is pangram-eligible.
    pub fn random_pangram<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, DictionaryError> {
        self.pangram_candidates
            .choose(rng)
            .map(|word| &**word)
            .ok_or(DictionaryError::Empty)
    }

    /// Every indexed word playable with these tiles, sorted
    ///
    /// A playable word contains the center letter and no letter outside the tiles.
    /// The length filter was already applied when the index was built.
    #[must_use]
    pub fn solutions(&self, tiles: &[Tile]) -> Vec<&str> {
        let Some(center) = tiles.iter().find(|tile| tile.is_center) else {
            return Vec::new();
        };
        let allowed = tile_mask(tiles);
        let fits = |byte: u8| letter_bit(byte) & allowed != 0;

        let mut words: Vec<&str> = self
            .buckets
            .par_iter()
            .filter(|(prefix, _)| prefix.iter().all(|&b| fits(b)))
            .flat_map_iter(|(_, bucket)| bucket.iter().map(|word| &**word))
            .filter(|word| center.letter.appears_in(word) && word.bytes().all(fits))
            .collect();
        words.sort_unstable();
        words
    }

    /// Puzzle seeds in the order they were read
    pub fn pangram_candidates(&self) -> impl Iterator<Item = &str> {
        self.pangram_candidates.iter().map(|word| &**word)
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.pangram_candidates.len()
    }

    /// Number of distinct indexed words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stats.indexed
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stats.indexed == 0
    }

    #[must_use]
    pub const fn stats(&self) -> BuildStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "heating", "eight", "hint", "thin", "thing", "night", "neigh", "than", "teeth", "hate",
        "tight", "hat", "hi", "hints", "gnat", "painted", "paint",
    ];

    fn build(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::build(words, &BuildOptions::default())
    }

    fn tiles(letters: &str) -> Vec<Tile> {
        letters
            .chars()
            .enumerate()
            .map(|(i, c)| Tile::new(Letter::new(c).unwrap(), i == 0))
            .collect()
    }

    #[test]
    fn every_kept_line_is_found() {
        let index = build(WORDS);
        for &word in WORDS {
            let kept = word.len() >= 4 && !word.contains('s');
            assert_eq!(index.contains(word), kept, "word '{word}'");
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let index = build(&["Heating", "THIN"]);
        assert!(index.contains("heating"));
        assert!(index.contains("HEATING"));
        assert!(index.contains("Thin"));
    }

    #[test]
    fn contains_missing_levels() {
        let index = build(WORDS);
        assert!(!index.contains("zzzz")); // no bucket
        assert!(!index.contains("thine")); // bucket exists, word absent
        assert!(!index.contains("th")); // shorter than the key
        assert!(!index.contains(""));
        assert!(!index.contains("th-n"));
    }

    #[test]
    fn build_trims_whitespace() {
        let index = build(&["  heating\r", "\tthin "]);
        assert!(index.contains("heating"));
        assert!(index.contains("thin"));
    }

    #[test]
    fn build_skips_malformed_and_blank_lines() {
        let index = build(&["", "   ", "co-op", "don't", "naïve", "thin"]);
        let stats = index.stats();
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.blank, 2);
        assert_eq!(stats.malformed, 3);
        assert_eq!(index.len(), 1);
        assert!(!index.contains("don't"));
        assert!(!index.contains("co-op"));
    }

    #[test]
    fn build_counts_filters() {
        let index = build(WORDS);
        let stats = index.stats();
        assert_eq!(stats.too_short, 2); // "hat", "hi"
        assert_eq!(stats.excluded, 1); // "hints"
        assert_eq!(stats.indexed, WORDS.len() - 3);
    }

    #[test]
    fn custom_exclusions_and_min_length() {
        let options = BuildOptions::default()
            .with_excluded("XZ")
            .with_min_length(5);
        let index = DictionaryIndex::build(["hints", "thin", "zebra", "night"], &options);
        assert!(index.contains("hints"));
        assert!(index.contains("night"));
        assert!(!index.contains("thin"));
        assert!(!index.contains("zebra"));
    }

    #[test]
    fn min_length_never_below_key_length() {
        let options = BuildOptions::default().with_min_length(1);
        let index = DictionaryIndex::build(["at", "ate"], &options);
        assert!(!index.contains("at"));
        assert!(index.contains("ate"));
    }

    #[test]
    fn duplicates_stored_once() {
        let index = build(&["heating", "Heating", "heating"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.candidate_count(), 1);
        assert_eq!(index.stats().duplicates, 2);
    }

    #[test]
    fn pangram_candidate_exactly_seven_distinct() {
        assert!(is_pangram_candidate("heating"));
        assert!(is_pangram_candidate("gardening")); // 9 letters, 7 distinct
        assert!(is_pangram_candidate("HEATING"));
    }

    #[test]
    fn pangram_candidate_too_short() {
        // Seven distinct letters need at least seven characters
        assert!(!is_pangram_candidate("thing"));
        assert!(!is_pangram_candidate(""));
    }

    #[test]
    fn pangram_candidate_wrong_distinct_count() {
        assert!(!is_pangram_candidate("bringing")); // 5 distinct
        assert!(!is_pangram_candidate("mountains")); // 8 distinct
        assert!(!is_pangram_candidate("triangulated")); // 10 distinct, rejected early
    }

    #[test]
    fn candidates_collected_during_build() {
        let index = build(WORDS);
        let candidates: Vec<&str> = index.pangram_candidates().collect();
        assert_eq!(candidates, vec!["heating", "painted"]);
    }

    #[test]
    fn random_pangram_from_candidates() {
        let index = build(WORDS);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = index.random_pangram(&mut rng).unwrap();
            assert!(word == "heating" || word == "painted");
        }
    }

    #[test]
    fn random_pangram_empty_dictionary() {
        let index = build(&["thin", "night"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            index.random_pangram(&mut rng),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn solutions_require_center_and_tile_letters() {
        let index = build(WORDS);
        let solutions = index.solutions(&tiles("heating"));
        assert_eq!(
            solutions,
            vec!["eight", "hate", "heating", "hint", "neigh", "night", "teeth", "than", "thin", "thing", "tight"]
        );
        // "gnat" lacks the center letter; "paint" uses a letter outside the tiles
        assert!(!solutions.contains(&"gnat"));
        assert!(!solutions.contains(&"paint"));
    }

    #[test]
    fn solutions_without_center_is_empty() {
        let index = build(WORDS);
        let no_center: Vec<Tile> = tiles("heating")
            .into_iter()
            .map(|tile| Tile::new(tile.letter, false))
            .collect();
        assert!(index.solutions(&no_center).is_empty());
    }
}
