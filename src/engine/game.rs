//! Puzzle engine
//!
//! Owns the current round and implements every player action. The dictionary
//! is attached once it has finished building; until then every action fails
//! with `EngineError::NotReady`.

use super::validation::{SubmitOutcome, validate_entry};
use super::{EngineError, PuzzleState};
use crate::core::{MIN_WORD_LENGTH, PANGRAM_BONUS, Tile, is_pangram, score_word};
use crate::dictionary::{DictionaryIndex, is_pangram_candidate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long the invalid-word indicator stays up in the standard game
pub const INVALID_DISPLAY: Duration = Duration::from_millis(500);

/// Rule parameters for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub min_word_length: usize,
    pub pangram_bonus: u32,
    pub invalid_display: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            pangram_bonus: PANGRAM_BONUS,
            invalid_display: INVALID_DISPLAY,
        }
    }
}

/// Dictionary words that count in a puzzle with these tiles, sorted
#[must_use]
pub fn playable_words<'a>(
    index: &'a DictionaryIndex,
    tiles: &[Tile],
    settings: &EngineSettings,
) -> Vec<&'a str> {
    index
        .solutions(tiles)
        .into_iter()
        .filter(|word| word.len() >= settings.min_word_length)
        .collect()
}

/// Maximum score and number of playable words for these tiles
#[must_use]
pub fn round_totals(index: &DictionaryIndex, tiles: &[Tile], settings: &EngineSettings) -> (u32, usize) {
    let words = playable_words(index, tiles, settings);
    let max_score = words
        .iter()
        .map(|word| score_word(word, tiles, settings.pangram_bonus))
        .sum();
    (max_score, words.len())
}

/// The game engine
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use spelling_bee::dictionary::{BuildOptions, DictionaryIndex};
/// use spelling_bee::engine::{EngineSettings, PuzzleEngine, SubmitOutcome};
///
/// let index = DictionaryIndex::build(["heating", "thing"], &BuildOptions::default());
/// let mut engine = PuzzleEngine::with_index(Arc::new(index), EngineSettings::default());
/// engine.start_round("heating").unwrap();
///
/// for c in "thing".chars() {
///     let tile = engine.state().unwrap().tile_for(c).unwrap();
///     engine.input_letter(tile).unwrap();
/// }
/// let outcome = engine.submit().unwrap();
/// assert!(matches!(outcome, SubmitOutcome::Accepted { points: 5, .. }));
/// ```
#[derive(Debug)]
pub struct PuzzleEngine {
    index: Option<Arc<DictionaryIndex>>,
    round: Option<PuzzleState>,
    settings: EngineSettings,
    rng: StdRng,
}

impl PuzzleEngine {
    /// Create an engine with no dictionary yet
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Create an engine whose puzzle choices and shuffles are reproducible
    #[must_use]
    pub fn with_seed(settings: EngineSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    /// Create an engine that is ready immediately
    #[must_use]
    pub fn with_index(index: Arc<DictionaryIndex>, settings: EngineSettings) -> Self {
        let mut engine = Self::new(settings);
        engine.attach(index);
        engine
    }

    const fn with_rng(settings: EngineSettings, rng: StdRng) -> Self {
        Self {
            index: None,
            round: None,
            settings,
            rng,
        }
    }

    /// Attach the finished dictionary, making the engine ready
    pub fn attach(&mut self, index: Arc<DictionaryIndex>) {
        tracing::debug!(words = index.len(), "dictionary attached");
        self.index = Some(index);
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The attached dictionary
    ///
    /// # Errors
    /// Returns `EngineError::NotReady` before `attach`.
    pub fn index(&self) -> Result<&Arc<DictionaryIndex>, EngineError> {
        self.index.as_ref().ok_or(EngineError::NotReady)
    }

    /// The current round, if one has started
    #[must_use]
    pub const fn state(&self) -> Option<&PuzzleState> {
        self.round.as_ref()
    }

    /// Start a round from a random pangram candidate
    ///
    /// # Errors
    /// `NotReady` before the dictionary is attached, or
    /// `Dictionary(DictionaryError::Empty)` if it has no candidates.
    pub fn new_game(&mut self) -> Result<&PuzzleState, EngineError> {
        let index = Arc::clone(self.index()?);
        let pangram = index.random_pangram(&mut self.rng)?;
        self.begin(&index, pangram)
    }

    /// Start a round seeded by a specific pangram candidate
    ///
    /// # Errors
    /// `NotReady` before the dictionary is attached, or `NotAPangram` if the
    /// word is not one of the dictionary's pangram candidates.
    pub fn start_round(&mut self, pangram: &str) -> Result<&PuzzleState, EngineError> {
        let index = Arc::clone(self.index()?);
        let seed = pangram.trim().to_ascii_lowercase();
        if !is_pangram_candidate(&seed) || !index.contains(&seed) {
            return Err(EngineError::NotAPangram(pangram.to_string()));
        }
        self.begin(&index, &seed)
    }

    fn begin(&mut self, index: &DictionaryIndex, pangram: &str) -> Result<&PuzzleState, EngineError> {
        let state = PuzzleState::from_pangram(pangram)
            .ok_or_else(|| EngineError::NotAPangram(pangram.to_string()))?;

        let (max_score, solution_count) = round_totals(index, state.tiles(), &self.settings);
        tracing::debug!(
            pangram,
            center = %state.center_letter(),
            solution_count,
            max_score,
            "round started"
        );

        Ok(self
            .round
            .insert(state.with_totals(max_score, solution_count)))
    }

    fn active_round(&mut self) -> Result<&mut PuzzleState, EngineError> {
        if self.index.is_none() {
            return Err(EngineError::NotReady);
        }
        self.round.as_mut().ok_or(EngineError::NoActiveRound)
    }

    /// Append a tile's letter to the entered word
    ///
    /// No validation happens here; any letter may repeat.
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`.
    pub fn input_letter(&mut self, tile: Tile) -> Result<(), EngineError> {
        self.active_round()?.push_letter(tile.letter);
        Ok(())
    }

    /// Remove the last entered letter; does nothing when empty
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`.
    pub fn backspace(&mut self) -> Result<(), EngineError> {
        self.active_round()?.pop_letter();
        Ok(())
    }

    /// Discard the entered word
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`.
    pub fn clear(&mut self) -> Result<(), EngineError> {
        self.active_round()?.clear_entered();
        Ok(())
    }

    /// Reorder the six outer tiles
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`.
    pub fn shuffle(&mut self) -> Result<(), EngineError> {
        if self.index.is_none() {
            return Err(EngineError::NotReady);
        }
        let round = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;
        round.shuffle_outer(&mut self.rng);
        Ok(())
    }

    /// Submit the entered word
    ///
    /// On success the word is recorded, its points added and the buffer cleared.
    /// On failure the buffer is kept and the invalid flag is raised until
    /// `tick` sees its deadline pass.
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`. Invalid words are not errors.
    pub fn submit(&mut self) -> Result<SubmitOutcome, EngineError> {
        self.submit_at(Instant::now())
    }

    /// `submit` with an explicit clock reading
    ///
    /// # Errors
    /// `NotReady` or `NoActiveRound`.
    pub fn submit_at(&mut self, now: Instant) -> Result<SubmitOutcome, EngineError> {
        let settings = self.settings;
        let index = self.index.as_deref().ok_or(EngineError::NotReady)?;
        let round = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;

        match validate_entry(round, index, settings.min_word_length) {
            Ok(()) => {
                let pangram = is_pangram(round.entered(), round.tiles());
                let points = score_word(round.entered(), round.tiles(), settings.pangram_bonus);
                let word = round.commit(points);
                tracing::debug!(word, points, pangram, score = round.score(), "word accepted");
                Ok(SubmitOutcome::Accepted {
                    word,
                    points,
                    pangram,
                })
            }
            Err(rejection) => {
                tracing::debug!(entered = round.entered(), %rejection, "word rejected");
                round.raise_invalid(now, settings.invalid_display);
                Ok(SubmitOutcome::Rejected(rejection))
            }
        }
    }

    /// Run the deferred flag clear; returns whether the flag dropped
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// `tick` with an explicit clock reading
    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.round
            .as_mut()
            .is_some_and(|round| round.expire_invalid(now))
    }
}
