//! Puzzle analysis command
//!
//! Builds the puzzle for a seed word and lists everything it accepts.

use crate::core::{is_pangram, score_word};
use crate::engine::{EngineError, PuzzleEngine, playable_words};

/// Everything playable in one puzzle
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub pangram: String,
    pub center: char,
    pub outer: Vec<char>,
    /// Playable words with their points, sorted alphabetically
    pub solutions: Vec<(String, u32)>,
    pub pangrams: Vec<String>,
    pub max_score: u32,
}

/// Analyze the puzzle seeded by `word`, or by a random candidate
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary is not attached
/// - The word is not a pangram candidate in the dictionary
/// - No word in the dictionary can seed a puzzle
pub fn analyze_puzzle(
    engine: &mut PuzzleEngine,
    word: Option<&str>,
) -> Result<AnalysisResult, EngineError> {
    match word {
        Some(word) => engine.start_round(word)?,
        None => engine.new_game()?,
    };

    let index = engine.index()?;
    let state = engine.state().ok_or(EngineError::NoActiveRound)?;
    let settings = engine.settings();
    let tiles = state.tiles();

    let solutions: Vec<(String, u32)> = playable_words(index, tiles, settings)
        .into_iter()
        .map(|word| (word.to_string(), score_word(word, tiles, settings.pangram_bonus)))
        .collect();
    let pangrams = solutions
        .iter()
        .filter(|(word, _)| is_pangram(word, tiles))
        .map(|(word, _)| word.clone())
        .collect();

    Ok(AnalysisResult {
        pangram: state.pangram().to_string(),
        center: state.center_letter().as_char(),
        outer: state.outer_tiles().iter().map(|t| t.letter.as_char()).collect(),
        max_score: solutions.iter().map(|(_, points)| points).sum(),
        solutions,
        pangrams,
    })
}
