//! Submission validation
//!
//! Rejected words are an ordinary outcome, not an error: the engine reports
//! them as a `Rejection` and raises the invalid flag.

use super::PuzzleState;
use crate::dictionary::DictionaryIndex;
use std::fmt;

/// Why a submitted word was not accepted, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    MissingCenter,
    AlreadyFound,
    NotInDictionary,
}

impl Rejection {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::MissingCenter => "Missing center letter",
            Self::AlreadyFound => "Already found",
            Self::NotInDictionary => "Not in word list",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of submitting the entered letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        word: String,
        points: u32,
        pangram: bool,
    },
    Rejected(Rejection),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Check the entered buffer of `state` against the game rules
///
/// # Errors
/// Returns the first rule the word breaks.
pub fn validate_entry(
    state: &PuzzleState,
    index: &DictionaryIndex,
    min_length: usize,
) -> Result<(), Rejection> {
    let word = state.entered();
    if word.len() < min_length {
        return Err(Rejection::TooShort);
    }
    if !state.center_letter().appears_in(word) {
        return Err(Rejection::MissingCenter);
    }
    if state.has_found(word) {
        return Err(Rejection::AlreadyFound);
    }
    if !index.contains(word) {
        return Err(Rejection::NotInDictionary);
    }
    Ok(())
}
