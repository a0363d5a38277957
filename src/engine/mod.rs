//! Puzzle engine
//!
//! Holds the live round and applies the player's actions: typing, deleting,
//! shuffling, submitting and starting new games.

mod flag;
mod game;
mod state;
mod validation;

use crate::dictionary::DictionaryError;
use thiserror::Error;

pub use flag::InvalidFlag;
pub use game::{EngineSettings, INVALID_DISPLAY, PuzzleEngine, playable_words, round_totals};
pub use state::PuzzleState;
pub use validation::{Rejection, SubmitOutcome, validate_entry};

/// Systemic failures of an engine action
///
/// A rejected word is not one of these; see `SubmitOutcome::Rejected`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The dictionary has not finished building
    #[error("dictionary is not ready yet")]
    NotReady,
    #[error("no puzzle in progress; start a new game first")]
    NoActiveRound,
    #[error("'{0}' is not a pangram candidate in the dictionary")]
    NotAPangram(String),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
