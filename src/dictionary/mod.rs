//! Dictionary index and word sources
//!
//! Builds the read-only word index once from a raw word list and answers the
//! two questions the game asks: is this a word, and which words can seed a puzzle.

mod embedded;
mod index;
pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use index::{
    BuildOptions, BuildStats, DictionaryIndex, PUZZLE_LETTERS, is_pangram_candidate,
};
pub use loader::{DictionarySource, PendingIndex, load_from_file, spawn_build};

/// Failures while loading or drawing from the dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No word in the index can seed a puzzle
    #[error("dictionary has no pangram candidates; cannot start a puzzle")]
    Empty,
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary loader thread panicked")]
    LoaderPanicked,
}
