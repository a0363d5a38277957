//! Word list loading
//!
//! Reads word lists from files or the embedded list, and runs the index build
//! on a background thread so the caller can keep drawing while it loads.

use super::{BuildOptions, DictionaryError, DictionaryIndex, EMBEDDED_WORDS};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Where the raw word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Embedded,
    /// A line-oriented text file
    File(PathBuf),
}

impl DictionarySource {
    /// Read the source and build an index from it
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if a file source cannot be read.
    pub fn build(&self, options: &BuildOptions) -> Result<DictionaryIndex, DictionaryError> {
        match self {
            Self::Embedded => Ok(DictionaryIndex::build(EMBEDDED_WORDS, options)),
            Self::File(path) => {
                let lines = load_from_file(path)?;
                Ok(DictionaryIndex::build(&lines, options))
            }
        }
    }
}

/// Load the raw lines of a word list file
///
/// Lines are returned as-is; filtering happens when the index is built.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use spelling_bee::dictionary::load_from_file;
///
/// let lines = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// An index build running on a worker thread
#[derive(Debug)]
pub struct PendingIndex {
    handle: Option<JoinHandle<Result<DictionaryIndex, DictionaryError>>>,
}

/// Start building an index in the background
#[must_use]
pub fn spawn_build(source: DictionarySource, options: BuildOptions) -> PendingIndex {
    tracing::debug!(?source, "starting background dictionary build");
    let handle = thread::spawn(move || source.build(&options));
    PendingIndex {
        handle: Some(handle),
    }
}

impl PendingIndex {
    /// Whether the build has finished (or its result was already taken)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Take the result if the build has finished
    ///
    /// Returns `None` while the build is still running, and after the result
    /// has been taken once.
    pub fn try_take(&mut self) -> Option<Result<DictionaryIndex, DictionaryError>> {
        if !self.handle.as_ref()?.is_finished() {
            return None;
        }
        self.handle.take().map(join)
    }

    /// Block until the build finishes
    ///
    /// # Errors
    /// Returns the build error, or `DictionaryError::LoaderPanicked` if the
    /// worker died or the result was already taken.
    pub fn wait(mut self) -> Result<DictionaryIndex, DictionaryError> {
        self.handle
            .take()
            .map_or(Err(DictionaryError::LoaderPanicked), join)
    }
}

fn join(
    handle: JoinHandle<Result<DictionaryIndex, DictionaryError>>,
) -> Result<DictionaryIndex, DictionaryError> {
    handle
        .join()
        .unwrap_or(Err(DictionaryError::LoaderPanicked))
}
