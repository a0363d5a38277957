//! Game configuration
//!
//! Optional TOML file; every field has a default so an empty or missing file
//! yields the standard game.

use crate::dictionary::{BuildOptions, DictionarySource};
use crate::engine::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub dictionary: DictionaryConfig,
    pub game: GameSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    /// Word list file; the embedded list when absent
    pub path: Option<PathBuf>,
    pub min_length: usize,
    /// Words containing any of these letters are left out
    pub excluded_letters: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            min_length: crate::core::MIN_WORD_LENGTH,
            excluded_letters: "s".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSection {
    pub invalid_display_ms: u64,
    pub pangram_bonus: u32,
    pub seed: Option<u64>,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            invalid_display_ms: 500,
            pangram_bonus: crate::core::PANGRAM_BONUS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration
    ///
    /// An explicit path must exist and parse. Without one, the per-user file is
    /// used if present; problems with it are logged and the defaults used instead.
    ///
    /// # Errors
    /// Returns `ConfigError` only for an explicit path that cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        match Self::from_file(&path) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("{err}; using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/spelling_bee/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spelling_bee").join("config.toml"))
    }

    #[must_use]
    pub fn source(&self) -> DictionarySource {
        self.dictionary
            .path
            .clone()
            .map_or(DictionarySource::Embedded, DictionarySource::File)
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::default()
            .with_min_length(self.dictionary.min_length)
            .with_excluded(&self.dictionary.excluded_letters)
    }

    #[must_use]
    pub const fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            min_word_length: self.dictionary.min_length,
            pangram_bonus: self.game.pangram_bonus,
            invalid_display: Duration::from_millis(self.game.invalid_display_ms),
        }
    }
}
