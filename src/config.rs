//! Game configuration
//!
//! Settings come from `<config dir>/wordgame/config.toml` when it exists; any
//! field left out falls back to its default. Command-line flags override the
//! file.

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "wordgame";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid answer {answer:?}: {source}")]
    InvalidAnswer {
        answer: String,
        source: crate::core::WordError,
    },
    #[error("max_attempts must be at least 1")]
    NoAttempts,
    #[error("Cannot determine a directory for the session file; pass --state-file")]
    NoStateDir,
    #[error("Cannot read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The hidden word
    #[serde(default = "default_answer")]
    pub answer: String,
    /// Number of rows on the board
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Where the session is saved; defaults to the user data directory
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_answer() -> String {
    "GHAST".to_string()
}

const fn default_max_attempts() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answer: default_answer(),
            max_attempts: default_max_attempts(),
            state_file: None,
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Default config file location
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Default session file location
    #[must_use]
    pub fn default_state_file() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("session.json"))
    }

    /// Load from the default location, or defaults when absent
    ///
    /// # Errors
    /// Same as [`GameConfig::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file exists but cannot be read, and
    /// `ConfigError::Parse` if it is not valid config TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse and check the answer
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAnswer` if the answer is not a word.
    pub fn answer_word(&self) -> Result<Word, ConfigError> {
        Word::new(&self.answer).map_err(|source| ConfigError::InvalidAnswer {
            answer: self.answer.clone(),
            source,
        })
    }

    /// Check every setting
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.answer_word()?;
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    /// Session file, falling back to the default location
    ///
    /// # Errors
    /// Returns `ConfigError::NoStateDir` if no location can be determined.
    pub fn state_path(&self) -> Result<PathBuf, ConfigError> {
        self.state_file
            .clone()
            .or_else(Self::default_state_file)
            .ok_or(ConfigError::NoStateDir)
    }
}
