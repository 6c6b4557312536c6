/// Error types for startup and persistence.
///
/// The per-tick simulation never fails; only loading settings and writing
/// the score file can.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// The settings file exists but could not be read.
    ConfigRead { path: PathBuf, source: io::Error },

    /// The settings file is not valid TOML for `Settings`.
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A setting parsed fine but is outside its usable range.
    InvalidSetting {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The score file (or its directory) could not be written.
    ScoreWrite { path: PathBuf, source: io::Error },

    ScoreEncode(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read settings {}: {}", path.display(), source)
            }
            GameError::ConfigParse { path, source } => {
                write!(f, "failed to parse settings {}: {}", path.display(), source)
            }
            GameError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(f, "setting '{}' = {} must be {}", name, value, expected),
            GameError::ScoreWrite { path, source } => {
                write!(f, "failed to write scores {}: {}", path.display(), source)
            }
            GameError::ScoreEncode(err) => write!(f, "failed to encode scores: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse { source, .. } => Some(source),
            GameError::ScoreWrite { source, .. } => Some(source),
            GameError::ScoreEncode(err) => Some(err),
            GameError::InvalidSetting { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
