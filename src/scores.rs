/// High-score persistence.
///
/// The file holds a single pretty-printed JSON record, `{"hi_score": N}`.
/// Loading never fails: a missing, truncated or unparsable file reads as a
/// zero score and is immediately replaced by a fresh one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GameError, GameResult};

/// Length of the smallest valid record, `{"hi_score":0}`. Anything shorter
/// is a truncated write.
pub const MIN_RECORD_BYTES: u64 = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub hi_score: u32,
}

#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    /// `$HOME/.alien_invasion/scores.json`, or relative to the working
    /// directory when `HOME` is unset.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".alien_invasion")
            .join("scores.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ScoreRecord {
        match self.read() {
            Some(record) => record,
            None => {
                let record = ScoreRecord::default();
                if let Err(err) = self.save(&record) {
                    warn!(%err, "could not write a fresh score file");
                }
                record
            }
        }
    }

    fn read(&self) -> Option<ScoreRecord> {
        let len = fs::metadata(&self.path).ok()?.len();
        if len < MIN_RECORD_BYTES {
            warn!(path = %self.path.display(), len, "score file too short; starting from zero");
            return None;
        }

        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "score file unreadable; starting from zero");
                None
            }
        }
    }

    pub fn save(&self, record: &ScoreRecord) -> GameResult<()> {
        let contents = serde_json::to_string_pretty(record).map_err(GameError::ScoreEncode)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| GameError::ScoreWrite {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, contents).map_err(|source| GameError::ScoreWrite {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), hi_score = record.hi_score, "scores saved");
        Ok(())
    }

    /// Save `hi_score` only when it beats `stored`, the value last written.
    /// Returns whether a write happened.
    pub fn save_if_higher(&self, hi_score: u32, stored: u32) -> GameResult<bool> {
        if hi_score <= stored {
            return Ok(false);
        }
        self.save(&ScoreRecord { hi_score })?;
        Ok(true)
    }
}
