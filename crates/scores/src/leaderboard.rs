//! Top-ten leaderboard stored as a JSON array on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::types::LEADERBOARD_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best scores, highest first, at most [`LEADERBOARD_CAPACITY`] entries.
///
/// Equal scores keep the order they were recorded in, so an older entry
/// ranks above a newer one with the same score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Empty leaderboard that will be saved to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Load the leaderboard, starting empty when the file is missing or unreadable
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(&path) {
            Ok(board) => board,
            Err(crate::ScoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no leaderboard file yet");
                Self::new(path)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable leaderboard");
                Self::new(path)
            }
        }
    }

    /// Load the leaderboard, reporting missing or malformed files as errors
    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<ScoreEntry> = serde_json::from_str(&raw)?;
        let mut board = Self {
            path: path.to_path_buf(),
            entries,
        };
        board.normalize();
        debug!(path = %path.display(), entries = board.entries.len(), "leaderboard loaded");
        Ok(board)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank `score` would take if recorded now, or `None` if it would not place
    pub fn rank_for(&self, score: u32) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.score >= score);
        (rank < LEADERBOARD_CAPACITY).then_some(rank)
    }

    /// Insert without saving; returns the 0-based rank or `None` when it did not place
    pub fn insert(&mut self, name: impl Into<String>, score: u32) -> Option<usize> {
        let rank = self.rank_for(score)?;
        self.entries.insert(rank, ScoreEntry::new(name, score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }

    /// Insert and persist a finished game's score
    pub fn record(&mut self, name: impl Into<String>, score: u32) -> Result<Option<usize>> {
        let name = name.into();
        let rank = self.insert(name.clone(), score);
        match rank {
            Some(rank) => {
                info!(name = %name, score, rank, "new leaderboard entry");
                self.save()?;
            }
            None => debug!(score, "score did not place"),
        }
        Ok(rank)
    }

    /// Write the entries to disk, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn normalize(&mut self) {
        // sort_by is stable: equal scores keep file order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
    }
}
