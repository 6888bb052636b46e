//! File-backed persistence for the learner's settings and history.
//!
//! The whole aggregate is one JSON document at a caller-chosen path. The
//! recovery contract matters more than the format: a missing or corrupt
//! file loads as [`UserData::default()`], and write failures are logged —
//! the practice flow never stops because the disk did.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::Language;
use crate::practice_engine::models::{AgeGroup, TaskType};

/// Most-recent history entries retained per user.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub age_group: AgeGroup,
    pub selected_tasks: Vec<TaskType>,
    pub theme: Theme,
    pub name: String,
    pub icon: String,
    pub language: Language,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            age_group: AgeGroup::FourToSix,
            selected_tasks: vec![TaskType::Addition],
            theme: Theme::Light,
            name: "Learner".to_string(),
            icon: "👨‍🎓".to_string(),
            language: Language::En,
        }
    }
}

/// One completed practice round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 date string supplied by the host.
    pub date: String,
    pub age_group: AgeGroup,
    pub task_types: Vec<TaskType>,
    pub score: u32,
    pub correct_answers: u32,
    pub total_problems: u32,
}

impl HistoryEntry {
    /// Share of correct answers in percent; 0 for an empty round.
    pub fn accuracy(&self) -> f64 {
        if self.total_problems == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.total_problems as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub settings: UserSettings,
    pub history: Vec<HistoryEntry>,
}

impl UserData {
    /// Append a finished round, dropping the oldest entries beyond
    /// [`HISTORY_LIMIT`].
    pub fn record_round(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// Sum of scores across the retained history.
    pub fn total_score(&self) -> u64 {
        self.history.iter().map(|e| e.score as u64).sum()
    }

    /// Mean accuracy across the retained history, in percent.
    pub fn average_accuracy(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            self.history.iter().map(HistoryEntry::accuracy).sum::<f64>()
                / self.history.len() as f64
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize user data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON store for one [`UserData`] aggregate.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored aggregate.
    ///
    /// A missing file is the normal first-run case; a corrupt or unreadable
    /// file is logged. Both load as the default aggregate — this never
    /// fails.
    pub fn load(&self) -> UserData {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored user data, using defaults");
                return UserData::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read user data, using defaults");
                return UserData::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored user data is corrupt, using defaults");
                UserData::default()
            }
        }
    }

    /// Persist the aggregate. Failures are logged here as well as returned,
    /// so callers may ignore the result without losing the diagnostic.
    pub fn save(&self, data: &UserData) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data)?;
        if let Err(source) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), %source, "failed to save user data");
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }
}
