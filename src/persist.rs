//! High-score persistence.
//!
//! The store is deliberately infallible at the call site: an unreadable or
//! unwritable file degrades to an in-memory-only high score for the session,
//! it never surfaces as an error to the player.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Loads and saves the best score across sessions
pub trait ScoreStore {
    /// The persisted best, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Persist a new best. Failures are swallowed.
    fn save(&self, score: u32);
}

/// Plain-text file store, one decimal number
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&self, score: u32) {
        let _ = fs::write(&self.path, score.to_string());
    }
}

/// In-memory store for tests and as a last-resort fallback
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    score: std::cell::Cell<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.score.get()
    }

    fn save(&self, score: u32) {
        self.score.set(score);
    }
}

/// Default location for the high-score file: a dotfile in the home
/// directory, falling back to the temp dir when HOME is unset.
pub fn default_score_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
        .join(".tui-snake-high-score")
}
