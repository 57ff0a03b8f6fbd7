//! Ranking run history — JSONL append-only persistence with write filtering.
//!
//! Persists one summary object per leaderboard build as a single JSON line.
//! The write filter keeps degenerate runs (nothing eligible) from bloating
//! the file when the upstream aggregation briefly produces empty batches.
//! Entries carry the input fingerprint, so repeated runs over identical data
//! are recognizable without storing the records themselves.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::leaderboard::Leaderboard;

/// Compact per-entry summary stored in the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    pub strategy_id: String,
    pub score: f64,
}

/// A single history line: one leaderboard build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub fingerprint: String,
    pub built_at: DateTime<Utc>,
    pub total_count: usize,
    pub eligible_count: usize,
    pub top: Vec<TopEntry>,
}

impl HistoryEntry {
    /// Summarize a built leaderboard, keeping the top `keep` scores.
    pub fn from_leaderboard(board: &Leaderboard, keep: usize) -> Self {
        Self {
            fingerprint: board.input_fingerprint().to_string(),
            built_at: board.built_at(),
            total_count: board.total_count(),
            eligible_count: board.len(),
            top: board
                .top(keep)
                .iter()
                .map(|e| TopEntry {
                    strategy_id: e.strategy_id.clone(),
                    score: e.leaderboard_score.unwrap_or(0.0),
                })
                .collect(),
        }
    }
}

/// Criteria for whether a build should be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteFilter {
    /// Minimum eligible entries for a run to be worth recording.
    pub min_eligible: usize,
}

impl Default for WriteFilter {
    fn default() -> Self {
        Self { min_eligible: 1 }
    }
}

impl WriteFilter {
    pub fn should_write(&self, entry: &HistoryEntry) -> bool {
        entry.eligible_count >= self.min_eligible
    }
}

/// JSONL history file manager.
///
/// Each line is an independent JSON object, making the format resilient to
/// partial writes and easy to stream. Malformed lines are skipped on read.
pub struct RankingHistory {
    path: PathBuf,
    filter: WriteFilter,
}

impl RankingHistory {
    pub fn new(path: PathBuf, filter: WriteFilter) -> Self {
        Self { path, filter }
    }

    /// Append an entry if it passes the write filter.
    ///
    /// Returns `Ok(true)` if the entry was written, `Ok(false)` if filtered.
    pub fn append(&self, entry: &HistoryEntry) -> io::Result<bool> {
        if !self.filter.should_write(entry) {
            debug!(fingerprint = %entry.fingerprint, "history entry filtered out");
            return Ok(false);
        }

        let json = serde_json::to_string(entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{json}")?;
        file.flush()?;

        Ok(true)
    }

    /// Read all entries, skipping malformed lines.
    pub fn read_all(&self) -> io::Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let reader = io::BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(_) => continue, // skip malformed lines
            }
        }

        Ok(entries)
    }

    /// Current file size in bytes (0 if the file does not exist yet).
    pub fn file_size_bytes(&self) -> io::Result<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
