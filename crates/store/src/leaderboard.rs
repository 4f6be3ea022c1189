//! Append-only leaderboard of `name:score` records.
//!
//! The file format is one record per line. Parsing splits on the first `:` only
//! and trims whitespace around the score, so `alice:10` and `alice: 10` both
//! read back as the same entry. Lines that fail to parse are skipped.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ParseEntryError, Result, StoreError};
use crate::types::LeaderboardEntry;

/// Parse one `name:score` line.
pub fn parse_entry(line: &str) -> core::result::Result<LeaderboardEntry, ParseEntryError> {
    let (name, score) = line
        .split_once(':')
        .ok_or(ParseEntryError::MissingSeparator)?;
    let score = score.trim();
    let score = score
        .parse::<u32>()
        .map_err(|_| ParseEntryError::InvalidScore(score.to_string()))?;
    Ok(LeaderboardEntry::new(name, score))
}

/// Best score per name, highest first, truncated to `n`.
///
/// Ties keep the order in which names first appeared.
pub fn rank<I>(entries: I, n: usize) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = LeaderboardEntry>,
{
    let mut best: Vec<LeaderboardEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match index.get(&entry.name) {
            Some(&i) => {
                if entry.score > best[i].score {
                    best[i].score = entry.score;
                }
            }
            None => {
                index.insert(entry.name.clone(), best.len());
                best.push(entry);
            }
        }
    }

    best.sort_by(|a, b| b.score.cmp(&a.score));
    best.truncate(n);
    best
}

/// Parse every well-formed line of `text` and rank it.
pub fn top_n_from_str(text: &str, n: usize) -> Vec<LeaderboardEntry> {
    let entries = text.lines().filter(|l| !l.trim().is_empty()).filter_map(|line| {
        parse_entry(line)
            .map_err(|e| log::debug!("skipping leaderboard line {line:?}: {e}"))
            .ok()
    });
    rank(entries, n)
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if name.contains([':', '\n', '\r']) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Leaderboard persistence.
pub trait ScoreStore {
    /// Durably record one entry.
    fn append(&mut self, name: &str, score: u32) -> Result<()>;

    /// Best `n` entries, one per name. Never fails; unreadable storage is empty.
    fn top_n(&self, n: usize) -> Vec<LeaderboardEntry>;
}

/// Leaderboard backed by a plain text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn append(&mut self, name: &str, score: u32) -> Result<()> {
        validate_name(name)?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        writeln!(file, "{name}:{score}").map_err(io_err)?;
        file.sync_data().map_err(io_err)?;
        log::info!("recorded {name}:{score} in {}", self.path.display());
        Ok(())
    }

    fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        match fs::read_to_string(&self.path) {
            Ok(text) => top_n_from_str(&text, n),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("cannot read leaderboard {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }
}

/// In-process leaderboard, used when no file is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&mut self, name: &str, score: u32) -> Result<()> {
        validate_name(name)?;
        self.entries.push(LeaderboardEntry::new(name, score));
        Ok(())
    }

    fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        rank(self.entries.iter().cloned(), n)
    }
}
