//! Runner configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::store::{FileScoreStore, MemoryScoreStore, ScoreStore};

pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// Runner settings. Every field has a default, so an empty environment
/// reproduces the zero-config game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` keeps scores in memory for this process only.
    pub leaderboard_path: Option<PathBuf>,
    /// `None` disables logging; the terminal owns stdout and stderr.
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: Some(PathBuf::from(DEFAULT_LEADERBOARD_PATH)),
            log_path: None,
            bell: true,
        }
    }
}

impl AppConfig {
    /// Read `TILES_LEADERBOARD_PATH`, `TILES_LOG_PATH` and `TILES_BELL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Set but empty means "no file".
        let leaderboard_path = match lookup("TILES_LEADERBOARD_PATH") {
            Some(s) => non_empty(s).map(PathBuf::from),
            None => defaults.leaderboard_path,
        };

        let log_path = lookup("TILES_LOG_PATH")
            .and_then(non_empty)
            .map(PathBuf::from);

        let bell = lookup("TILES_BELL")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.bell);

        Self {
            leaderboard_path,
            log_path,
            bell,
        }
    }

    /// Open the configured leaderboard store.
    pub fn open_store(&self) -> Box<dyn ScoreStore> {
        match &self.leaderboard_path {
            Some(path) => {
                log::info!("leaderboard file {}", path.display());
                Box::new(FileScoreStore::new(path.clone()))
            }
            None => {
                log::info!("leaderboard kept in memory");
                Box::new(MemoryScoreStore::new())
            }
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_flag(s: &str) -> bool {
    !matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
