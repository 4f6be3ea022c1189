use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access leaderboard at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("leaderboard name must not be empty")]
    EmptyName,
    #[error("leaderboard name {0:?} contains a record separator")]
    InvalidName(String),
}

/// Why a leaderboard line was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEntryError {
    #[error("missing ':' separator")]
    MissingSeparator,
    #[error("score {0:?} is not a non-negative integer")]
    InvalidScore(String),
}

pub type Result<T> = core::result::Result<T, StoreError>;
