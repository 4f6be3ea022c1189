//! Leaderboard persistence.
//!
//! Scores are stored as plain text, one `name:score` record per line, and only
//! ever appended to. Queries read the whole file, keep the best score per name
//! and return the top entries. A missing or unreadable file is an empty
//! leaderboard, and malformed lines are skipped rather than failing the query.
//!
//! # Example
//!
//! ```
//! use tui_tiles_store::{MemoryScoreStore, ScoreStore};
//!
//! let mut store = MemoryScoreStore::new();
//! store.append("alice", 10).unwrap();
//! store.append("bob", 20).unwrap();
//!
//! let top: Vec<String> = store.top_n(3).iter().map(|e| e.to_string()).collect();
//! assert_eq!(top, vec!["bob: 20", "alice: 10"]);
//! ```

pub mod error;
pub mod leaderboard;

pub use tui_tiles_types as types;

pub use error::{ParseEntryError, StoreError};
pub use leaderboard::{parse_entry, rank, top_n_from_str, FileScoreStore, MemoryScoreStore, ScoreStore};
