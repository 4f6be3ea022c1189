use std::path::PathBuf;

use tui_tiles::store::{FileScoreStore, MemoryScoreStore, ScoreStore, StoreError};
use tui_tiles::types::LeaderboardEntry;

/// Unique file path under the system temp dir, removed on drop.
struct TempFile(PathBuf);

impl TempFile {
    fn new(tag: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let name = format!("tui-tiles-{tag}-{}-{nanos}.txt", std::process::id());
        Self(std::env::temp_dir().join(name))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn entries(pairs: &[(&str, u32)]) -> Vec<LeaderboardEntry> {
    pairs
        .iter()
        .map(|&(name, score)| LeaderboardEntry::new(name, score))
        .collect()
}

#[test]
fn test_missing_file_is_empty() {
    let tmp = TempFile::new("missing");
    let store = FileScoreStore::new(&tmp.0);
    assert!(store.top_n(3).is_empty());
}

#[test]
fn test_file_store_ranks_top_three() {
    let tmp = TempFile::new("rank");
    let mut store = FileScoreStore::new(&tmp.0);
    store.append("alice", 10).unwrap();
    store.append("bob", 20).unwrap();
    store.append("carol", 5).unwrap();

    assert_eq!(
        store.top_n(3),
        entries(&[("bob", 20), ("alice", 10), ("carol", 5)])
    );
    assert_eq!(
        std::fs::read_to_string(&tmp.0).unwrap(),
        "alice:10\nbob:20\ncarol:5\n"
    );
}

#[test]
fn test_file_store_keeps_best_score_per_name() {
    let tmp = TempFile::new("max");
    let mut store = FileScoreStore::new(&tmp.0);
    store.append("alice", 12).unwrap();
    store.append("bob", 7).unwrap();
    store.append("alice", 3).unwrap();
    store.append("dave", 9).unwrap();

    assert_eq!(
        store.top_n(3),
        entries(&[("alice", 12), ("dave", 9), ("bob", 7)])
    );
    assert_eq!(store.top_n(1), entries(&[("alice", 12)]));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let tmp = TempFile::new("malformed");
    std::fs::write(&tmp.0, "alice:10\ngarbage\nbob:lots\n\ncarol: 5\n").unwrap();
    let store = FileScoreStore::new(&tmp.0);
    assert_eq!(store.top_n(3), entries(&[("alice", 10), ("carol", 5)]));
}

#[test]
fn test_invalid_names_are_rejected() {
    let tmp = TempFile::new("invalid");
    let mut store = FileScoreStore::new(&tmp.0);
    assert!(matches!(store.append("", 1), Err(StoreError::EmptyName)));
    assert!(matches!(
        store.append("a:b", 1),
        Err(StoreError::InvalidName(_))
    ));
    assert!(!tmp.0.exists());
}

#[test]
fn test_unwritable_path_reports_io_error() {
    let tmp = TempFile::new("dir");
    let mut store = FileScoreStore::new(tmp.0.join("no-such-dir").join("scores.txt"));
    assert!(matches!(store.append("eve", 1), Err(StoreError::Io { .. })));
}

#[test]
fn test_memory_store_matches_file_semantics() {
    let mut store = MemoryScoreStore::new();
    store.append("alice", 10).unwrap();
    store.append("bob", 20).unwrap();
    store.append("alice", 30).unwrap();
    assert_eq!(store.entries().len(), 3);
    assert_eq!(store.top_n(3), entries(&[("alice", 30), ("bob", 20)]));
}
