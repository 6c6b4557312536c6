use std::fs;

use alien_invasion::error::GameError;
use alien_invasion::scores::{ScoreRecord, ScoreStore, MIN_RECORD_BYTES};

#[test]
fn saved_score_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));

    store.save(&ScoreRecord { hi_score: 1234 }).unwrap();

    assert_eq!(store.load().hi_score, 1234);
}

#[test]
fn saved_file_is_json_with_hi_score_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));
    store.save(&ScoreRecord { hi_score: 77 }).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["hi_score"], 77);
}

#[test]
fn missing_file_reads_zero_and_writes_fresh_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));

    assert_eq!(store.load(), ScoreRecord { hi_score: 0 });
    assert!(store.path().exists());
    assert_eq!(store.load().hi_score, 0);
}

#[test]
fn corrupt_file_reads_zero_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "definitely not a score record").unwrap();
    let store = ScoreStore::new(&path);

    assert_eq!(store.load().hi_score, 0);

    let contents = fs::read_to_string(&path).unwrap();
    let record: ScoreRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(record.hi_score, 0);
}

#[test]
fn truncated_file_reads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "{\"hi\":9}").unwrap();
    assert!((fs::metadata(&path).unwrap().len()) < MIN_RECORD_BYTES);

    assert_eq!(ScoreStore::new(&path).load().hi_score, 0);
}

#[test]
fn smallest_valid_record_passes_the_size_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "{\"hi_score\":5}").unwrap();

    assert_eq!(ScoreStore::new(&path).load().hi_score, 5);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("nested").join("deeper").join("scores.json"));

    store.save(&ScoreRecord { hi_score: 3 }).unwrap();
    assert_eq!(store.load().hi_score, 3);
}

#[test]
fn unwritable_path_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file where a directory should be").unwrap();
    let store = ScoreStore::new(blocker.join("scores.json"));

    let err = store.save(&ScoreRecord { hi_score: 10 }).unwrap_err();
    assert!(matches!(err, GameError::ScoreWrite { .. }));

    // Loading still works and falls back to zero
    assert_eq!(store.load().hi_score, 0);
}

#[test]
fn new_high_score_is_written_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));
    store.save(&ScoreRecord { hi_score: 100 }).unwrap();

    assert!(store.save_if_higher(150, 100).unwrap());
    assert_eq!(store.load().hi_score, 150);
}

#[test]
fn score_not_above_stored_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.json"));
    store.save(&ScoreRecord { hi_score: 100 }).unwrap();

    assert!(!store.save_if_higher(100, 100).unwrap());
    assert!(!store.save_if_higher(40, 100).unwrap());
    assert_eq!(store.load().hi_score, 100);
}
