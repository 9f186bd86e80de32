//! Tests for the SQLite-backed store.

use tempfile::NamedTempFile;

use strictly_state::{KeyValueStore, PersistedState, SavedGame, SqliteStore, move_slot};

/// Creates a temporary database file and an opened store. The file handle
/// must stay in scope to keep the file alive.
fn setup_test_store() -> (NamedTempFile, SqliteStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let store = SqliteStore::open(db_path).expect("Failed to open store");
    (db_file, store)
}

#[test]
fn test_get_absent_slot() {
    let (_db, store) = setup_test_store();
    assert_eq!(store.get("missing").expect("Get failed"), None);
}

#[test]
fn test_set_then_get() {
    let (_db, store) = setup_test_store();
    store.set("name", "\"Ada\"").expect("Set failed");
    assert_eq!(store.get("name").expect("Get failed").as_deref(), Some("\"Ada\""));
}

#[test]
fn test_set_replaces_value() {
    let (_db, store) = setup_test_store();
    store.set("step", "1").expect("Set failed");
    store.set("step", "2").expect("Set failed");

    assert_eq!(store.get("step").expect("Get failed").as_deref(), Some("2"));
    assert_eq!(store.list_slots().expect("List failed").len(), 1);
}

#[test]
fn test_delete_slot() {
    let (_db, store) = setup_test_store();
    store.set("step", "1").expect("Set failed");

    store.delete("step").expect("Delete failed");
    store.delete("step").expect("Deleting an absent slot should succeed");

    assert_eq!(store.get("step").expect("Get failed"), None);
}

#[test]
fn test_list_slots_ordered_by_key() {
    let (_db, store) = setup_test_store();
    store.set("b", "2").expect("Set failed");
    store.set("a", "1").expect("Set failed");

    let slots = store.list_slots().expect("List failed");
    let keys: Vec<&str> = slots.iter().map(|s| s.key().as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_reopen_keeps_slots() {
    let (db, store) = setup_test_store();
    store.set("name", "\"Ada\"").expect("Set failed");

    let reopened = SqliteStore::open(db.path().to_str().unwrap().to_string())
        .expect("Reopen failed");
    assert_eq!(reopened.get("name").expect("Get failed").as_deref(), Some("\"Ada\""));
}

#[test]
fn test_persisted_state_rekey_on_sqlite() {
    let (_db, store) = setup_test_store();
    let mut state = PersistedState::<Vec<u8>, _>::initialize(store.clone(), "old", vec![1u8, 2])
        .expect("Initialize failed");

    state.rekey("new").expect("Rekey failed");

    assert_eq!(store.get("old").expect("Get failed"), None);
    assert_eq!(store.get("new").expect("Get failed").as_deref(), Some("[1,2]"));
}

#[test]
fn test_saved_game_on_sqlite() {
    let (_db, store) = setup_test_store();
    {
        let mut saved = SavedGame::open(store.clone()).expect("Open failed");
        for index in [0, 1, 3, 4, 6] {
            saved.select_index(index).expect("Move failed");
        }
    }

    let saved = SavedGame::open(store).expect("Reopen failed");
    assert_eq!(saved.game().history().len(), 6);
    assert_eq!(saved.game().status().to_string(), "Winner: X");
}

#[test]
fn test_open_invalid_path_fails() {
    let result = SqliteStore::open("/nonexistent/dir/store.db".to_string());
    assert!(result.is_err());
}

#[test]
fn test_move_slot_keeps_non_json_value() {
    let (_db, store) = setup_test_store();
    store.set("legacy", "Ada").expect("Set failed");

    assert!(move_slot(&store, "legacy", "name").expect("Move failed"));

    assert_eq!(store.get("legacy").expect("Get failed"), None);
    assert_eq!(store.get("name").expect("Get failed").as_deref(), Some("Ada"));
}
