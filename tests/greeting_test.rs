//! Tests for the persisted greeting.

use strictly_state::{Greeting, KeyValueStore, MemoryStore, NAME_KEY};

#[test]
fn test_empty_name_prompts() {
    let greeting = Greeting::open(MemoryStore::new(), "").expect("Open failed");
    assert_eq!(greeting.message(), "Please type your name");
}

#[test]
fn test_initial_name_used_when_nothing_stored() {
    let greeting = Greeting::open(MemoryStore::new(), "Kody").expect("Open failed");
    assert_eq!(greeting.message(), "Hello Kody");
}

#[test]
fn test_stored_name_wins_over_initial_name() {
    let store = MemoryStore::new();
    {
        let mut greeting = Greeting::open(store.clone(), "").expect("Open failed");
        greeting.set_name("Ada").expect("Set failed");
    }

    let greeting = Greeting::open(store.clone(), "Kody").expect("Reopen failed");
    assert_eq!(greeting.name(), "Ada");
    assert_eq!(store.get(NAME_KEY).unwrap().as_deref(), Some("\"Ada\""));
}
