//! End-to-end card flows: editor drafts through the collection down to the
//! JSON file and back.

use flexnotes::cards::{CardCollection, CardDraft, CardStore};
use flexnotes::dictation::DictationEvent;
use flexnotes::ui::{AppState, Screen};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> CardStore {
    CardStore::at(dir.path().join("cards.json"))
}

#[test]
fn test_create_edit_flow_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();

    // First launch: create two cards, edit one
    {
        let mut state = AppState::with_store(store_in(&dir));
        assert!(state.collection.is_empty());

        state.open_editor(None);
        state.editor.title = "Groceries".to_string();
        state.editor.content = "milk".to_string();
        assert!(state.save_editor());

        state.open_editor(None);
        state.editor.title = "Speech".to_string();
        state.editor.content = "Friends, Romans".to_string();
        assert!(state.save_editor());

        state.open_editor(Some(0));
        state.editor.content = "milk and eggs".to_string();
        assert!(state.save_editor());

        assert_eq!(state.collection.len(), 2, "edits never change length");
    }

    // Second launch: everything is back, ids intact
    let state = AppState::with_store(store_in(&dir));
    let cards = state.collection.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Groceries");
    assert_eq!(cards[0].content, "milk and eggs");
    assert_eq!(cards[1].title, "Speech");
}

#[test]
fn test_collection_length_equals_number_of_creates() {
    let mut collection = CardCollection::new();
    for i in 0..5 {
        collection.append(CardDraft::new(format!("Card {i}"), ""));
    }
    for i in 0..5 {
        collection.replace(i, CardDraft::new(format!("Card {i} v2"), "edited"));
    }
    assert_eq!(collection.len(), 5);
}

#[test]
fn test_rejected_save_leaves_disk_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let mut state = AppState::with_store(store_in(&dir));
    state.open_editor(None);
    state.editor.title = "Kept".to_string();
    assert!(state.save_editor());

    state.open_editor(None);
    state.editor.title = "\t \n".to_string();
    state.editor.content = "orphan body".to_string();
    assert!(!state.save_editor());

    let reloaded = store_in(&dir).load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].title, "Kept");
}

#[test]
fn test_legacy_file_upgrades_on_next_save() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"[{"title":"Antiga","conteudo":"corpo legado"}]"#,
    )
    .unwrap();

    let mut state = AppState::with_store(store);
    assert_eq!(state.collection.cards()[0].content, "corpo legado");

    // Any mutation persists the canonical shape
    state.open_editor(Some(0));
    state.editor.title = "Antiga".to_string();
    assert!(state.save_editor());

    let raw = fs::read_to_string(store_in(&dir).path()).unwrap();
    assert!(raw.contains("\"content\":\"corpo legado\""));
    assert!(!raw.contains("conteudo"));
}

#[test]
fn test_dictation_feeds_the_draft_and_save_persists_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::with_store(store_in(&dir));

    state.open_editor(None);
    state.editor.title = "Dictated".to_string();
    state.apply_dictation_event(DictationEvent::Transcript("first part".to_string()));
    state.apply_dictation_event(DictationEvent::Transcript("second part".to_string()));
    state.apply_dictation_event(DictationEvent::Ended);

    assert!(state.save_editor());
    assert_eq!(state.screen, Screen::Home);

    let reloaded = store_in(&dir).load();
    assert_eq!(reloaded[0].content, "first part second part");
}
