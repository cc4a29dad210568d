mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use common::{GatedPersister, add_link, empty_editor};
use devlinks::application::services::{
    BeginSave, DisplayState, EditorOptions, EditorStatus, LinkEditor, SaveOutcome,
};
use devlinks::domain::entities::{LinkField, LinkId};
use devlinks::domain::validation::LinkErrorKind;
use devlinks::infrastructure::persistence::InMemoryProfileStore;

#[test]
fn test_ids_stay_unique_across_adds_and_removes() {
    let (mut editor, _) = empty_editor();
    let mut kept = Vec::new();

    for round in 0..40 {
        let id = editor.add_entry().unwrap();
        if round % 3 == 0 {
            editor.remove_entry(&id);
        } else {
            kept.push(id);
        }
        if round % 7 == 0 && !kept.is_empty() {
            let victim = kept.remove(0);
            editor.remove_entry(&victim);
        }
    }

    let ids: HashSet<&LinkId> = editor.collection().ids().collect();
    assert_eq!(ids.len(), editor.len());
    assert_eq!(editor.len(), kept.len());
}

#[test]
fn test_remove_unknown_id_leaves_collection_unchanged() {
    let (mut editor, _) = empty_editor();
    add_link(&mut editor, "Github", "https://github.com/alice");
    add_link(&mut editor, "Twitter", "https://x.com/alice");
    let before = editor.collection().clone();

    let removed = editor.remove_entry(&LinkId::new("does-not-exist"));

    assert!(!removed);
    assert_eq!(editor.len(), 2);
    assert_eq!(editor.collection(), &before);
}

#[tokio::test]
async fn test_save_with_empty_url_reports_missing_url() {
    let (mut editor, store) = empty_editor();
    let id = add_link(&mut editor, "Github", "");
    let before = editor.collection().clone();

    let outcome = editor.save().await;

    let SaveOutcome::Invalid(report) = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert_eq!(report.kinds_for(&id), vec![LinkErrorKind::MissingUrl]);
    assert_eq!(editor.collection(), &before);
    assert_eq!(store.persist_count(), 0);
}

#[tokio::test]
async fn test_save_valid_entry_transitions_to_saved() {
    let (mut editor, store) = empty_editor();
    add_link(&mut editor, "Github", "https://github.com/alice");

    let outcome = editor.save().await;

    assert!(outcome.is_saved());
    assert!(matches!(editor.status(), EditorStatus::Saved { .. }));
    assert_eq!(store.persist_count(), 1);
}

#[tokio::test]
async fn test_save_preserves_insertion_order() {
    let (mut editor, store) = empty_editor();
    let first = editor.add_entry().unwrap();
    let second = editor.add_entry().unwrap();
    editor.update_entry(&first, LinkField::Platform, "Github");
    editor.update_entry(&first, LinkField::Url, "https://github.com/a");
    editor.update_entry(&second, LinkField::Platform, "Twitter");
    editor.update_entry(&second, LinkField::Url, "https://x.com/a");

    assert!(editor.save().await.is_saved());

    let platforms: Vec<&str> = editor
        .entries()
        .iter()
        .map(|e| e.platform.as_str())
        .collect();
    assert_eq!(platforms, vec!["Github", "Twitter"]);

    let stored = store.snapshot().await.unwrap().links;
    let stored_platforms: Vec<&str> = stored.iter().map(|e| e.platform.as_str()).collect();
    assert_eq!(stored_platforms, vec!["Github", "Twitter"]);
}

#[test]
fn test_add_then_remove_returns_to_empty_state() {
    let (mut editor, _) = empty_editor();
    assert_eq!(editor.display_state(), DisplayState::Empty);

    let id = editor.add_entry().unwrap();
    assert_eq!(editor.display_state(), DisplayState::List);

    editor.remove_entry(&id);

    assert!(editor.is_empty());
    assert_eq!(editor.display_state(), DisplayState::Empty);
}

#[tokio::test]
async fn test_late_result_does_not_mark_newer_edits_saved() {
    let persister = Arc::new(GatedPersister::default());
    let mut editor =
        LinkEditor::new(Vec::new(), persister.clone(), EditorOptions::default()).unwrap();
    let id = add_link(&mut editor, "Github", "https://github.com/alice");

    let BeginSave::Started(pending) = editor.begin_save() else {
        panic!("expected save to start");
    };
    let in_flight = tokio::spawn(pending.run());

    // Edits are not blocked while the save is outstanding.
    editor.update_entry(&id, LinkField::Url, "not a url");
    assert_eq!(editor.status(), EditorStatus::Saving);

    persister.release();
    let completion = in_flight.await.unwrap();
    let outcome = editor.complete_save(completion);

    assert!(matches!(outcome, SaveOutcome::Stale));
    assert_eq!(editor.status(), EditorStatus::Idle);
    assert_eq!(editor.entry(&id).unwrap().url, "not a url");

    let stored = persister.stored.lock().await.clone().unwrap();
    assert_eq!(stored.entries()[0].url, "https://github.com/alice");
}

#[tokio::test]
async fn test_second_save_is_ignored_while_first_in_flight() {
    let persister = Arc::new(GatedPersister::default());
    let mut editor =
        LinkEditor::new(Vec::new(), persister.clone(), EditorOptions::default()).unwrap();
    add_link(&mut editor, "Github", "https://github.com/alice");

    let BeginSave::Started(pending) = editor.begin_save() else {
        panic!("expected save to start");
    };
    let in_flight = tokio::spawn(pending.run());

    assert!(matches!(editor.begin_save(), BeginSave::AlreadySaving));
    assert!(matches!(editor.save().await, SaveOutcome::AlreadySaving));

    persister.release();
    let outcome = editor.complete_save(in_flight.await.unwrap());

    assert!(outcome.is_saved());
    assert_eq!(persister.call_count(), 1);
}

#[tokio::test]
async fn test_cancelled_save_does_not_block_later_saves() {
    let persister = Arc::new(GatedPersister::default());
    let mut editor =
        LinkEditor::new(Vec::new(), persister.clone(), EditorOptions::default()).unwrap();
    add_link(&mut editor, "Github", "https://github.com/alice");

    let timed_out = tokio::time::timeout(Duration::from_millis(50), editor.save()).await;

    assert!(timed_out.is_err());
    assert!(!editor.is_saving());
    assert_eq!(editor.status(), EditorStatus::Idle);

    persister.release();
    assert!(editor.save().await.is_saved());
    assert_eq!(persister.call_count(), 2);
}

#[tokio::test]
async fn test_persist_failure_is_recoverable() {
    let (mut editor, store) = empty_editor();
    add_link(&mut editor, "Github", "https://github.com/alice");
    store.fail_next_persist();

    let first = editor.save().await;
    assert!(matches!(first, SaveOutcome::Failed(_)));
    assert!(matches!(editor.status(), EditorStatus::Failed(_)));

    let second = editor.save().await;
    assert!(second.is_saved());
    assert_eq!(store.persist_count(), 1);
}

#[tokio::test]
async fn test_load_from_store() {
    let store = Arc::new(InMemoryProfileStore::with_demo_profile());

    let editor = LinkEditor::load(store.as_ref(), store.clone(), EditorOptions::default())
        .await
        .unwrap();

    assert_eq!(editor.len(), 4);
    assert_eq!(editor.display_state(), DisplayState::List);
    assert_eq!(editor.entries()[0].platform, "Github");
}

#[tokio::test]
async fn test_invalid_entries_reported_per_id() {
    let (mut editor, _) = empty_editor();
    let good = add_link(&mut editor, "Github", "https://github.com/alice");
    let no_platform = add_link(&mut editor, "", "https://x.com/alice");
    let bad_url = add_link(&mut editor, "Twitter", "twitter");

    let SaveOutcome::Invalid(report) = editor.save().await else {
        panic!("expected validation errors");
    };

    assert!(report.errors_for(&good).is_empty());
    assert_eq!(report.kinds_for(&no_platform), vec![LinkErrorKind::MissingPlatform]);
    assert_eq!(report.kinds_for(&bad_url), vec![LinkErrorKind::InvalidUrlFormat]);
    assert_eq!(report.len(), 2);
}
