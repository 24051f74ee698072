//! Wizard store behavior against in-memory and file-backed storage.

use std::sync::Arc;
use std::time::Duration;

use soc_model::{Section, SectionValue, StepId};
use soc_persistence::{
    AutoSaveConfig, COMPLETED_STEPS_KEY, FORM_DATA_KEY, FileStore, KeyValueStore, MemoryStore,
};
use soc_wizard::{ImportOutcome, WizardError, WizardStore, import_file_async, spawn_autosave};
use tempfile::tempdir;
use tokio::sync::Mutex;

fn immediate(storage: MemoryStore) -> WizardStore<MemoryStore> {
    WizardStore::open(storage, AutoSaveConfig::immediate())
}

fn title(text: &str) -> SectionValue {
    SectionValue::Title(Some(text.to_string()))
}

#[test]
fn test_update_then_update_keeps_last_value() {
    let mut store = immediate(MemoryStore::new());
    store.update(title("X"));
    store.update(title("Y"));
    store.update(SectionValue::list(Section::CorePlatforms, ["ARM"]).unwrap());

    assert_eq!(store.form_data().title.as_deref(), Some("Y"));
    assert!(store.poll_autosave());

    let saved = store.storage().peek(FORM_DATA_KEY).unwrap();
    assert!(saved.contains(r#""title":"Y""#));
    assert!(saved.contains(r#""corePlatforms":["ARM"]"#));
}

#[test]
fn test_rapid_edits_coalesce_into_one_write() {
    let mut store = WizardStore::open(MemoryStore::new(), AutoSaveConfig::default());
    for text in ["A", "AB", "ABC", "ABCD"] {
        store.update(title(text));
        assert!(!store.poll_autosave());
    }
    assert_eq!(store.storage().write_count(), 0);

    store.flush().unwrap();
    // One write per key
    assert_eq!(store.storage().write_count(), 2);
    assert!(!store.is_dirty());
}

#[test]
fn test_mark_completed_is_idempotent() {
    let mut store = immediate(MemoryStore::new());
    assert!(store.mark_completed(StepId::ProjectOverview));
    assert!(store.mark_completed(StepId::Welcome));
    assert!(!store.mark_completed(StepId::ProjectOverview));

    assert_eq!(
        store.completed_steps().as_slice(),
        &[StepId::ProjectOverview, StepId::Welcome]
    );
    store.flush().unwrap();
    assert_eq!(
        store.storage().peek(COMPLETED_STEPS_KEY),
        Some(r#"["project-overview","welcome"]"#)
    );
}

#[test]
fn test_reset_during_pending_debounce_leaves_storage_empty() {
    let mut store = immediate(MemoryStore::new());
    store.update(title("Edge gateway"));
    store.flush().unwrap();

    store.update(title("Changed"));
    store.mark_completed(StepId::ProjectOverview);
    store.reset().unwrap();

    assert!(!store.poll_autosave());
    assert!(store.storage().is_empty());
    assert!(store.form_data().is_empty());
    assert!(store.completed_steps().is_empty());
}

#[test]
fn test_hydration_round_trip() {
    let mut store = immediate(MemoryStore::new());
    store.update(title("Edge gateway"));
    store.mark_completed(StepId::ProjectOverview);
    store.flush().unwrap();

    let reopened = immediate(store.into_storage());
    assert_eq!(reopened.form_data().title.as_deref(), Some("Edge gateway"));
    assert!(reopened.completed_steps().contains(StepId::ProjectOverview));
}

#[test]
fn test_malformed_storage_hydrates_empty_per_key() {
    let storage = MemoryStore::new()
        .with_entry(FORM_DATA_KEY, "{not json")
        .with_entry(COMPLETED_STEPS_KEY, r#"["core-platforms"]"#);
    let store = immediate(storage);
    assert!(store.form_data().is_empty());
    assert!(store.completed_steps().contains(StepId::CorePlatforms));

    let storage = MemoryStore::new()
        .with_entry(FORM_DATA_KEY, r#"{"title":"Kept"}"#)
        .with_entry(COMPLETED_STEPS_KEY, r#"{"oops":true}"#);
    let store = immediate(storage);
    assert_eq!(store.form_data().title.as_deref(), Some("Kept"));
    assert!(store.completed_steps().is_empty());
}

#[test]
fn test_unreadable_storage_hydrates_empty() {
    let mut storage = MemoryStore::new().with_entry(FORM_DATA_KEY, r#"{"title":"X"}"#);
    storage.set_fail_reads(true);
    let store = immediate(storage);
    assert!(store.form_data().is_empty());
}

#[test]
fn test_write_failure_stays_dirty_and_retries_after_next_change() {
    let mut storage = MemoryStore::new();
    storage.set_fail_writes(true);
    let mut store = immediate(storage);

    store.update(title("First"));
    assert!(!store.poll_autosave());
    assert!(store.is_dirty());

    store.storage_mut().set_fail_writes(false);
    // Held until the next change
    assert!(!store.poll_autosave());

    store.update(title("Second"));
    assert!(store.poll_autosave());
    assert!(!store.is_dirty());
    assert!(
        store
            .storage()
            .peek(FORM_DATA_KEY)
            .unwrap()
            .contains("Second")
    );
}

#[test]
fn test_failed_import_leaves_state_unchanged() {
    let mut store = immediate(MemoryStore::new());
    store.update(title("Original"));
    store.mark_completed(StepId::ProjectOverview);
    let before = (store.form_data().clone(), store.completed_steps().clone());

    assert!(store.import_snapshot(r#"{"not":"a snapshot"}"#).is_err());
    assert!(
        store
            .import_snapshot(r#"{"formData":{"title":"New"},"completedSteps":["bogus"]}"#)
            .is_err()
    );

    assert_eq!(store.form_data(), &before.0);
    assert_eq!(store.completed_steps(), &before.1);
}

#[test]
fn test_export_import_round_trip() {
    let mut source = immediate(MemoryStore::new());
    source.update(title("Edge gateway"));
    source.update(SectionValue::list(Section::KeyFeatures, ["OTA", "Secure boot"]).unwrap());
    source.mark_completed(StepId::KeyFeatures);
    let text = source.export_snapshot().unwrap();

    let mut target = immediate(MemoryStore::new());
    target.import_snapshot(&text).unwrap();
    assert_eq!(target.form_data(), source.form_data());
    assert_eq!(target.completed_steps(), source.completed_steps());
    assert!(target.is_dirty());
}

#[test]
fn test_stale_import_token_is_discarded() {
    let mut store = immediate(MemoryStore::new());
    let first = store.begin_import();
    let second = store.begin_import();

    let newer = r#"{"formData":{"title":"Newer"},"completedSteps":[]}"#;
    let older = r#"{"formData":{"title":"Older"},"completedSteps":[]}"#;

    assert_eq!(store.complete_import(second, newer).unwrap(), ImportOutcome::Applied);
    assert_eq!(store.complete_import(first, older).unwrap(), ImportOutcome::Superseded);
    assert_eq!(store.form_data().title.as_deref(), Some("Newer"));

    // A token applies at most once
    assert_eq!(store.complete_import(second, older).unwrap(), ImportOutcome::Superseded);
}

#[test]
fn test_import_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let mut store = immediate(MemoryStore::new());
    let err = store.import_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, WizardError::ReadSnapshot { .. }));
    assert!(err.user_message().contains("missing.json"));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state");

    let mut store = WizardStore::open(FileStore::open(&state).unwrap(), AutoSaveConfig::default());
    store.update(title("Edge gateway"));
    store.mark_completed(StepId::ProjectOverview);
    store.flush().unwrap();
    drop(store);

    let reopened =
        WizardStore::open(FileStore::open(&state).unwrap(), AutoSaveConfig::default());
    assert_eq!(reopened.form_data().title.as_deref(), Some("Edge gateway"));
    assert_eq!(reopened.completion_percentage(), 10);
    assert!(reopened.storage().get(FORM_DATA_KEY).unwrap().is_some());
}

#[tokio::test]
async fn test_autosave_task_writes_current_state() {
    let store = Arc::new(Mutex::new(immediate(MemoryStore::new())));
    let handle = spawn_autosave(Arc::clone(&store), Duration::from_millis(10));

    store.lock().await.update(title("Background"));
    tokio::time::sleep(Duration::from_millis(80)).await;

    {
        let guard = store.lock().await;
        assert!(!guard.is_dirty());
        assert!(
            guard
                .storage()
                .peek(FORM_DATA_KEY)
                .unwrap()
                .contains("Background")
        );
    }

    store.lock().await.reset().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.lock().await.storage().is_empty());

    handle.abort();
}

#[tokio::test]
async fn test_async_import_superseded_by_later_import() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(
        &path,
        r#"{"formData":{"title":"From file"},"completedSteps":["welcome"],"version":"1.0"}"#,
    )
    .unwrap();

    let store = Arc::new(Mutex::new(immediate(MemoryStore::new())));
    let outcome = import_file_async(&store, &path).await.unwrap();
    assert_eq!(outcome, ImportOutcome::Applied);
    assert_eq!(
        store.lock().await.form_data().title.as_deref(),
        Some("From file")
    );

    // Token taken, then a newer import lands first
    let stale = store.lock().await.begin_import();
    store
        .lock()
        .await
        .import_snapshot(r#"{"formData":{"title":"Latest"},"completedSteps":[]}"#)
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let outcome = store.lock().await.complete_import(stale, &text).unwrap();
    assert_eq!(outcome, ImportOutcome::Superseded);
    assert_eq!(store.lock().await.form_data().title.as_deref(), Some("Latest"));
}
