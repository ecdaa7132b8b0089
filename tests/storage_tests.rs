use std::sync::Arc;

use captionlagbe::auth::repo::UserStore;
use captionlagbe::config::AppConfig;
use captionlagbe::state::AppState;
use captionlagbe::storage::{FileStorage, MemoryStorage, StorageBackend, USERS_KEY};
use captionlagbe::theme;

#[test]
fn file_storage_round_trips_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    {
        let storage = FileStorage::open(&path);
        storage.set("k", "v");
        storage.set("other", "value");
        storage.remove("other");
    }

    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("k").as_deref(), Some("v"));
    assert!(reopened.get("other").is_none());
}

#[test]
fn file_storage_opens_missing_file_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path().join("does-not-exist.json"));
    assert!(storage.get("k").is_none());
}

#[test]
fn file_storage_opens_corrupt_file_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{{{{ definitely not json").expect("write");

    let storage = FileStorage::open(&path);
    assert!(storage.get("k").is_none());

    // writes recover the file
    storage.set("k", "v");
    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("k").as_deref(), Some("v"));
}

#[test]
fn user_collection_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    {
        let store = UserStore::new(Arc::new(FileStorage::open(&path)));
        store.register("a@b.com", "secret1").expect("register");
    }

    let store = UserStore::new(Arc::new(FileStorage::open(&path)));
    assert_eq!(store.all_users().len(), 1);
    let session = store.login("a@b.com", "secret1").expect("login after reopen");
    assert_eq!(session.email, "a@b.com");
}

#[test]
fn state_from_parts_injects_a_backend() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(USERS_KEY, "[]");

    let config = Arc::new(AppConfig {
        storage_path: None,
        items_per_page: 6,
        dark_mode_default: false,
    });
    let state = AppState::from_parts(config, storage.clone());
    assert_eq!(state.storage.get(USERS_KEY).as_deref(), Some("[]"));
}

#[test]
fn theme_preference_round_trips_through_file_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    {
        let storage = FileStorage::open(&path);
        assert!(theme::toggle_dark_mode(&storage, false));
    }

    let reopened = FileStorage::open(&path);
    assert!(theme::dark_mode(&reopened, false));
}
