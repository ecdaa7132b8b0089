//! Dark-mode preference, stored as the original page's "darkMode" key.

use crate::storage::{StorageBackend, DARK_MODE_KEY};

pub fn dark_mode(storage: &dyn StorageBackend, default: bool) -> bool {
    match storage.get(DARK_MODE_KEY) {
        Some(value) => value == "true",
        None => default,
    }
}

/// Flips the preference and persists it. Returns the new state.
pub fn toggle_dark_mode(storage: &dyn StorageBackend, default: bool) -> bool {
    let next = !dark_mode(storage, default);
    storage.set(DARK_MODE_KEY, if next { "true" } else { "false" });
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn toggle_persists_and_round_trips() {
        let storage = MemoryStorage::new();
        assert!(!dark_mode(&storage, false));
        assert!(dark_mode(&storage, true));

        assert!(toggle_dark_mode(&storage, false));
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("true"));
        // default no longer matters once a value is stored
        assert!(dark_mode(&storage, false));

        assert!(!toggle_dark_mode(&storage, false));
        assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("false"));
    }
}
