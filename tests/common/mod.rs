use std::sync::{Arc, Mutex};

use captionlagbe::auth::repo::UserStore;
use captionlagbe::state::AppState;
use captionlagbe::toast::{Notifier, ToastLevel};

/// Initialize test logging once; repeated calls are harmless.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("captionlagbe=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Memory-backed app state.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::fake()
}

/// User store over fresh in-memory storage.
#[allow(dead_code)]
pub fn test_store() -> UserStore {
    UserStore::new(test_state().storage)
}

/// Notifier that records every toast for assertions.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastLevel, String)>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn last(&self) -> Option<(ToastLevel, String)> {
        self.toasts.lock().unwrap().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.lock().unwrap().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
