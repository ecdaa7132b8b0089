use crate::config::AppConfig;
use crate::storage::{FileStorage, MemoryStorage, StorageBackend};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn StorageBackend>,
}

impl AppState {
    pub fn init() -> Self {
        let config = Arc::new(AppConfig::from_env());
        let storage: Arc<dyn StorageBackend> = match &config.storage_path {
            Some(path) => Arc::new(FileStorage::open(path)),
            None => Arc::new(MemoryStorage::new()),
        };
        Self { config, storage }
    }

    pub fn from_parts(config: Arc<AppConfig>, storage: Arc<dyn StorageBackend>) -> Self {
        Self { config, storage }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            storage_path: None,
            items_per_page: 6,
            dark_mode_default: false,
        });
        Self {
            config,
            storage: Arc::new(MemoryStorage::new()),
        }
    }
}
