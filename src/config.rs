use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the storage file. In-memory storage when unset.
    pub storage_path: Option<String>,
    pub items_per_page: usize,
    pub dark_mode_default: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            storage_path: std::env::var("CAPTIONLAGBE_STORAGE_PATH").ok(),
            items_per_page: std::env::var("CAPTIONLAGBE_ITEMS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(6),
            dark_mode_default: std::env::var("CAPTIONLAGBE_DARK_MODE")
                .ok()
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false),
        }
    }
}
