use std::sync::Arc;

use tracing::debug;

use crate::storage::{liked_key, StorageBackend};

/// Per-caption liked flags, one storage key per caption. Likes are
/// anonymous; they carry no relation to the user store's session.
#[derive(Clone)]
pub struct LikeStore {
    storage: Arc<dyn StorageBackend>,
}

impl LikeStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    pub fn is_liked(&self, caption_id: u32) -> bool {
        self.storage.get(&liked_key(caption_id)).is_some()
    }

    /// Flips the flag and returns the new liked state.
    pub fn toggle(&self, caption_id: u32) -> bool {
        if self.is_liked(caption_id) {
            self.storage.remove(&liked_key(caption_id));
            debug!(caption_id, "caption unliked");
            false
        } else {
            self.storage.set(&liked_key(caption_id), "true");
            debug!(caption_id, "caption liked");
            true
        }
    }
}
