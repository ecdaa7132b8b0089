use std::sync::Arc;

use tracing::debug;

use crate::captions::catalog::CaptionCatalog;
use crate::captions::repo::LikeStore;
use crate::captions::repo_types::{Caption, Category};
use crate::captions::services::{visible_captions, GridQuery};
use crate::state::AppState;
use crate::toast::{Notifier, ToastLevel};

/// One rendered card: the caption plus its per-device like state. The
/// displayed count is the baseline plus the local like; the catalog itself
/// is never mutated.
#[derive(Debug, Clone)]
pub struct CardView {
    pub caption: Caption,
    pub liked: bool,
    pub display_likes: u32,
}

#[derive(Debug, Clone)]
pub struct GridView {
    pub cards: Vec<CardView>,
    /// Drives the load-more button.
    pub has_more: bool,
}

/// Filter/search/page state machine over the caption catalog.
pub struct GridController {
    catalog: CaptionCatalog,
    likes: LikeStore,
    notifier: Arc<dyn Notifier>,
    query: GridQuery,
    per_page: usize,
}

impl GridController {
    pub fn new(
        catalog: CaptionCatalog,
        likes: LikeStore,
        notifier: Arc<dyn Notifier>,
        per_page: usize,
    ) -> Self {
        Self {
            catalog,
            likes,
            notifier,
            query: GridQuery::default(),
            per_page,
        }
    }

    pub fn from_state(state: &AppState, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(
            CaptionCatalog::builtin(),
            LikeStore::new(state.storage.clone()),
            notifier,
            state.config.items_per_page,
        )
    }

    pub fn query(&self) -> &GridQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.query.category = category;
        self.query.page = 1;
        debug!(category = ?category.map(Category::as_str), "category changed");
    }

    pub fn set_search(&mut self, term: &str) {
        self.query.search = term.to_string();
        self.query.page = 1;
    }

    pub fn load_more(&mut self) {
        self.query.page += 1;
    }

    /// Recomputes the visible cards for the current query.
    pub fn render(&self) -> GridView {
        let (visible, has_more) = visible_captions(self.catalog.captions(), &self.query, self.per_page);
        let cards = visible
            .into_iter()
            .map(|caption| {
                let liked = self.likes.is_liked(caption.id);
                CardView {
                    caption: caption.clone(),
                    liked,
                    display_likes: caption.likes + u32::from(liked),
                }
            })
            .collect();
        GridView { cards, has_more }
    }

    /// Returns the new liked state, or None for an unknown caption.
    pub fn toggle_like(&mut self, caption_id: u32) -> Option<bool> {
        self.catalog.get(caption_id)?;
        Some(self.likes.toggle(caption_id))
    }

    /// Hands back the text for the clipboard and toasts.
    pub fn copy(&self, caption_id: u32) -> Option<String> {
        let caption = self.catalog.get(caption_id)?;
        self.notifier.notify(ToastLevel::Success, "Caption copied");
        Some(caption.text.clone())
    }

    /// Share stub; without a share sheet this is only a toast.
    pub fn share(&self, caption_id: u32) {
        if self.catalog.get(caption_id).is_some() {
            self.notifier
                .notify(ToastLevel::Success, "Tap the icons above for share options");
        }
    }
}
