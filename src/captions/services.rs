use crate::captions::repo_types::{Caption, Category};

pub const ITEMS_PER_PAGE: usize = 6;

/// Current filter/search/page state of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
    /// None renders every category ("all").
    pub category: Option<Category>,
    pub search: String,
    pub page: usize,
}

impl Default for GridQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            page: 1,
        }
    }
}

/// The visible subset for a query: category equality, then case-insensitive
/// substring match, then a slice that grows with the page number. "Load
/// more" extends the slice; nothing is windowed out.
pub fn visible_captions<'a>(
    captions: &'a [Caption],
    query: &GridQuery,
    per_page: usize,
) -> (Vec<&'a Caption>, bool) {
    let term = query.search.to_lowercase();
    let filtered: Vec<&Caption> = captions
        .iter()
        .filter(|c| query.category.map_or(true, |cat| c.category == cat))
        .filter(|c| term.is_empty() || c.text.to_lowercase().contains(&term))
        .collect();

    let end = query.page.max(1) * per_page;
    let has_more = end < filtered.len();
    (filtered.into_iter().take(end).collect(), has_more)
}
