use crate::captions::repo_types::{Caption, Category};

/// The static, in-memory caption list the grid renders from. Order does not
/// matter; filtering is linear.
pub struct CaptionCatalog {
    captions: Vec<Caption>,
}

impl CaptionCatalog {
    pub fn new(captions: Vec<Caption>) -> Self {
        Self { captions }
    }

    /// The captions shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin_captions())
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn get(&self, id: u32) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id == id)
    }

    /// Appends a caption with the next free id and returns that id.
    pub fn add(&mut self, text: &str, category: Category, trending: bool) -> u32 {
        let id = self.captions.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.captions.push(Caption {
            id,
            text: text.to_string(),
            category,
            likes: 0,
            trending,
        });
        id
    }
}

fn builtin_captions() -> Vec<Caption> {
    let entries: [(u32, &str, Category, u32, bool); 12] = [
        (1, "Every sunset is a promise of a new dawn with you", Category::Love, 245, true),
        (2, "You are my favorite notification", Category::Love, 189, false),
        (3, "Home is wherever you are", Category::Love, 167, false),
        (4, "Some goodbyes never stop echoing", Category::Sad, 203, true),
        (5, "Smiling on the outside, buffering on the inside", Category::Sad, 134, false),
        (6, "Rain hides the tears nobody asked about", Category::Sad, 98, false),
        (7, "I'm not lazy, I'm on energy-saving mode", Category::Funny, 312, true),
        (8, "My bed and I are in a committed relationship", Category::Funny, 221, false),
        (9, "Running late is my cardio", Category::Funny, 156, false),
        (10, "I'm not arrogant, I'm just better than you thought", Category::Attitude, 278, true),
        (11, "Born to stand out, never to fit in", Category::Attitude, 192, false),
        (12, "My vibe speaks before I do", Category::Attitude, 145, false),
    ];
    entries
        .into_iter()
        .map(|(id, text, category, likes, trending)| Caption {
            id,
            text: text.to_string(),
            category,
            likes,
            trending,
        })
        .collect()
}
