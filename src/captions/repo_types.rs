use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Sad,
    Funny,
    Attitude,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Love => "love",
            Category::Sad => "sad",
            Category::Funny => "funny",
            Category::Attitude => "attitude",
        }
    }
}

/// A caption card: short text plus its category, baseline like count and
/// trending badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    pub id: u32,
    pub text: String,
    pub category: Category,
    pub likes: u32,
    #[serde(default)]
    pub trending: bool,
}
