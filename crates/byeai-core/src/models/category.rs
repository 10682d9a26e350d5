//! Vote categories.
//!
//! # Examples
//!
//! ```
//! use byeai_core::models::Category;
//!
//! assert_eq!(Category::parse("deepfake"), Category::Deepfake);
//! assert_eq!(Category::parse("AI-Script"), Category::AiScript);
//! assert_eq!(Category::parse("something else"), Category::Other);
//! ```

use serde::{Deserialize, Serialize};

/// Closed set of categories a vote can carry, plus the `Other` catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AiGeneral,
    AiScript,
    AiThumbnail,
    AiMusic,
    AiVoice,
    Deepfake,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::AiGeneral,
        Category::AiScript,
        Category::AiThumbnail,
        Category::AiMusic,
        Category::AiVoice,
        Category::Deepfake,
        Category::Other,
    ];

    /// Parse a client-supplied tag. Matching ignores ASCII case; anything
    /// outside the closed set lands in `Other`.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Category::Other)
    }

    /// Stable storage tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AiGeneral => "ai-general",
            Category::AiScript => "ai-script",
            Category::AiThumbnail => "ai-thumbnail",
            Category::AiMusic => "ai-music",
            Category::AiVoice => "ai-voice",
            Category::Deepfake => "deepfake",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
