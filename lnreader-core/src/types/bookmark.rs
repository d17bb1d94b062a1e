use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved position inside a chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub novel_id: String,
    pub chapter_id: String,

    /// Offset within the chapter text
    pub position: u64,

    /// Quoted passage
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(
        novel_id: impl Into<String>,
        chapter_id: impl Into<String>,
        position: u64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            novel_id: novel_id.into(),
            chapter_id: chapter_id.into(),
            position,
            text: text.into(),
            note: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
