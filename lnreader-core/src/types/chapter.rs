//! Chapter type representing a single chapter of a novel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chapter, owned by exactly one novel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,

    /// Id of the owning novel
    pub novel_id: String,
    pub title: String,

    /// Ordinal position within the novel
    pub number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    pub read: bool,
    pub bookmarked: bool,
    pub downloaded: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

impl Chapter {
    /// Create an unread chapter for a novel
    pub fn new(
        id: impl Into<String>,
        novel_id: impl Into<String>,
        title: impl Into<String>,
        number: u32,
    ) -> Self {
        Self {
            id: id.into(),
            novel_id: novel_id.into(),
            title: title.into(),
            number,
            content: None,
            url: String::new(),
            release_date: None,
            read: false,
            bookmarked: false,
            downloaded: false,
            word_count: None,
        }
    }

    /// Attach chapter text, deriving the word count from it
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        self.word_count = Some(content.split_whitespace().count() as u32);
        self.content = Some(content);
        self
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}
