//! The Novel type - the root record of the library

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a novel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum NovelStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
}

impl NovelStatus {
    pub const ALL: [NovelStatus; 3] = [
        NovelStatus::Ongoing,
        NovelStatus::Completed,
        NovelStatus::Hiatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "Ongoing",
            NovelStatus::Completed => "Completed",
            NovelStatus::Hiatus => "Hiatus",
        }
    }
}

impl fmt::Display for NovelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NovelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// A catalogued web novel with reading progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    pub id: String,
    pub title: String,
    pub author: String,

    /// Cover image reference (URL)
    pub cover: String,
    pub description: String,
    pub genres: Vec<String>,

    /// Free-form tags
    pub tags: Vec<String>,
    pub status: NovelStatus,
    pub rating: f64,
    pub total_chapters: u32,

    /// Expected to stay at or below `total_chapters`, not enforced
    pub read_chapters: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read_chapter: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read_date: Option<DateTime<Utc>>,
    pub date_added: DateTime<Utc>,

    /// Identifier of the source the novel was added from
    pub source: String,
    pub url: String,
    pub bookmarked: bool,
    pub downloaded: bool,
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl Novel {
    /// Create a novel with a fresh id, added now
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            cover: String::new(),
            description: String::new(),
            genres: Vec::new(),
            tags: Vec::new(),
            status: NovelStatus::default(),
            rating: 0.0,
            total_chapters: 0,
            read_chapters: 0,
            last_read_chapter: None,
            last_read_date: None,
            date_added: Utc::now(),
            source: "local".to_string(),
            url: String::new(),
            bookmarked: false,
            downloaded: false,
            language: "English".to_string(),
            release_date: None,
            last_update: None,
        }
    }

    /// Override the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set publication status
    pub fn with_status(mut self, status: NovelStatus) -> Self {
        self.status = status;
        self
    }

    /// Set read and total chapter counters
    pub fn with_chapters(mut self, read: u32, total: u32) -> Self {
        self.read_chapters = read;
        self.total_chapters = total;
        self
    }

    /// Fraction of chapters read, 0 when the total is unknown
    pub fn progress(&self) -> f64 {
        if self.total_chapters > 0 {
            f64::from(self.read_chapters) / f64::from(self.total_chapters)
        } else {
            0.0
        }
    }

    /// Whether every known chapter has been read
    pub fn is_finished(&self) -> bool {
        self.read_chapters >= self.total_chapters
    }

    /// Case-insensitive substring match on title, author or any genre.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(needle))
    }

    /// Case-insensitive substring match on title, author or any genre
    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}
