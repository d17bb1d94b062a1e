//! Content provider descriptors

use serde::{Deserialize, Serialize};

/// Static descriptor of a novel source. Sources are never fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NovelSource {
    pub id: String,
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub version: String,
    pub icon: String,
    pub enabled: bool,
    pub supports_genres: bool,
    pub supports_search: bool,
    pub supports_latest: bool,
}

impl NovelSource {
    /// An enabled English source supporting every capability
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_url: base_url.into(),
            language: "English".to_string(),
            version: "1.0.0".to_string(),
            icon: String::new(),
            enabled: true,
            supports_genres: true,
            supports_search: true,
            supports_latest: true,
        }
    }

    fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// The sources every fresh library starts with
pub fn default_sources() -> Vec<NovelSource> {
    vec![
        NovelSource::new("novelupdates", "Novel Updates", "https://www.novelupdates.com")
            .with_icon("📚"),
        NovelSource::new("boxnovel", "BoxNovel", "https://boxnovel.com").with_icon("📖"),
        NovelSource::new("wuxiaworld", "WuxiaWorld", "https://wuxiaworld.online").with_icon("⚔️"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources() {
        let sources = default_sources();
        let ids: Vec<_> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["novelupdates", "boxnovel", "wuxiaworld"]);
        assert!(sources.iter().all(|s| s.enabled));
    }
}
