//! Static browse catalog
//!
//! Sources are descriptors only; nothing is fetched. Browsing serves a fixed
//! set of sample novels through the same views a live source would offer.

use crate::types::{Novel, NovelSource, NovelStatus};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The sample novels offered by every browse view
pub fn sample_novels() -> Vec<Novel> {
    let now = Utc::now();
    vec![
        Novel {
            id: "sample-1".to_string(),
            title: "Shadow Slave".to_string(),
            author: "Guiltythree".to_string(),
            cover: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop".to_string(),
            description: "Growing up in poverty, Sunny never expected anything good from life. However, even he did not anticipate being chosen by the Nightmare Spell and becoming one of the Awakened.".to_string(),
            genres: strings(&["Fantasy", "Action", "Supernatural"]),
            tags: strings(&["System", "Academy", "Weak to Strong"]),
            status: NovelStatus::Ongoing,
            rating: 4.8,
            total_chapters: 1500,
            read_chapters: 0,
            last_read_chapter: None,
            last_read_date: None,
            date_added: now,
            source: "webnovel".to_string(),
            url: "https://example.com/shadow-slave".to_string(),
            bookmarked: false,
            downloaded: false,
            language: "English".to_string(),
            release_date: date(2020, 1, 1),
            last_update: Some(now),
        },
        Novel {
            id: "sample-2".to_string(),
            title: "Lord of the Mysteries".to_string(),
            author: "Cuttlefish That Loves Diving".to_string(),
            cover: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=400&fit=crop".to_string(),
            description: "With the rising tide of steam power and machinery, who can come close to being a Beyonder? Shrouded in the fog of history and darkness, who or what is the lurking evil that murmurs into our ears?".to_string(),
            genres: strings(&["Mystery", "Fantasy", "Supernatural"]),
            tags: strings(&["Steampunk", "Mystery", "Gods"]),
            status: NovelStatus::Completed,
            rating: 4.9,
            total_chapters: 1394,
            read_chapters: 0,
            last_read_chapter: None,
            last_read_date: None,
            date_added: now,
            source: "webnovel".to_string(),
            url: "https://example.com/lord-mysteries".to_string(),
            bookmarked: false,
            downloaded: false,
            language: "English".to_string(),
            release_date: date(2018, 4, 1),
            last_update: date(2020, 5, 1),
        },
        Novel {
            id: "sample-3".to_string(),
            title: "Reverend Insanity".to_string(),
            author: "Gu Zhen Ren".to_string(),
            cover: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=400&fit=crop".to_string(),
            description: "Humans are clever in tens of thousands of ways, Gu are the true refined essences of Heaven and Earth.".to_string(),
            genres: strings(&["Xianxia", "Drama", "Mature"]),
            tags: strings(&["Evil MC", "Cunning", "Cultivation"]),
            status: NovelStatus::Hiatus,
            rating: 4.7,
            total_chapters: 2334,
            read_chapters: 0,
            last_read_chapter: None,
            last_read_date: None,
            date_added: now,
            source: "webnovel".to_string(),
            url: "https://example.com/reverend-insanity".to_string(),
            bookmarked: false,
            downloaded: false,
            language: "English".to_string(),
            release_date: date(2017, 6, 1),
            last_update: date(2020, 12, 1),
        },
    ]
}

/// Browse views over the sample catalog
pub struct BrowseCatalog {
    novels: Vec<Novel>,
}

impl Default for BrowseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseCatalog {
    pub fn new() -> Self {
        Self {
            novels: sample_novels(),
        }
    }

    /// Novels in listing order
    pub fn latest(&self) -> Vec<&Novel> {
        self.novels.iter().collect()
    }

    /// Novels by rating, highest first
    pub fn popular(&self) -> Vec<&Novel> {
        let mut novels = self.latest();
        novels.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        novels
    }

    /// Novels carrying `genre`; `"all"` returns everything
    pub fn by_genre(&self, genre: &str) -> Vec<&Novel> {
        if genre.eq_ignore_ascii_case("all") {
            return self.latest();
        }
        self.novels
            .iter()
            .filter(|novel| novel.genres.iter().any(|g| g == genre))
            .collect()
    }

    /// Title/author/genre search. A blank query returns nothing.
    pub fn search(&self, query: &str) -> Vec<&Novel> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.novels
            .iter()
            .filter(|novel| novel.matches_query(query))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Novel> {
        self.novels.iter().find(|novel| novel.id == id)
    }
}

/// Sources a browse view may offer, i.e. the enabled ones
pub fn browsable_sources(sources: &[NovelSource]) -> Vec<&NovelSource> {
    sources.iter().filter(|source| source.enabled).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_sources;

    fn titles(novels: &[&Novel]) -> Vec<String> {
        novels.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn test_popular_orders_by_rating() {
        let browse = BrowseCatalog::new();
        assert_eq!(
            titles(&browse.popular()),
            ["Lord of the Mysteries", "Shadow Slave", "Reverend Insanity"]
        );
    }

    #[test]
    fn test_by_genre() {
        let browse = BrowseCatalog::new();
        assert_eq!(browse.by_genre("all").len(), 3);
        assert_eq!(browse.by_genre("Fantasy").len(), 2);
        assert_eq!(titles(&browse.by_genre("Xianxia")), ["Reverend Insanity"]);
        assert!(browse.by_genre("Romance").is_empty());
    }

    #[test]
    fn test_search() {
        let browse = BrowseCatalog::new();
        assert!(browse.search("   ").is_empty());
        assert_eq!(titles(&browse.search("gu zhen")), ["Reverend Insanity"]);
        assert_eq!(browse.search("supernatural").len(), 2);
    }

    #[test]
    fn test_browsable_sources() {
        let mut sources = default_sources();
        sources[1].enabled = false;
        let ids: Vec<_> = browsable_sources(&sources)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["novelupdates", "wuxiaworld"]);
    }

    #[test]
    fn test_sample_dates() {
        let browse = BrowseCatalog::new();
        let novel = browse.get("sample-2").unwrap();
        assert_eq!(novel.release_date, date(2018, 4, 1));
        assert!(novel.release_date.is_some());
    }
}
