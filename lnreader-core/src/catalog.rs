//! In-memory library state
//!
//! [`Catalog`] owns every slice of the library (novels, chapters, categories,
//! bookmarks, sources and list settings) and implements the CRUD operations
//! over them. It performs no I/O; see [`crate::library::LibraryStore`] for the
//! persisted wrapper.

use crate::error::{ImportError, Result};
use crate::transform;
use crate::types::{
    default_sources, Bookmark, Category, Chapter, LibrarySettings, LibrarySettingsPatch, Novel,
    NovelSource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version written into every export document
pub const EXPORT_VERSION: &str = "1.0.0";

/// The complete library
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub(crate) novels: Vec<Novel>,
    pub(crate) chapters: Vec<Chapter>,
    pub(crate) categories: Vec<Category>,
    pub(crate) sources: Vec<NovelSource>,
    pub(crate) bookmarks: Vec<Bookmark>,
    pub(crate) settings: LibrarySettings,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            novels: Vec::new(),
            chapters: Vec::new(),
            categories: Vec::new(),
            sources: default_sources(),
            bookmarks: Vec::new(),
            settings: LibrarySettings::default(),
        }
    }
}

/// Replace the element with a matching id; returns whether one was found
fn replace_by_id<T>(items: &mut [T], item: T, id_of: impl Fn(&T) -> &str) -> bool {
    let id = id_of(&item).to_string();
    match items.iter_mut().find(|existing| id_of(&**existing) == id) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Remove every element with a matching id; returns whether any was removed
fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn novels(&self) -> &[Novel] {
        &self.novels
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn sources(&self) -> &[NovelSource] {
        &self.sources
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn settings(&self) -> &LibrarySettings {
        &self.settings
    }

    // ---------------------------------------------------------------------
    // Novels
    // ---------------------------------------------------------------------

    pub fn add_novel(&mut self, novel: Novel) {
        tracing::info!("Added \"{}\" to library", novel.title);
        self.novels.push(novel);
    }

    /// Remove a novel together with its chapters and bookmarks, and drop it
    /// from every category. Returns the removed novel.
    pub fn remove_novel(&mut self, novel_id: &str) -> Option<Novel> {
        let removed = self
            .novels
            .iter()
            .position(|n| n.id == novel_id)
            .map(|index| self.novels.remove(index));
        self.novels.retain(|n| n.id != novel_id);
        self.chapters.retain(|c| c.novel_id != novel_id);
        self.bookmarks.retain(|b| b.novel_id != novel_id);
        for category in &mut self.categories {
            category.novel_ids.retain(|id| id != novel_id);
        }

        if let Some(novel) = &removed {
            tracing::info!("Removed \"{}\" from library", novel.title);
        }
        removed
    }

    /// Replace the novel with the same id
    pub fn update_novel(&mut self, novel: Novel) -> bool {
        replace_by_id(&mut self.novels, novel, |n| n.id.as_str())
    }

    pub fn get_novel(&self, novel_id: &str) -> Option<&Novel> {
        self.novels.iter().find(|n| n.id == novel_id)
    }

    // ---------------------------------------------------------------------
    // Chapters
    // ---------------------------------------------------------------------

    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    pub fn update_chapter(&mut self, chapter: Chapter) -> bool {
        replace_by_id(&mut self.chapters, chapter, |c| c.id.as_str())
    }

    pub fn remove_chapter(&mut self, chapter_id: &str) -> bool {
        remove_by_id(&mut self.chapters, chapter_id, |c| c.id.as_str())
    }

    /// Chapters of a novel ordered by chapter number
    pub fn chapters_for_novel(&self, novel_id: &str) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self
            .chapters
            .iter()
            .filter(|c| c.novel_id == novel_id)
            .collect();
        chapters.sort_by_key(|c| c.number);
        chapters
    }

    /// Mark a chapter as read and recount the novel's read chapters.
    ///
    /// The novel's `read_chapters` becomes the number of its chapters flagged
    /// read; its last-read pointer moves to this chapter. Returns `false` when
    /// the chapter does not belong to the novel.
    pub fn mark_chapter_as_read(&mut self, novel_id: &str, chapter_id: &str) -> bool {
        let Some(chapter) = self
            .chapters
            .iter_mut()
            .find(|c| c.id == chapter_id && c.novel_id == novel_id)
        else {
            return false;
        };
        chapter.read = true;
        let number = chapter.number;

        let read_count = self
            .chapters
            .iter()
            .filter(|c| c.novel_id == novel_id && c.read)
            .count() as u32;

        if let Some(novel) = self.novels.iter_mut().find(|n| n.id == novel_id) {
            novel.read_chapters = read_count;
            novel.last_read_chapter = Some(number);
            novel.last_read_date = Some(Utc::now());
        }
        true
    }

    // ---------------------------------------------------------------------
    // Categories
    // ---------------------------------------------------------------------

    pub fn add_category(&mut self, category: Category) {
        tracing::info!("Created category \"{}\"", category.name);
        self.categories.push(category);
    }

    pub fn update_category(&mut self, category: Category) -> bool {
        replace_by_id(&mut self.categories, category, |c| c.id.as_str())
    }

    pub fn delete_category(&mut self, category_id: &str) -> bool {
        remove_by_id(&mut self.categories, category_id, |c| c.id.as_str())
    }

    pub fn get_category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Append a novel to a category if not already a member.
    /// Returns `false` when the category does not exist.
    pub fn assign_to_category(&mut self, category_id: &str, novel_id: &str) -> bool {
        match self.categories.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                if !category.contains(novel_id) {
                    category.novel_ids.push(novel_id.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn unassign_from_category(&mut self, category_id: &str, novel_id: &str) -> bool {
        match self.categories.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                let before = category.novel_ids.len();
                category.novel_ids.retain(|id| id != novel_id);
                category.novel_ids.len() != before
            }
            None => false,
        }
    }

    /// Library novels belonging to a category, in library order.
    /// Unknown categories yield an empty list.
    pub fn get_novels_by_category(&self, category_id: &str) -> Vec<&Novel> {
        let Some(category) = self.get_category(category_id) else {
            return Vec::new();
        };
        self.novels
            .iter()
            .filter(|novel| category.contains(&novel.id))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Bookmarks
    // ---------------------------------------------------------------------

    pub fn add_bookmark(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    pub fn update_bookmark(&mut self, bookmark: Bookmark) -> bool {
        replace_by_id(&mut self.bookmarks, bookmark, |b| b.id.as_str())
    }

    pub fn remove_bookmark(&mut self, bookmark_id: &str) -> bool {
        remove_by_id(&mut self.bookmarks, bookmark_id, |b| b.id.as_str())
    }

    pub fn bookmarks_for_novel(&self, novel_id: &str) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| b.novel_id == novel_id)
            .collect()
    }

    // ---------------------------------------------------------------------
    // Sources
    // ---------------------------------------------------------------------

    pub fn add_source(&mut self, source: NovelSource) {
        tracing::info!("Added source \"{}\"", source.name);
        self.sources.push(source);
    }

    pub fn update_source(&mut self, source: NovelSource) -> bool {
        replace_by_id(&mut self.sources, source, |s| s.id.as_str())
    }

    pub fn remove_source(&mut self, source_id: &str) -> bool {
        remove_by_id(&mut self.sources, source_id, |s| s.id.as_str())
    }

    /// Flip a source's enabled flag; returns the new state
    pub fn toggle_source(&mut self, source_id: &str) -> Option<bool> {
        let source = self.sources.iter_mut().find(|s| s.id == source_id)?;
        source.enabled = !source.enabled;
        Some(source.enabled)
    }

    pub fn enabled_sources(&self) -> Vec<&NovelSource> {
        self.sources.iter().filter(|s| s.enabled).collect()
    }

    // ---------------------------------------------------------------------
    // Settings, search, lookups
    // ---------------------------------------------------------------------

    pub fn update_library_settings(&mut self, patch: LibrarySettingsPatch) {
        self.settings.apply(patch);
    }

    pub fn settings_mut(&mut self) -> &mut LibrarySettings {
        &mut self.settings
    }

    /// Case-insensitive substring search over title, author and genres
    pub fn search_novels(&self, query: &str) -> Vec<&Novel> {
        transform::search(&self.novels, query)
    }

    /// Novels carrying exactly this genre
    pub fn get_novels_by_genre(&self, genre: &str) -> Vec<&Novel> {
        self.novels
            .iter()
            .filter(|novel| novel.genres.iter().any(|g| g == genre))
            .collect()
    }

    /// The filtered and sorted list view for the current settings
    pub fn view(&self, query: Option<&str>) -> Vec<&Novel> {
        transform::filter_and_sort(&self.novels, query, &self.settings)
    }

    // ---------------------------------------------------------------------
    // Export / import
    // ---------------------------------------------------------------------

    /// Snapshot of the exportable slices, stamped with the current time
    pub fn export_document(&self) -> ExportDocument<'_> {
        ExportDocument {
            novels: &self.novels,
            chapters: &self.chapters,
            categories: &self.categories,
            bookmarks: &self.bookmarks,
            library_settings: &self.settings,
            export_date: Utc::now(),
            version: EXPORT_VERSION,
        }
    }

    /// Serialize the library to a pretty-printed JSON document
    pub fn export_library(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_document())?)
    }

    /// Replace every slice present in `data`.
    ///
    /// The whole document is parsed before anything is touched, so a
    /// malformed payload leaves the catalog unchanged.
    pub fn import_library(&mut self, data: &str) -> std::result::Result<ImportSummary, ImportError> {
        let document: ImportDocument = serde_json::from_str(data)?;

        let summary = ImportSummary {
            novels: document.novels.is_some(),
            chapters: document.chapters.is_some(),
            categories: document.categories.is_some(),
            bookmarks: document.bookmarks.is_some(),
            library_settings: document.library_settings.is_some(),
        };

        if let Some(novels) = document.novels {
            self.novels = novels;
        }
        if let Some(chapters) = document.chapters {
            self.chapters = chapters;
        }
        if let Some(categories) = document.categories {
            self.categories = categories;
        }
        if let Some(bookmarks) = document.bookmarks {
            self.bookmarks = bookmarks;
        }
        if let Some(settings) = document.library_settings {
            self.settings = settings;
        }

        tracing::info!("Library imported: {}", summary.replaced().join(", "));
        Ok(summary)
    }
}

/// Export file layout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub novels: &'a [Novel],
    pub chapters: &'a [Chapter],
    pub categories: &'a [Category],
    pub bookmarks: &'a [Bookmark],
    pub library_settings: &'a LibrarySettings,
    pub export_date: DateTime<Utc>,
    pub version: &'a str,
}

/// Import file layout; every slice is optional and other keys (`version`,
/// `exportDate`) are ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocument {
    novels: Option<Vec<Novel>>,
    chapters: Option<Vec<Chapter>>,
    categories: Option<Vec<Category>>,
    bookmarks: Option<Vec<Bookmark>>,
    library_settings: Option<LibrarySettings>,
}

/// Which slices an import replaced
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub novels: bool,
    pub chapters: bool,
    pub categories: bool,
    pub bookmarks: bool,
    pub library_settings: bool,
}

impl ImportSummary {
    /// Names of the replaced slices, in document order
    pub fn replaced(&self) -> Vec<&'static str> {
        [
            (self.novels, "novels"),
            (self.chapters, "chapters"),
            (self.categories, "categories"),
            (self.bookmarks, "bookmarks"),
            (self.library_settings, "librarySettings"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.replaced().is_empty()
    }
}
