//! Persisted library store
//!
//! [`LibraryStore`] wraps a [`Catalog`] with a [`StorageProvider`]. Each slice
//! of the catalog lives under its own key; slices are loaded independently at
//! startup (falling back to defaults) and every mutation writes back the
//! slices it touched. Writes across slices are not transactional.

use crate::catalog::{Catalog, ImportSummary};
use crate::error::{Result, StorageError};
use crate::storage::StorageProvider;
use crate::types::{
    Bookmark, Category, Chapter, LibrarySettings, LibrarySettingsPatch, Novel, NovelSource,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A persisted slice of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Novels,
    Chapters,
    Categories,
    Sources,
    Bookmarks,
    Settings,
}

impl Slice {
    /// Storage key for this slice
    pub fn key(&self) -> &'static str {
        match self {
            Slice::Novels => "lnreader-novels",
            Slice::Chapters => "lnreader-chapters",
            Slice::Categories => "lnreader-categories",
            Slice::Sources => "lnreader-sources",
            Slice::Bookmarks => "lnreader-bookmarks",
            Slice::Settings => "lnreader-settings",
        }
    }
}

/// Read a JSON document from storage, falling back to `default` when the key
/// is missing or the stored value cannot be decoded
pub(crate) async fn load_or_default<T: DeserializeOwned>(
    storage: &dyn StorageProvider,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    match storage.read(key).await {
        Ok(data) => match serde_json::from_slice(&data) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to decode {}, using defaults: {}", key, e);
                default()
            }
        },
        Err(StorageError::NotFound(_)) => default(),
        Err(e) => {
            tracing::warn!("Failed to read {}, using defaults: {}", key, e);
            default()
        }
    }
}

/// Serialize and store a JSON document
pub(crate) async fn save<T: Serialize + ?Sized>(
    storage: &dyn StorageProvider,
    key: &str,
    value: &T,
) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    storage.write(key, data).await?;
    tracing::debug!("Persisted {}", key);
    Ok(())
}

/// The library catalog backed by persistent storage
pub struct LibraryStore {
    storage: Arc<dyn StorageProvider>,
    catalog: Catalog,
}

impl LibraryStore {
    /// Load every slice from storage
    pub async fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let defaults = Catalog::default();
        let store = storage.as_ref();

        let catalog = Catalog {
            novels: load_or_default(store, Slice::Novels.key(), Vec::new).await,
            chapters: load_or_default(store, Slice::Chapters.key(), Vec::new).await,
            categories: load_or_default(store, Slice::Categories.key(), Vec::new).await,
            sources: load_or_default(store, Slice::Sources.key(), || defaults.sources.clone())
                .await,
            bookmarks: load_or_default(store, Slice::Bookmarks.key(), Vec::new).await,
            settings: load_or_default(store, Slice::Settings.key(), LibrarySettings::default)
                .await,
        };

        tracing::debug!(
            "Loaded library: {} novels, {} chapters",
            catalog.novels.len(),
            catalog.chapters.len()
        );
        Self { storage, catalog }
    }

    /// Read-only access to the current state
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    async fn persist(&self, slices: &[Slice]) -> Result<()> {
        let storage = self.storage.as_ref();
        for slice in slices {
            match slice {
                Slice::Novels => save(storage, slice.key(), &self.catalog.novels).await?,
                Slice::Chapters => save(storage, slice.key(), &self.catalog.chapters).await?,
                Slice::Categories => save(storage, slice.key(), &self.catalog.categories).await?,
                Slice::Sources => save(storage, slice.key(), &self.catalog.sources).await?,
                Slice::Bookmarks => save(storage, slice.key(), &self.catalog.bookmarks).await?,
                Slice::Settings => save(storage, slice.key(), &self.catalog.settings).await?,
            }
        }
        Ok(())
    }

    pub async fn add_novel(&mut self, novel: Novel) -> Result<()> {
        self.catalog.add_novel(novel);
        self.persist(&[Slice::Novels]).await
    }

    pub async fn remove_novel(&mut self, novel_id: &str) -> Result<Option<Novel>> {
        let removed = self.catalog.remove_novel(novel_id);
        self.persist(&[
            Slice::Novels,
            Slice::Chapters,
            Slice::Bookmarks,
            Slice::Categories,
        ])
        .await?;
        Ok(removed)
    }

    pub async fn update_novel(&mut self, novel: Novel) -> Result<bool> {
        let found = self.catalog.update_novel(novel);
        self.persist(&[Slice::Novels]).await?;
        Ok(found)
    }

    pub async fn add_chapter(&mut self, chapter: Chapter) -> Result<()> {
        self.catalog.add_chapter(chapter);
        self.persist(&[Slice::Chapters]).await
    }

    pub async fn update_chapter(&mut self, chapter: Chapter) -> Result<bool> {
        let found = self.catalog.update_chapter(chapter);
        self.persist(&[Slice::Chapters]).await?;
        Ok(found)
    }

    pub async fn remove_chapter(&mut self, chapter_id: &str) -> Result<bool> {
        let found = self.catalog.remove_chapter(chapter_id);
        self.persist(&[Slice::Chapters]).await?;
        Ok(found)
    }

    pub async fn mark_chapter_as_read(&mut self, novel_id: &str, chapter_id: &str) -> Result<bool> {
        let marked = self.catalog.mark_chapter_as_read(novel_id, chapter_id);
        if marked {
            self.persist(&[Slice::Chapters, Slice::Novels]).await?;
        }
        Ok(marked)
    }

    pub async fn add_category(&mut self, category: Category) -> Result<()> {
        self.catalog.add_category(category);
        self.persist(&[Slice::Categories]).await
    }

    pub async fn update_category(&mut self, category: Category) -> Result<bool> {
        let found = self.catalog.update_category(category);
        self.persist(&[Slice::Categories]).await?;
        Ok(found)
    }

    pub async fn delete_category(&mut self, category_id: &str) -> Result<bool> {
        let found = self.catalog.delete_category(category_id);
        self.persist(&[Slice::Categories]).await?;
        Ok(found)
    }

    pub async fn assign_to_category(&mut self, category_id: &str, novel_id: &str) -> Result<bool> {
        let found = self.catalog.assign_to_category(category_id, novel_id);
        self.persist(&[Slice::Categories]).await?;
        Ok(found)
    }

    pub async fn unassign_from_category(
        &mut self,
        category_id: &str,
        novel_id: &str,
    ) -> Result<bool> {
        let found = self.catalog.unassign_from_category(category_id, novel_id);
        self.persist(&[Slice::Categories]).await?;
        Ok(found)
    }

    pub async fn add_bookmark(&mut self, bookmark: Bookmark) -> Result<()> {
        self.catalog.add_bookmark(bookmark);
        self.persist(&[Slice::Bookmarks]).await
    }

    pub async fn update_bookmark(&mut self, bookmark: Bookmark) -> Result<bool> {
        let found = self.catalog.update_bookmark(bookmark);
        self.persist(&[Slice::Bookmarks]).await?;
        Ok(found)
    }

    pub async fn remove_bookmark(&mut self, bookmark_id: &str) -> Result<bool> {
        let found = self.catalog.remove_bookmark(bookmark_id);
        self.persist(&[Slice::Bookmarks]).await?;
        Ok(found)
    }

    pub async fn add_source(&mut self, source: NovelSource) -> Result<()> {
        self.catalog.add_source(source);
        self.persist(&[Slice::Sources]).await
    }

    pub async fn update_source(&mut self, source: NovelSource) -> Result<bool> {
        let found = self.catalog.update_source(source);
        self.persist(&[Slice::Sources]).await?;
        Ok(found)
    }

    pub async fn remove_source(&mut self, source_id: &str) -> Result<bool> {
        let found = self.catalog.remove_source(source_id);
        self.persist(&[Slice::Sources]).await?;
        Ok(found)
    }

    pub async fn toggle_source(&mut self, source_id: &str) -> Result<Option<bool>> {
        let enabled = self.catalog.toggle_source(source_id);
        self.persist(&[Slice::Sources]).await?;
        Ok(enabled)
    }

    pub async fn update_library_settings(&mut self, patch: LibrarySettingsPatch) -> Result<()> {
        self.catalog.update_library_settings(patch);
        self.persist(&[Slice::Settings]).await
    }

    /// Mutate the settings in place (filter toggles etc.) and persist them
    pub async fn edit_library_settings(
        &mut self,
        edit: impl FnOnce(&mut LibrarySettings),
    ) -> Result<()> {
        edit(self.catalog.settings_mut());
        self.persist(&[Slice::Settings]).await
    }

    pub async fn reset_library_settings(&mut self) -> Result<()> {
        *self.catalog.settings_mut() = LibrarySettings::default();
        self.persist(&[Slice::Settings]).await
    }

    pub fn export_library(&self) -> Result<String> {
        self.catalog.export_library()
    }

    /// Import an export document and persist the replaced slices.
    /// A malformed document changes nothing, in memory or on disk.
    pub async fn import_library(&mut self, data: &str) -> Result<ImportSummary> {
        let summary = self.catalog.import_library(data)?;

        let slices: Vec<Slice> = [
            (summary.novels, Slice::Novels),
            (summary.chapters, Slice::Chapters),
            (summary.categories, Slice::Categories),
            (summary.bookmarks, Slice::Bookmarks),
            (summary.library_settings, Slice::Settings),
        ]
        .into_iter()
        .filter_map(|(present, slice)| present.then_some(slice))
        .collect();
        self.persist(&slices).await?;

        Ok(summary)
    }
}
