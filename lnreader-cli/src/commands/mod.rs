//! CLI command implementations

mod browse;
mod category;
mod list;
mod novel;
mod settings;
mod sources;
mod transfer;

pub use browse::{browse, BrowseOptions};
pub use category::{category, CategoryAction};
pub use list::{list, show, ListOptions};
pub use novel::{add, bookmark, chapter, read, remove, BookmarkAction, ChapterAction};
pub use settings::{reader, settings, ReaderAction, SettingsAction};
pub use sources::{sources, SourcesAction};
pub use transfer::{export, import};

use lnreader_core::storage::{LocalStorage, StorageProvider};
use lnreader_core::types::Novel;
use lnreader_core::{LibraryStore, ReaderStore};
use std::path::Path;
use std::sync::Arc;

/// Shared state for every command
pub struct Context {
    storage: Arc<dyn StorageProvider>,
}

impl Context {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            storage: Arc::new(LocalStorage::new(data_dir)),
        }
    }

    pub async fn library(&self) -> LibraryStore {
        LibraryStore::load(self.storage.clone()).await
    }

    pub async fn reader(&self) -> ReaderStore {
        ReaderStore::load(self.storage.clone()).await
    }
}

/// One-line summary of a novel for table output
pub(crate) fn novel_line(novel: &Novel) -> String {
    format!(
        "{}  {} by {} [{}] {}/{} ({:.0}%){}",
        novel.id,
        novel.title,
        novel.author,
        novel.status,
        novel.read_chapters,
        novel.total_chapters,
        novel.progress() * 100.0,
        if novel.genres.is_empty() {
            String::new()
        } else {
            format!("  {}", novel.genres.join(", "))
        }
    )
}
