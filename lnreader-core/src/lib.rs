//! lnreader Core Library
//!
//! Data model, persistence and list logic for a web novel library: the
//! catalog of novels with their chapters, categories, bookmarks and sources,
//! the reader preferences, and the filter/sort pipeline that produces the
//! library view.

pub mod browse;
pub mod catalog;
pub mod error;
pub mod library;
pub mod reader;
pub mod storage;
pub mod transform;
pub mod types;

pub use catalog::{Catalog, ExportDocument, ImportSummary, EXPORT_VERSION};
pub use error::{ImportError, LibraryError, Result, StorageError};
pub use library::LibraryStore;
pub use reader::ReaderStore;
pub use transform::{filter_and_sort, LibrarySummary};
pub use types::{
    Bookmark, Category, Chapter, LibrarySettings, LibrarySettingsPatch, Novel, NovelSource,
    NovelStatus, ReaderSettings, ReaderSettingsPatch, SortField, SortOrder,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_novel_creation() {
        let novel = Novel::new("Test Novel", "Test Author");
        assert_eq!(novel.title, "Test Novel");
        assert_eq!(novel.read_chapters, 0);
        assert!(!novel.id.is_empty());
    }
}
