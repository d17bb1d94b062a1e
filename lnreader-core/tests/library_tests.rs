//! End-to-end tests for the persisted library
//!
//! These tests run the stores against the filesystem backend in a temporary
//! directory and check the documented library behaviors:
//!
//! 1. **Cascade**: removing a novel removes its chapters and bookmarks
//! 2. **Filtering**: genre, status and hide-read filters plus ordering
//! 3. **Export/import**: round-trips and malformed payloads

use lnreader_core::storage::{LocalStorage, StorageProvider};
use lnreader_core::types::{Bookmark, Category, Chapter, Novel, NovelStatus, SortField, SortOrder};
use lnreader_core::{
    filter_and_sort, ImportError, LibraryError, LibrarySettings, LibraryStore, ReaderSettingsPatch,
    ReaderStore,
};
use std::sync::Arc;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

async fn open_store(dir: &TempDir) -> LibraryStore {
    let storage: Arc<dyn StorageProvider> = Arc::new(LocalStorage::new(dir.path()));
    LibraryStore::load(storage).await
}

fn novel_a() -> Novel {
    Novel::new("A", "Author A")
        .with_id("A")
        .with_genre("Fantasy")
        .with_status(NovelStatus::Ongoing)
        .with_chapters(3, 10)
}

fn novel_b() -> Novel {
    Novel::new("B", "Author B")
        .with_id("B")
        .with_genre("Mystery")
        .with_status(NovelStatus::Completed)
        .with_chapters(10, 10)
}

fn ids(novels: &[&Novel]) -> Vec<String> {
    novels.iter().map(|n| n.id.clone()).collect()
}

async fn populated_store(dir: &TempDir) -> LibraryStore {
    let mut store = open_store(dir).await;
    store.add_novel(novel_a()).await.unwrap();
    store.add_novel(novel_b()).await.unwrap();
    for (novel, count) in [("A", 3), ("B", 2)] {
        for number in 1..=count {
            let id = format!("{}-{}", novel, number);
            let chapter = Chapter::new(&id, novel, format!("Chapter {}", number), number)
                .with_content(format!("Text of chapter {}", number));
            store.add_chapter(chapter).await.unwrap();
            store
                .add_bookmark(Bookmark::new(novel, &id, 0, "passage"))
                .await
                .unwrap();
        }
    }
    store
        .add_category(Category::new("Reading", "#22c55e").with_id("reading"))
        .await
        .unwrap();
    for novel in ["A", "B"] {
        assert!(store.assign_to_category("reading", novel).await.unwrap());
    }
    store
}

// =============================================================================
// Cascade
// =============================================================================

#[tokio::test]
async fn test_remove_novel_cascades_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store(&dir).await;

    store.remove_novel("A").await.unwrap();

    let reopened = open_store(&dir).await;
    let catalog = reopened.catalog();
    assert_eq!(ids(&catalog.novels().iter().collect::<Vec<_>>()), ["B"]);
    assert!(catalog.chapters().iter().all(|c| c.novel_id != "A"));
    assert!(catalog.bookmarks().iter().all(|b| b.novel_id != "A"));
    assert_eq!(catalog.chapters().len(), 2);
    assert_eq!(catalog.bookmarks().len(), 2);
    assert_eq!(catalog.get_category("reading").unwrap().novel_ids, ["B"]);
}

// =============================================================================
// Filtering and ordering
// =============================================================================

#[tokio::test]
async fn test_documented_filter_example() {
    let dir = TempDir::new().unwrap();
    let store = populated_store(&dir).await;
    let novels = store.catalog().novels();

    let genre = LibrarySettings {
        filter_genres: vec!["Fantasy".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&filter_and_sort(novels, None, &genre)), ["A"]);

    let hide_read = LibrarySettings {
        hide_read: true,
        ..Default::default()
    };
    assert_eq!(ids(&filter_and_sort(novels, None, &hide_read)), ["A"]);

    let progress = LibrarySettings {
        sort_by: SortField::Progress,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    assert_eq!(ids(&filter_and_sort(novels, None, &progress)), ["B", "A"]);
}

#[tokio::test]
async fn test_view_uses_persisted_settings() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store(&dir).await;
    store
        .edit_library_settings(|s| s.toggle_status_filter(NovelStatus::Completed))
        .await
        .unwrap();

    let reopened = open_store(&dir).await;
    assert_eq!(ids(&reopened.catalog().view(None)), ["B"]);
    assert!(reopened.catalog().view(Some("author a")).is_empty());
}

#[tokio::test]
async fn test_mark_read_updates_progress() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store(&dir).await;

    assert!(store.mark_chapter_as_read("A", "A-1").await.unwrap());
    assert!(store.mark_chapter_as_read("A", "A-2").await.unwrap());
    assert!(!store.mark_chapter_as_read("A", "B-1").await.unwrap());

    let reopened = open_store(&dir).await;
    let novel = reopened.catalog().get_novel("A").unwrap();
    assert_eq!(novel.read_chapters, 2);
    assert_eq!(novel.last_read_chapter, Some(2));
}

// =============================================================================
// Export / import
// =============================================================================

#[tokio::test]
async fn test_export_import_round_trip() {
    let source_dir = TempDir::new().unwrap();
    let mut source = populated_store(&source_dir).await;
    assert!(source.mark_chapter_as_read("A", "A-2").await.unwrap());
    let exported = source.export_library().unwrap();

    let target_dir = TempDir::new().unwrap();
    let mut target = open_store(&target_dir).await;
    target.import_library(&exported).await.unwrap();

    let reopened = open_store(&target_dir).await;
    assert_eq!(reopened.catalog().novels(), source.catalog().novels());
    assert_eq!(reopened.catalog().chapters(), source.catalog().chapters());
    assert_eq!(reopened.catalog().categories(), source.catalog().categories());
    assert_eq!(reopened.catalog().bookmarks(), source.catalog().bookmarks());

    let catalog = reopened.catalog();
    let novel = catalog.get_novel("A").unwrap();
    assert_eq!(novel.last_read_chapter, Some(2));
    assert!(novel.last_read_date.is_some());
    assert_eq!(catalog.chapters_for_novel("A")[0].word_count, Some(4));
    assert_eq!(catalog.get_category("reading").unwrap().novel_ids, ["A", "B"]);
}

#[tokio::test]
async fn test_export_document_fields() {
    let dir = TempDir::new().unwrap();
    let store = populated_store(&dir).await;
    let exported: serde_json::Value =
        serde_json::from_str(&store.export_library().unwrap()).unwrap();

    for field in [
        "novels",
        "chapters",
        "categories",
        "bookmarks",
        "librarySettings",
        "exportDate",
        "version",
    ] {
        assert!(exported.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(exported["version"], "1.0.0");
}

#[tokio::test]
async fn test_malformed_import_leaves_library() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store(&dir).await;
    let before = store.catalog().clone();

    let err = store.import_library("{not json").await.unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Import(ImportError::MalformedJson(_))
    ));
    assert_eq!(store.catalog(), &before);

    let reopened = open_store(&dir).await;
    assert_eq!(reopened.catalog(), &before);
}

#[tokio::test]
async fn test_import_wrong_shape_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store(&dir).await;
    let before = store.catalog().clone();

    for payload in ["[]", "null", r#"{"novels": {"id": "x"}}"#] {
        let err = store.import_library(payload).await.unwrap_err();
        assert!(matches!(
            err,
            LibraryError::Import(ImportError::UnexpectedShape(_))
        ));
    }
    assert_eq!(store.catalog(), &before);
}

// =============================================================================
// Reader preferences
// =============================================================================

#[tokio::test]
async fn test_reader_settings_survive_restart() {
    let dir = TempDir::new().unwrap();
    let storage: Arc<dyn StorageProvider> = Arc::new(LocalStorage::new(dir.path()));

    let mut reader = ReaderStore::load(storage.clone()).await;
    reader
        .update_settings(ReaderSettingsPatch {
            font_size: Some(22),
            ..Default::default()
        })
        .await
        .unwrap();

    let reopened = ReaderStore::load(storage).await;
    assert_eq!(reopened.settings().font_size, 22);
    assert!(dir.path().join("lnreader-reader-settings.json").exists());
}
