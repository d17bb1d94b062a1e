//! List and show commands

use super::{novel_line, Context};
use anyhow::{Context as _, Result};
use lnreader_core::types::{canonical_genre, Bookmark, Chapter, Novel, NovelStatus, SortField, SortOrder};
use lnreader_core::{filter_and_sort, LibrarySummary};
use serde::Serialize;

/// Per-invocation overrides of the stored list settings
pub struct ListOptions {
    pub search: Option<String>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub genres: Vec<String>,
    pub statuses: Vec<NovelStatus>,
    pub hide_read: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    novels: Vec<&'a Novel>,
    summary: LibrarySummary,
}

/// List the library through the filter/sort pipeline
pub async fn list(ctx: &Context, options: ListOptions) -> Result<()> {
    let store = ctx.library().await;
    let catalog = store.catalog();

    let mut settings = catalog.settings().clone();
    if let Some(sort) = options.sort {
        settings.sort_by = sort;
    }
    if let Some(order) = options.order {
        settings.sort_order = order;
    }
    if !options.genres.is_empty() {
        settings.filter_genres = options
            .genres
            .into_iter()
            .map(|genre| canonical_genre(&genre).map(str::to_string).unwrap_or(genre))
            .collect();
    }
    if !options.statuses.is_empty() {
        settings.filter_status = options.statuses;
    }
    settings.hide_read |= options.hide_read;

    let novels = filter_and_sort(catalog.novels(), options.search.as_deref(), &settings);
    let summary = LibrarySummary::new(&novels, catalog.novels());

    if options.json {
        let output = ListOutput { novels, summary };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for novel in &novels {
        println!("{}", novel_line(novel));
    }
    let matching = options
        .search
        .filter(|q| !q.is_empty())
        .map(|q| format!(" matching \"{}\"", q))
        .unwrap_or_default();
    println!(
        "{} of {} novels{}  |  Total chapters read: {}",
        summary.shown, summary.total, matching, summary.chapters_read
    );

    Ok(())
}

#[derive(Serialize)]
struct NovelDetail<'a> {
    novel: &'a Novel,
    chapters: Vec<&'a Chapter>,
    bookmarks: Vec<&'a Bookmark>,
}

/// Show one novel with its chapters and bookmarks
pub async fn show(ctx: &Context, id: &str, json: bool) -> Result<()> {
    let store = ctx.library().await;
    let catalog = store.catalog();
    let novel = catalog
        .get_novel(id)
        .with_context(|| format!("No novel with id {}", id))?;

    let detail = NovelDetail {
        novel,
        chapters: catalog.chapters_for_novel(id),
        bookmarks: catalog.bookmarks_for_novel(id),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("Title:       {}", novel.title);
    println!("Author:      {}", novel.author);
    println!("Status:      {}", novel.status);
    if !novel.genres.is_empty() {
        println!("Genres:      {}", novel.genres.join(", "));
    }
    if !novel.description.is_empty() {
        println!("Description: {}", novel.description);
    }
    println!(
        "Progress:    {}/{} ({:.0}%)",
        novel.read_chapters,
        novel.total_chapters,
        novel.progress() * 100.0
    );
    if let Some(chapter) = novel.last_read_chapter {
        println!("Last read:   chapter {}", chapter);
    }

    if !detail.chapters.is_empty() {
        println!("Chapters:");
        for chapter in &detail.chapters {
            let mark = if chapter.read { "x" } else { " " };
            println!("  [{}] {:>4}  {}  ({})", mark, chapter.number, chapter.title, chapter.id);
        }
    }
    if !detail.bookmarks.is_empty() {
        println!("Bookmarks:");
        for bookmark in &detail.bookmarks {
            println!("  {}  \"{}\"", bookmark.chapter_id, bookmark.text);
            if let Some(note) = &bookmark.note {
                println!("      {}", note);
            }
        }
    }

    Ok(())
}
