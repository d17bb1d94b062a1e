//! Novel, chapter and bookmark commands

use super::Context;
use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use lnreader_core::types::{canonical_genre, Bookmark, Chapter, Novel, NovelStatus};

/// Add a novel to the library
pub async fn add(
    ctx: &Context,
    title: String,
    author: String,
    genres: Vec<String>,
    status: NovelStatus,
    total_chapters: u32,
) -> Result<()> {
    let mut novel = Novel::new(title, author)
        .with_status(status)
        .with_chapters(0, total_chapters);
    novel.genres = genres
        .into_iter()
        .map(|genre| {
            canonical_genre(&genre)
                .map(str::to_string)
                .unwrap_or(genre)
        })
        .collect();

    let id = novel.id.clone();
    let title = novel.title.clone();

    let mut store = ctx.library().await;
    store
        .add_novel(novel)
        .await
        .context("Failed to save library")?;

    println!("Added \"{}\" to library ({})", title, id);
    Ok(())
}

/// Remove a novel and everything attached to it
pub async fn remove(ctx: &Context, id: &str) -> Result<()> {
    let mut store = ctx.library().await;
    match store
        .remove_novel(id)
        .await
        .context("Failed to save library")?
    {
        Some(novel) => {
            println!("Removed \"{}\" from library", novel.title);
            Ok(())
        }
        None => bail!("No novel with id {}", id),
    }
}

#[derive(Subcommand)]
pub enum ChapterAction {
    /// Add a chapter to a novel
    Add {
        /// Novel id
        novel_id: String,

        /// Chapter number
        #[arg(short, long)]
        number: u32,

        /// Chapter title (defaults to "Chapter <number>")
        #[arg(short, long)]
        title: Option<String>,

        /// Chapter id (defaults to "<novel id>-<number>")
        #[arg(long)]
        id: Option<String>,
    },

    /// List the chapters of a novel
    List {
        /// Novel id
        novel_id: String,
    },

    /// Remove a chapter
    Remove {
        /// Chapter id
        chapter_id: String,
    },
}

pub async fn chapter(ctx: &Context, action: ChapterAction) -> Result<()> {
    let mut store = ctx.library().await;

    match action {
        ChapterAction::Add {
            novel_id,
            number,
            title,
            id,
        } => {
            if store.catalog().get_novel(&novel_id).is_none() {
                bail!("No novel with id {}", novel_id);
            }
            let id = id.unwrap_or_else(|| format!("{}-{}", novel_id, number));
            let title = title.unwrap_or_else(|| format!("Chapter {}", number));
            store
                .add_chapter(Chapter::new(&id, novel_id, title, number))
                .await
                .context("Failed to save chapters")?;
            println!("Added chapter {} ({})", number, id);
        }

        ChapterAction::List { novel_id } => {
            for chapter in store.catalog().chapters_for_novel(&novel_id) {
                let mark = if chapter.read { "x" } else { " " };
                println!("[{}] {:>4}  {}  ({})", mark, chapter.number, chapter.title, chapter.id);
            }
        }

        ChapterAction::Remove { chapter_id } => {
            if !store
                .remove_chapter(&chapter_id)
                .await
                .context("Failed to save chapters")?
            {
                bail!("No chapter with id {}", chapter_id);
            }
            println!("Removed chapter {}", chapter_id);
        }
    }

    Ok(())
}

/// Mark a chapter as read
pub async fn read(ctx: &Context, novel_id: &str, chapter_id: &str) -> Result<()> {
    let mut store = ctx.library().await;
    if !store
        .mark_chapter_as_read(novel_id, chapter_id)
        .await
        .context("Failed to save library")?
    {
        bail!("Novel {} has no chapter {}", novel_id, chapter_id);
    }

    if let Some(novel) = store.catalog().get_novel(novel_id) {
        println!(
            "{}: {}/{} chapters read",
            novel.title, novel.read_chapters, novel.total_chapters
        );
    }
    Ok(())
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Bookmark a passage
    Add {
        /// Novel id
        novel_id: String,

        /// Chapter id
        chapter_id: String,

        /// Quoted text
        text: String,

        /// Position within the chapter
        #[arg(short, long, default_value = "0")]
        position: u64,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Remove a bookmark
    Remove {
        /// Bookmark id
        bookmark_id: String,
    },
}

pub async fn bookmark(ctx: &Context, action: BookmarkAction) -> Result<()> {
    let mut store = ctx.library().await;

    match action {
        BookmarkAction::Add {
            novel_id,
            chapter_id,
            text,
            position,
            note,
        } => {
            let known = store
                .catalog()
                .chapters()
                .iter()
                .any(|c| c.id == chapter_id && c.novel_id == novel_id);
            if !known {
                bail!("Novel {} has no chapter {}", novel_id, chapter_id);
            }

            let mut bookmark = Bookmark::new(novel_id, chapter_id, position, text);
            if let Some(note) = note {
                bookmark = bookmark.with_note(note);
            }
            let id = bookmark.id.clone();
            store
                .add_bookmark(bookmark)
                .await
                .context("Failed to save bookmarks")?;
            println!("Bookmark added ({})", id);
        }

        BookmarkAction::Remove { bookmark_id } => {
            if !store
                .remove_bookmark(&bookmark_id)
                .await
                .context("Failed to save bookmarks")?
            {
                bail!("No bookmark with id {}", bookmark_id);
            }
            println!("Bookmark removed");
        }
    }

    Ok(())
}
