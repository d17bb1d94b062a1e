//! Browse command implementation

use super::{novel_line, Context};
use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use lnreader_core::browse::{browsable_sources, BrowseCatalog};
use lnreader_core::types::Novel;

pub struct BrowseOptions {
    pub query: Option<String>,
    pub genre: Option<String>,
    pub popular: bool,
    pub add: Option<String>,
    pub json: bool,
}

/// Browse the sample catalog, optionally adding one novel to the library
pub async fn browse(ctx: &Context, options: BrowseOptions) -> Result<()> {
    let catalog = BrowseCatalog::new();
    let mut store = ctx.library().await;

    if let Some(id) = options.add {
        let novel = catalog
            .get(&id)
            .with_context(|| format!("No browse result with id {}", id))?;
        if store.catalog().get_novel(&novel.id).is_some() {
            bail!("\"{}\" is already in your library", novel.title);
        }
        let mut novel = novel.clone();
        novel.date_added = Utc::now();
        let title = novel.title.clone();
        store
            .add_novel(novel)
            .await
            .context("Failed to save library")?;
        println!("Added \"{}\" to library", title);
        return Ok(());
    }

    let novels: Vec<&Novel> = match (&options.query, &options.genre) {
        (Some(query), _) => catalog.search(query),
        (None, Some(genre)) => catalog.by_genre(genre),
        (None, None) if options.popular => catalog.popular(),
        (None, None) => catalog.latest(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&novels)?);
        return Ok(());
    }

    let sources = browsable_sources(store.catalog().sources());
    if !sources.is_empty() {
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        println!("Sources: {}", names.join(", "));
    }
    if novels.is_empty() {
        println!("No novels found. Try adjusting your search or filters.");
    }
    for novel in novels {
        println!("{}  ★ {:.1}", novel_line(novel), novel.rating);
    }

    Ok(())
}
