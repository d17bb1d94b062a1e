//! Export and import commands

use super::Context;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Write the export document to a file, or to stdout
pub async fn export(ctx: &Context, output: Option<&Path>) -> Result<()> {
    let store = ctx.library().await;
    let document = store.export_library().context("Failed to serialize library")?;

    match output {
        Some(path) => {
            tokio::fs::write(path, document)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let catalog = store.catalog();
            println!(
                "Exported {} novels, {} chapters and {} bookmarks to {}",
                catalog.novels().len(),
                catalog.chapters().len(),
                catalog.bookmarks().len(),
                path.display()
            );
        }
        None => println!("{}", document),
    }

    Ok(())
}

/// Replace the library slices present in an export document
pub async fn import(ctx: &Context, input: &Path) -> Result<()> {
    let data = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut store = ctx.library().await;
    let summary = store
        .import_library(&data)
        .await
        .with_context(|| format!("Failed to import {}", input.display()))?;

    if summary.is_empty() {
        println!("Nothing to import");
    } else {
        println!("Imported {}", summary.replaced().join(", "));
    }
    Ok(())
}
