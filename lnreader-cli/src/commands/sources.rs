//! Novel source commands

use super::Context;
use anyhow::{Context as _, Result};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SourcesAction {
    /// List every configured source
    List,

    /// Enable or disable a source
    Toggle {
        /// Source id
        id: String,
    },
}

pub async fn sources(ctx: &Context, action: SourcesAction) -> Result<()> {
    let mut store = ctx.library().await;

    match action {
        SourcesAction::List => {
            for source in store.catalog().sources() {
                let state = if source.enabled { "enabled" } else { "disabled" };
                println!(
                    "{:<14} {:<14} {:<9} {}",
                    source.id, source.name, state, source.base_url
                );
            }
        }

        SourcesAction::Toggle { id } => {
            let enabled = store
                .toggle_source(&id)
                .await
                .context("Failed to save sources")?
                .with_context(|| format!("No source with id {}", id))?;
            println!(
                "{} is now {}",
                id,
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }

    Ok(())
}
