//! Category commands

use super::{novel_line, Context};
use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use lnreader_core::types::Category;

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories with their member counts
    List,

    /// Create a category
    Create {
        name: String,

        /// Display color
        #[arg(short, long, default_value = "#3b82f6")]
        color: String,
    },

    /// Show the novels in a category
    Show { id: String },

    /// Add a novel to a category
    Assign { category_id: String, novel_id: String },

    /// Remove a novel from a category
    Unassign { category_id: String, novel_id: String },

    /// Delete a category (its novels stay in the library)
    Delete { id: String },
}

pub async fn category(ctx: &Context, action: CategoryAction) -> Result<()> {
    let mut store = ctx.library().await;

    match action {
        CategoryAction::List => {
            for category in store.catalog().categories() {
                println!(
                    "{}  {} {} ({} novels)",
                    category.id,
                    category.name,
                    category.color,
                    category.novel_ids.len()
                );
            }
        }

        CategoryAction::Create { name, color } => {
            let category = Category::new(name, color);
            let id = category.id.clone();
            store
                .add_category(category)
                .await
                .context("Failed to save categories")?;
            println!("Created category {}", id);
        }

        CategoryAction::Show { id } => {
            let catalog = store.catalog();
            let category = catalog
                .get_category(&id)
                .with_context(|| format!("No category with id {}", id))?;
            println!("{} {}", category.name, category.color);
            for novel in catalog.get_novels_by_category(&id) {
                println!("  {}", novel_line(novel));
            }
        }

        CategoryAction::Assign {
            category_id,
            novel_id,
        } => {
            if store.catalog().get_novel(&novel_id).is_none() {
                bail!("No novel with id {}", novel_id);
            }
            if !store
                .assign_to_category(&category_id, &novel_id)
                .await
                .context("Failed to save categories")?
            {
                bail!("No category with id {}", category_id);
            }
            println!("Assigned {} to {}", novel_id, category_id);
        }

        CategoryAction::Unassign {
            category_id,
            novel_id,
        } => {
            if store
                .unassign_from_category(&category_id, &novel_id)
                .await
                .context("Failed to save categories")?
            {
                println!("Removed {} from {}", novel_id, category_id);
            } else {
                println!("{} was not in {}", novel_id, category_id);
            }
        }

        CategoryAction::Delete { id } => {
            if !store
                .delete_category(&id)
                .await
                .context("Failed to save categories")?
            {
                bail!("No category with id {}", id);
            }
            println!("Deleted category {}", id);
        }
    }

    Ok(())
}
