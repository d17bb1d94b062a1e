//! Library list and reader settings commands

use super::Context;
use anyhow::{Context as _, Result};
use clap::Subcommand;
use lnreader_core::types::{
    canonical_genre, LibrarySettingsPatch, NovelStatus, ReaderSettingsPatch, SortField,
    SortOrder, TextAlign, Theme, ViewMode,
};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the stored list settings
    Show,

    /// Change one or more list settings
    Set {
        #[arg(long)]
        sort: Option<SortField>,

        #[arg(long)]
        order: Option<SortOrder>,

        /// grid or list
        #[arg(long)]
        view: Option<ViewMode>,

        #[arg(long)]
        columns: Option<u32>,

        #[arg(long)]
        show_genres: Option<bool>,

        #[arg(long)]
        show_progress: Option<bool>,

        #[arg(long)]
        hide_read: Option<bool>,
    },

    /// Add a genre to the filter, or remove it if present
    ToggleGenre { genre: String },

    /// Add a status to the filter, or remove it if present
    ToggleStatus { status: NovelStatus },

    /// Drop every genre, status and hide-read filter
    ClearFilters,

    /// Restore the default list settings
    Reset,
}

pub async fn settings(ctx: &Context, action: SettingsAction) -> Result<()> {
    let mut store = ctx.library().await;

    match action {
        SettingsAction::Show => {}

        SettingsAction::Set {
            sort,
            order,
            view,
            columns,
            show_genres,
            show_progress,
            hide_read,
        } => {
            let patch = LibrarySettingsPatch {
                sort_by: sort,
                sort_order: order,
                view_mode: view,
                grid_columns: columns,
                show_genres,
                show_progress,
                hide_read,
                ..Default::default()
            };
            if patch.is_empty() {
                tracing::warn!("No settings given, nothing changed");
            }
            store
                .update_library_settings(patch)
                .await
                .context("Failed to save settings")?;
        }

        SettingsAction::ToggleGenre { genre } => {
            let genre = canonical_genre(&genre).map(str::to_string).unwrap_or(genre);
            store
                .edit_library_settings(|s| s.toggle_genre_filter(&genre))
                .await
                .context("Failed to save settings")?;
        }

        SettingsAction::ToggleStatus { status } => {
            store
                .edit_library_settings(|s| s.toggle_status_filter(status))
                .await
                .context("Failed to save settings")?;
        }

        SettingsAction::ClearFilters => {
            store
                .edit_library_settings(|s| s.clear_filters())
                .await
                .context("Failed to save settings")?;
        }

        SettingsAction::Reset => {
            store
                .reset_library_settings()
                .await
                .context("Failed to save settings")?;
        }
    }

    let settings = store.catalog().settings();
    println!("{}", serde_json::to_string_pretty(settings)?);
    let active = settings.active_filter_count();
    if active > 0 {
        eprintln!("{} active filter(s)", active);
    }
    Ok(())
}

#[derive(Subcommand)]
pub enum ReaderAction {
    /// Print the stored reader settings
    Show,

    /// Change one or more reader settings
    Set {
        #[arg(long)]
        font_size: Option<u32>,

        #[arg(long)]
        font_family: Option<String>,

        #[arg(long)]
        line_height: Option<f64>,

        #[arg(long)]
        paragraph_spacing: Option<f64>,

        #[arg(long)]
        background_color: Option<String>,

        #[arg(long)]
        text_color: Option<String>,

        /// light, dark, sepia or custom
        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        page_width: Option<u32>,

        #[arg(long)]
        padding: Option<u32>,

        /// left, center or justify
        #[arg(long)]
        text_align: Option<TextAlign>,

        #[arg(long)]
        column_count: Option<u32>,

        #[arg(long)]
        auto_scroll: Option<bool>,

        #[arg(long)]
        scroll_speed: Option<f64>,

        #[arg(long)]
        bionic_reading: Option<bool>,

        #[arg(long)]
        immersive_mode: Option<bool>,
    },

    /// Restore the default reader settings
    Reset,
}

pub async fn reader(ctx: &Context, action: ReaderAction) -> Result<()> {
    let mut store = ctx.reader().await;

    match action {
        ReaderAction::Show => {}

        ReaderAction::Set {
            font_size,
            font_family,
            line_height,
            paragraph_spacing,
            background_color,
            text_color,
            theme,
            page_width,
            padding,
            text_align,
            column_count,
            auto_scroll,
            scroll_speed,
            bionic_reading,
            immersive_mode,
        } => {
            let patch = ReaderSettingsPatch {
                font_size,
                font_family,
                line_height,
                paragraph_spacing,
                background_color,
                text_color,
                theme,
                page_width,
                padding,
                text_align,
                column_count,
                auto_scroll,
                scroll_speed,
                bionic_reading,
                immersive_mode,
            };
            store
                .update_settings(patch)
                .await
                .context("Failed to save reader settings")?;
        }

        ReaderAction::Reset => {
            store
                .reset_settings()
                .await
                .context("Failed to save reader settings")?;
        }
    }

    println!("{}", serde_json::to_string_pretty(store.settings())?);
    Ok(())
}
