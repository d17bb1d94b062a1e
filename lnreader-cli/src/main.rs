//! lnreader CLI - Command-line interface for the web novel library

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lnreader_core::types::{NovelStatus, SortField, SortOrder};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lnreader")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (defaults to $LNREADER_DATA_DIR, then ./lnreader_data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the novels in your library
    List {
        /// Search titles, authors and genres
        #[arg(short, long)]
        search: Option<String>,

        /// Sort field for this listing (title, author, date-added, last-read, progress)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort order for this listing (asc, desc)
        #[arg(long)]
        order: Option<SortOrder>,

        /// Only show novels with this genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Only show novels with this status (repeatable)
        #[arg(long = "status")]
        statuses: Vec<NovelStatus>,

        /// Hide novels whose chapters have all been read
        #[arg(long)]
        hide_read: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a novel to your library
    Add {
        /// Novel title
        title: String,

        /// Author name
        #[arg(short, long, default_value = "Unknown")]
        author: String,

        /// Genre (repeatable)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Publication status
        #[arg(short, long, default_value = "Ongoing")]
        status: NovelStatus,

        /// Total number of chapters
        #[arg(short = 'c', long, default_value = "0")]
        total_chapters: u32,
    },

    /// Remove a novel with its chapters and bookmarks
    Remove {
        /// Novel id
        id: String,
    },

    /// Show a novel with its chapters and bookmarks
    Show {
        /// Novel id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the chapters of a novel
    Chapter {
        #[command(subcommand)]
        action: commands::ChapterAction,
    },

    /// Mark a chapter as read
    Read {
        /// Novel id
        novel_id: String,

        /// Chapter id
        chapter_id: String,
    },

    /// Bookmark a passage in a chapter
    Bookmark {
        #[command(subcommand)]
        action: commands::BookmarkAction,
    },

    /// Browse the sample catalog
    Browse {
        /// Search titles, authors and genres
        #[arg(short, long)]
        query: Option<String>,

        /// Only show this genre ("all" for everything)
        #[arg(short, long)]
        genre: Option<String>,

        /// Order by rating
        #[arg(long)]
        popular: bool,

        /// Add the browsed novel with this id to your library
        #[arg(long)]
        add: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export your library to a JSON file
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a library export, replacing the slices it contains
    Import {
        /// Export file to import
        input: PathBuf,
    },

    /// Show or change library list settings
    Settings {
        #[command(subcommand)]
        action: commands::SettingsAction,
    },

    /// Show or change reader display settings
    Reader {
        #[command(subcommand)]
        action: commands::ReaderAction,
    },

    /// List or toggle novel sources
    Sources {
        #[command(subcommand)]
        action: commands::SourcesAction,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: commands::CategoryAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "lnreader_cli=debug,lnreader_core=debug"
    } else {
        "lnreader_cli=info,lnreader_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = config::resolve_data_dir(cli.data_dir);
    tracing::debug!("Using data directory {}", data_dir.display());
    let ctx = commands::Context::new(&data_dir);

    match cli.command {
        Commands::List {
            search,
            sort,
            order,
            genres,
            statuses,
            hide_read,
            json,
        } => {
            let options = commands::ListOptions {
                search,
                sort,
                order,
                genres,
                statuses,
                hide_read,
                json,
            };
            commands::list(&ctx, options).await
        }

        Commands::Add {
            title,
            author,
            genres,
            status,
            total_chapters,
        } => commands::add(&ctx, title, author, genres, status, total_chapters).await,

        Commands::Remove { id } => commands::remove(&ctx, &id).await,

        Commands::Show { id, json } => commands::show(&ctx, &id, json).await,

        Commands::Chapter { action } => commands::chapter(&ctx, action).await,

        Commands::Read {
            novel_id,
            chapter_id,
        } => commands::read(&ctx, &novel_id, &chapter_id).await,

        Commands::Bookmark { action } => commands::bookmark(&ctx, action).await,

        Commands::Browse {
            query,
            genre,
            popular,
            add,
            json,
        } => {
            let options = commands::BrowseOptions {
                query,
                genre,
                popular,
                add,
                json,
            };
            commands::browse(&ctx, options).await
        }

        Commands::Export { output } => commands::export(&ctx, output.as_deref()).await,

        Commands::Import { input } => commands::import(&ctx, &input).await,

        Commands::Settings { action } => commands::settings(&ctx, action).await,

        Commands::Reader { action } => commands::reader(&ctx, action).await,

        Commands::Sources { action } => commands::sources(&ctx, action).await,

        Commands::Category { action } => commands::category(&ctx, action).await,
    }
}
