//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cache::PostCache;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Build-time blog listing for a personal portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Content source to read (defaults to `default_source`)
        source: Option<String>,

        /// Only show posts whose title contains this text
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Write post summaries as JSON into the public folder
    #[command(alias = "e")]
    Export {
        /// Content source to read (defaults to `default_source`)
        source: Option<String>,

        /// Only export posts whose title contains this text
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Content source to create it in
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = folio::Folio::new(&base_dir)?;

    match cli.command {
        Commands::List { source, query } => {
            let source = source.unwrap_or_else(|| site.config.default_source.clone());
            let posts = PostCache::global().get_or_load(&site, &source)?;
            folio::commands::list::run(&site, posts, &query)?;
        }

        Commands::Export { source, query } => {
            let source = source.unwrap_or_else(|| site.config.default_source.clone());
            let posts = PostCache::global().get_or_load(&site, &source)?;
            let path = folio::commands::export::run(&site, &source, posts, &query)?;
            println!("Exported to {:?}", path);
        }

        Commands::New { title, source } => {
            tracing::info!("Creating new post with title: {}", title);
            let path = site.new_post(&title, source.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
