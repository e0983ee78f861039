//! Hyde CLI Binary
//!
//! Thin command-line driver over the content engine, operating on a Jekyll
//! working copy on the local filesystem.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use hyde::config::ContentConfig;
use hyde::content::ContentManager;
use hyde::logging::{init_logging, LoggingConfig};
use hyde::storage::FsStorage;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hyde", about = "Convention-driven Jekyll content management")]
struct Cli {
    /// Root of the Jekyll working copy
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts, newest first
    Posts,
    /// List all drafts, sorted by title
    Drafts,
    /// Create a new post dated today
    NewPost {
        title: String,
        /// Target directory overriding the posts dir
        #[arg(long)]
        dir: Option<String>,
    },
    /// Create a new draft
    NewDraft {
        title: String,
        /// Target directory overriding the drafts dir
        #[arg(long)]
        dir: Option<String>,
    },
    /// Move a draft into the posts area
    Publish { filename: String },
    /// Move a post back into the drafts area
    Unpublish { filename: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::default())?;

    let config = match &cli.config {
        Some(path) => ContentConfig::load(path)?,
        None => ContentConfig::default(),
    };
    let storage = Arc::new(FsStorage::new(cli.root.clone()));
    let manager = ContentManager::new(storage, config);

    match &cli.command {
        Commands::Posts => {
            for post in manager.list_posts().await? {
                println!("{}  {}", post.date, post.title);
            }
        }
        Commands::Drafts => {
            for draft in manager.list_drafts().await? {
                println!("{}", draft.title);
            }
        }
        Commands::NewPost { title, dir } => {
            let post = match dir {
                Some(dir) => manager.create_post_in(title, dir).await?,
                None => manager.create_post(title).await?,
            };
            println!("created {}", post.file.path);
        }
        Commands::NewDraft { title, dir } => {
            let draft = match dir {
                Some(dir) => manager.create_draft_in(title, dir).await?,
                None => manager.create_draft(title).await?,
            };
            println!("created {}", draft.file.path);
        }
        Commands::Publish { filename } => {
            let drafts = manager.list_drafts().await?;
            let draft = drafts
                .iter()
                .find(|d| d.file.name() == filename)
                .ok_or_else(|| anyhow!("no draft named '{}'", filename))?;
            let post = manager.publish(draft).await?;
            println!("published as {}", post.file.path);
        }
        Commands::Unpublish { filename } => {
            let posts = manager.list_posts().await?;
            let post = posts
                .iter()
                .find(|p| p.file.name() == filename)
                .ok_or_else(|| anyhow!("no post named '{}'", filename))?;
            let draft = manager.unpublish(post).await?;
            println!("unpublished as {}", draft.file.path);
        }
    }

    Ok(())
}
