//! Command-line interface for arogya.
//!
//! Provides commands for listing the category directory, fetching category
//! content, featured content, search, and recording views. This is
//! presentation glue over the repository; all policy lives in the core.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ServiceConfig;
use crate::domain::ContentItem;
use crate::repository::ContentRepository;

/// arogya - Content directory service for health-education media
#[derive(Parser, Debug)]
#[command(name = "arogya")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the in-memory mock dataset instead of the live backend
    #[arg(long, global = true)]
    pub mock: bool,

    /// Override the backend endpoint root
    #[arg(long, global = true, env = "AROGYA_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List active categories in display order
    Categories,

    /// Fetch the content of a category by slug
    Content {
        /// Category slug (e.g. "nutrition")
        slug: String,
    },

    /// Fetch featured content (best-effort)
    Featured,

    /// Search content (best-effort)
    Search {
        /// Search query
        query: String,
    },

    /// Record a view for a content item (fire-and-forget)
    View {
        /// Content ID
        content_id: u64,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut config = ServiceConfig::load()?;
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        let repository = if self.mock {
            ContentRepository::mock(&config)
        } else {
            ContentRepository::live(&config)?
        };

        match self.command {
            Commands::Categories => list_categories(&repository).await,
            Commands::Content { slug } => show_content(&repository, &slug).await,
            Commands::Featured => show_featured(&repository).await,
            Commands::Search { query } => search_content(&repository, &query).await,
            Commands::View { content_id } => record_view(&repository, content_id).await,
            Commands::Config => show_config(&config),
        }
    }
}

/// List active categories
async fn list_categories(repository: &ContentRepository) -> Result<()> {
    let categories = repository.directory().list_active().await?;

    if categories.is_empty() {
        println!("No categories available.");
        return Ok(());
    }

    for category in categories {
        let icon = category.icon.as_deref().unwrap_or("-");
        println!(
            "{:<4} {:<22} {:<12} {}",
            category.id, category.slug, icon, category.name
        );
    }

    Ok(())
}

/// Fetch and print the content of a category
async fn show_content(repository: &ContentRepository, slug: &str) -> Result<()> {
    // Resolve metadata first so the header can show the display name; the
    // fetch itself does not depend on it.
    let category = repository.directory().resolve(slug).await?;
    match category {
        Some(category) => println!("# {} ({})", category.name, category.slug),
        None => println!("# {} (not in local directory)", slug),
    }

    let items = repository.get_by_category(slug).await?;
    if items.is_empty() {
        println!("No content in this category yet.");
        return Ok(());
    }

    for item in &items {
        print_item(repository, item);
    }

    Ok(())
}

/// Print featured content
async fn show_featured(repository: &ContentRepository) -> Result<()> {
    let items = repository.featured().await;

    if items.is_empty() {
        println!("No featured content.");
        return Ok(());
    }

    for item in &items {
        print_item(repository, item);
    }

    Ok(())
}

/// Search and print results
async fn search_content(repository: &ContentRepository, query: &str) -> Result<()> {
    let items = repository.search(query).await;

    if items.is_empty() {
        println!("No results for \"{}\".", query);
        return Ok(());
    }

    println!("{} result(s) for \"{}\":", items.len(), query);
    for item in &items {
        print_item(repository, item);
    }

    Ok(())
}

/// Record a view
async fn record_view(repository: &ContentRepository, content_id: u64) -> Result<()> {
    repository.record_view(content_id).await;
    println!("View recorded (best-effort) for content {}.", content_id);
    Ok(())
}

/// Print resolved configuration
fn show_config(config: &ServiceConfig) -> Result<()> {
    println!("base_url:                  {}", config.base_url);
    println!("timeout_ms:                {}", config.timeout_ms);
    println!(
        "default_thumbnail_quality: {}",
        config.default_thumbnail_quality
    );
    println!("mock_delay_ms:             {}", config.mock_delay_ms);
    Ok(())
}

fn print_item(repository: &ContentRepository, item: &ContentItem) {
    let duration = item
        .duration
        .as_deref()
        .map(|d| format!(" [{}]", d))
        .unwrap_or_default();
    let verified = if item.is_verified { " ✓" } else { "" };

    println!(
        "  {:<4} {:<8} {}{}{}",
        item.id, item.kind, item.title, duration, verified
    );

    if let Some(thumbnail) = repository.thumbnail_for(item) {
        println!("       thumb: {}", thumbnail);
    }
}
