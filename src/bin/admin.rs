//! CLI administration tool for shortlinks.
//!
//! Manages links and inspects the click leaderboard without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a link
//! cargo run --bin admin -- links create abc https://example.com
//!
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show the 10 most clicked links
//! cargo run --bin admin -- leaderboard --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) is required,
//! `REDIS_URL` / `REDIS_HOST` and `METRICS_KEY` are needed for `leaderboard`.

use shortlinks::application::services::{LeaderboardService, LinkService};
use shortlinks::config::{self, Config, MAX_LEADERBOARD_LIMIT};
use shortlinks::domain::entities::is_reserved_code;
use shortlinks::error::AppError;
use shortlinks::infrastructure::counter::RedisCounterStore;
use shortlinks::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlinks.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show the most clicked links
    Leaderboard {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a new short code
    Create {
        /// Short code (at least 3 characters)
        code: String,

        /// Destination URL
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all links, newest first
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                config::mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Leaderboard { limit } => handle_leaderboard(&config, &pool, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match action {
        LinkAction::Create { code, url, yes } => create_link(&service, code, url, yes).await,
        LinkAction::List => list_links(&service).await,
    }
}

/// Registers a link after a confirmation prompt (unless `--yes`).
async fn create_link(service: &LinkService, code: String, url: String, yes: bool) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    if code.chars().count() < 3 {
        anyhow::bail!("Code must be at least 3 characters");
    }
    if is_reserved_code(&code) {
        anyhow::bail!("Code '{}' is reserved for a built-in route", code);
    }

    println!("  Code: {}", code.cyan());
    println!("  URL:  {}", url.bright_white());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.create_link(code, url).await {
        Ok(link) => {
            println!();
            println!(
                "{} (id {})",
                "✅ Link created".green().bold(),
                link.id.to_string().bright_white()
            );
            Ok(())
        }
        Err(AppError::DuplicateCode { code }) => {
            println!("{} '{}'", "⚠️  Code already exists:".yellow(), code);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create link: {}", e)),
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID   Code                 Created            URL
///   ──────────────────────────────────────────────────────────────
///   2    docs                 2025-01-16 14:20   https://docs.rs
///   1    abc                  2025-01-15 10:30   https://example.com
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<20} {:<18} {}",
            link.id.to_string().bright_black(),
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the leaderboard from the Redis counter store, joined with codes
/// from the registry.
async fn handle_leaderboard(config: &Config, pool: &PgPool, limit: usize) -> Result<()> {
    println!("{}", "🏆 Leaderboard".bright_blue().bold());
    println!();

    if limit == 0 || limit > MAX_LEADERBOARD_LIMIT {
        anyhow::bail!("--limit must be between 1 and {}", MAX_LEADERBOARD_LIMIT);
    }

    let Some(redis_url) = &config.redis_url else {
        println!(
            "{}",
            "  Redis is not configured; in-memory counters live inside the server process."
                .yellow()
        );
        println!(
            "  Query {} on the running server instead.",
            "GET /api/v1/metrics".bright_cyan()
        );
        return Ok(());
    };

    let store = RedisCounterStore::connect(redis_url, config.metrics_key.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Redis: {}", e))?;
    let entries = LeaderboardService::new(Arc::new(store))
        .report(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read leaderboard: {}", e))?;

    if entries.is_empty() {
        println!("{}", "  No clicks recorded yet".yellow());
        return Ok(());
    }

    let links = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    println!(
        "  {:<5} {:<6} {:<20} {:>8}",
        "Rank".bright_white().bold(),
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(45).bright_black());

    for (rank, entry) in entries.iter().enumerate() {
        let code = links
            .iter()
            .find(|l| l.id == entry.short_link_id)
            .map(|l| l.code.as_str())
            .unwrap_or("<deleted>");

        println!(
            "  {:<5} {:<6} {:<20} {:>8}",
            (rank + 1).to_string().bright_black(),
            entry.short_link_id.to_string().bright_black(),
            code.cyan(),
            entry.clicks.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
