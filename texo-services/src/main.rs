//! CLI entry point for texo-services

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use texo_db::{Blog, MySqlPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use texo_services::{app, server, AppState, ServiceConfig};

#[derive(Parser)]
#[command(name = "texo-services")]
#[command(about = "Serve published blog posts and tags as JSON")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the HTTP server to (overrides config)
    #[arg(long)]
    server_address: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    server_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = ServiceConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(address) = cli.server_address {
        config.server_address = address;
    }
    if let Some(port) = cli.server_port {
        config.server_port = port;
    }

    config.validate()?;

    let connection = config.connection();
    info!("Using database {}", connection);

    let pool = MySqlPool::builder_for(&connection)
        .pool_max(config.max_connections)
        .build()?;

    let state = AppState::new(Blog::new(pool.clone()), config.posts_per_page);
    server::serve(app(state), &config.bind_address()).await?;

    pool.disconnect().await?;
    info!("Database pool closed");
    Ok(())
}
