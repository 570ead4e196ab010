//! HTTP server command
//!
//! Prepares the schema, then serves the trivia API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, schema};
use trivia_server::{run_server, AppState, PgStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Maximum database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.resolve_url()?;

    tracing::info!(mode = %args.database.mode, "Starting trivia server on {}", args.bind);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    schema::migrate(&pool)
        .await
        .context("Failed to prepare database schema")?;

    let state = AppState::new(Arc::new(PgStore::new(pool)));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
