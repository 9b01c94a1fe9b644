//! HTTP server command
//!
//! Opens the pool, optionally creates the tables, serves until shutdown,
//! then closes the pool.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use shopctl_server::db::{create_pool_with_options, ensure_schema, DEFAULT_MAX_CONNECTIONS};
use shopctl_server::http::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:19132")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create the products and users tables if they do not exist
    #[arg(long)]
    pub init_schema: bool,

    /// Serve from an in-process store instead of PostgreSQL (data is lost on exit).
    /// Takes precedence over --database-url
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    if args.in_memory {
        tracing::warn!("Serving from in-memory store; nothing is persisted");
        return run_server(AppState::in_memory(), config)
            .await
            .context("Server error");
    }

    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(max_connections = args.max_connections, "Connected to database");

    if args.init_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to create tables")?;
    }

    // Run server (blocks until shutdown), close the pool either way
    let result = run_server(AppState::postgres(pool.clone()), config).await;
    pool.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")
}
