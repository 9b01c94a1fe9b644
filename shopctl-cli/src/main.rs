//! shopctl CLI - product and user CRUD service
//!
//! - `serve`: run the HTTP API over PostgreSQL (or an in-memory store)
//! - `fetch`: exercise a running API as a client

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "shopctl",
    author,
    version,
    about = "Minimal CRUD REST API for products and users"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Exercise a running API (list all, fetch by id, 404 handling)
    Fetch(commands::fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; values may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Fetch(args) => commands::run_fetch(args).await?,
    }
    Ok(())
}
