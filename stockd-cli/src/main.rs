//! stockd - HTTP API daemon for the stocks table
//!
//! Loads configuration from flags, the environment, and an optional .env
//! file, verifies the store is reachable, bootstraps the schema, then serves
//! the CRUD routes until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use stockd_server::db::{create_pool, migrations, ping};
use stockd_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "stockd",
    version,
    about = "HTTP CRUD API over the stocks table"
)]
struct Cli {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// PostgreSQL connection string (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment and flags win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    ping(&pool).await.context("Database liveness check failed")?;
    tracing::info!("Successfully connected to postgres");

    migrations::run(&pool).await.context("Schema bootstrap failed")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
