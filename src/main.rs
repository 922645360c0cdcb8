//! # mapdb-server
//!
//! Starts the HTTP server with a PostgreSQL pool built from the environment.
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and adjust `POSTGRES_URL` / `POSTGRES_SSL`:
//! ```bash
//! cp .env.example .env
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! Once running:
//! ```bash
//! curl http://localhost:3000/ping
//! curl http://localhost:3000/health/db
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mapdb_server::config::Config;
use mapdb_server::database::DatabaseConnection;
use mapdb_server::server::{self, AppState};

/// Application entry point.
///
/// 1. Load `.env` if present
/// 2. Initialize logging
/// 3. Resolve configuration and build the database pool
/// 4. Probe the database once, then serve until terminated
///
/// An unreachable database is reported but does not stop the server; the
/// pool connects lazily and `/health/db` keeps reporting its state.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration from environment")?;

    let db = DatabaseConnection::new(&config.database).context("Failed to create database pool")?;

    if !db.test_connection().await {
        tracing::warn!("⚠️  Database is not reachable yet, serving anyway");
    }

    server::start(&config.server, AppState::new(db)).await
}
