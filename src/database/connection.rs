// Database Connection Management
//
// Handles PostgreSQL connection pooling using tokio-postgres and deadpool.
// Every operation borrows one pooled client and drops it before returning,
// which hands the connection back to the pool on all exit paths.
use std::str::FromStr;

use chrono::{DateTime, Utc};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use serde::Serialize;
use tokio_postgres::config::SslMode;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

use crate::config::{DatabaseConfig, TlsPolicy};
use crate::database::error::DatabaseError;

/// Statement used to prove a borrowed connection is alive
const LIVENESS_STATEMENT: &str = "SELECT NOW()";

/// Database connection wrapper
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: Pool,
}

impl DatabaseConnection {
    /// Build the pool for the provided configuration.
    ///
    /// No connection is opened here. An unreachable server is only reported
    /// once a connection is actually borrowed.
    pub fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        tracing::info!("🔌 Configuring database pool for {}", config.redacted_url());

        let mut pg_config =
            tokio_postgres::Config::from_str(&config.url).map_err(DatabaseError::Config)?;

        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let mgr = match config.tls {
            // honour sslmode=require from the connection string, with full verification
            TlsPolicy::Unset if pg_config.get_ssl_mode() == SslMode::Require => {
                let tls_connector = TlsConnector::builder().build()?;
                Manager::from_config(pg_config, MakeTlsConnector::new(tls_connector), mgr_config)
            }
            TlsPolicy::Unset => Manager::from_config(pg_config, NoTls, mgr_config),
            TlsPolicy::RequireUnverified => {
                let tls_connector = TlsConnector::builder()
                    .danger_accept_invalid_certs(true)
                    .danger_accept_invalid_hostnames(true)
                    .build()?;
                pg_config.ssl_mode(SslMode::Require);
                tracing::warn!("🔓 TLS required with certificate verification disabled");
                Manager::from_config(pg_config, MakeTlsConnector::new(tls_connector), mgr_config)
            }
        };

        let pool = Pool::builder(mgr)
            .max_size(config.pool.max_size)
            .wait_timeout(config.pool.wait_timeout)
            .create_timeout(config.pool.create_timeout)
            .recycle_timeout(config.pool.recycle_timeout)
            .runtime(Runtime::Tokio1)
            .build()?;

        tracing::debug!(max_size = config.pool.max_size, "database pool constructed");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Run a parameterized statement on a pooled connection and return its rows.
    ///
    /// Driver errors are passed through untouched; nothing is retried.
    pub async fn query(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, DatabaseError> {
        let client = self.pool.get().await?;
        let rows = client.query(statement, params).await?;
        Ok(rows)
    }

    /// Check that a connection can be borrowed and answers a liveness statement.
    ///
    /// Never fails: the outcome is logged and reduced to a boolean.
    pub async fn test_connection(&self) -> bool {
        match self.server_time().await {
            Ok(now) => {
                tracing::info!("✅ Database connection established, server time: {}", now);
                true
            }
            Err(e) => {
                tracing::error!("❌ Database connection failed: {}", e);
                false
            }
        }
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, DatabaseError> {
        let client = self.pool.get().await?;
        let row = client.query_one(LIVENESS_STATEMENT, &[]).await?;
        Ok(row.try_get(0)?)
    }

    /// Get database connection statistics
    pub fn stats(&self) -> ConnectionStats {
        let status = self.pool.status();
        ConnectionStats {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}

/// Database connection statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionStats {
    pub max_size: usize,
    /// Connections currently open, borrowed or idle
    pub size: usize,
    pub available: usize,
    pub waiting: usize,
}
