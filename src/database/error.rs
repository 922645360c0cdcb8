//! Database errors
//!
//! Driver failures from acquisition and execution are carried transparently:
//! `Display` and `source()` are the driver's own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The connection string was rejected by the driver
    #[error("invalid connection string: {0}")]
    Config(#[source] tokio_postgres::Error),

    #[error("failed to build TLS connector: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("failed to build connection pool: {0}")]
    Build(#[from] deadpool_postgres::BuildError),

    /// No connection could be borrowed from the pool
    #[error(transparent)]
    Pool(#[from] deadpool_postgres::PoolError),

    /// The statement failed on a borrowed connection
    #[error(transparent)]
    Query(#[from] tokio_postgres::Error),
}
