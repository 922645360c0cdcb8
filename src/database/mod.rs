//! # Database Module
//!
//! PostgreSQL connectivity using tokio-postgres with a deadpool connection pool.

pub mod connection;
pub mod error;

pub use connection::{ConnectionStats, DatabaseConnection};
pub use error::DatabaseError;
