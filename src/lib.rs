//! # mapdb-server
//!
//! PostgreSQL connectivity for the map service: connection settings resolved
//! from the environment, a deadpool-managed connection pool, a pass-through
//! parameterized `query` and a `test_connection` health check, plus a small
//! HTTP surface exposing liveness and database health.
//!
//! ## Modules
//! - `config`: environment configuration with named defaults
//! - `database`: the pool handle and its error type
//! - `routes`: HTTP handlers
//! - `server`: router and listener, owns the injected database handle

pub mod config;
pub mod database;
pub mod routes;
pub mod server;

pub use config::{Config, DatabaseConfig, PoolConfig, ServerConfig, TlsPolicy};
pub use database::{ConnectionStats, DatabaseConnection, DatabaseError};
