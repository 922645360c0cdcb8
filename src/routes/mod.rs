// # Routes Module
//
// HTTP route handlers for the server, one submodule per concern.
//
// - `health`: liveness and database health endpoints

/// Health check and monitoring endpoints
pub mod health;
