use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::json;

use crate::database::ConnectionStats;
use crate::server::AppState;

/// Health check endpoint handler.
///
/// Answers without touching the database, so it only proves the process is
/// serving requests.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
/// - **Response**: `{"status":"pong"}`
///
/// # Examples
/// ```bash
/// curl http://localhost:3000/ping
/// # Response: {"status":"pong"}
/// ```
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}

/// Body returned by `/health/db`
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub database: &'static str,
    pub pool: ConnectionStats,
}

/// Database health endpoint handler.
///
/// Borrows one pooled connection and runs the liveness statement.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/health/db`
///
/// # HTTP Status Codes
/// - **200 OK**: `{"database":"up", "pool":{...}}`
/// - **503 Service Unavailable**: `{"database":"down", "pool":{...}}`
pub async fn database(State(state): State<AppState>) -> (StatusCode, Json<DatabaseHealth>) {
    let up = state.db.test_connection().await;
    let body = DatabaseHealth {
        database: if up { "up" } else { "down" },
        pool: state.db.stats(),
    };
    let status = if up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}
