use axum::extract::State;
use axum::{routing::get, Json, Router};
use intake_db::Engine;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    /// `postgres` or `sqlite`.
    pub engine: &'static str,
    pub db_healthy: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.database.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        engine: match state.database.engine() {
            Engine::Postgres => "postgres",
            Engine::Sqlite => "sqlite",
        },
        db_healthy,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
