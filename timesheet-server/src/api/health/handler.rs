//! Health API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;
use crate::utils::{AppResult, ok};

#[derive(Serialize)]
pub struct HealthStatus {
    pub database: bool,
    pub environment: String,
}

/// GET /api/health - liveness and database reachability
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<HealthStatus>>> {
    let database = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();

    Ok(ok(
        "Server is running.",
        HealthStatus {
            database,
            environment: state.config.environment.clone(),
        },
    ))
}
