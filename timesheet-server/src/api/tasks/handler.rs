//! Task API Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::TaskDto;

use crate::core::ServerState;
use crate::db::repository::task;
use crate::utils::{AppResult, ok};

/// GET /api/tasks - active task catalog entries, ordered by name
pub async fn list_active(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<TaskDto>>>> {
    let tasks = task::find_active(&state.pool).await?;
    let tasks: Vec<TaskDto> = tasks.into_iter().map(Into::into).collect();
    Ok(ok("Tasks retrieved successfully.", tasks))
}
