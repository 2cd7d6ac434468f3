//! Time Entry API Handlers
//!
//! Handlers validate input shape and resolve identity; every workflow rule
//! (week lock, hours, ownership) lives in the repository and is enforced
//! inside its transaction.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::{
    TimeEntryCreate, TimeEntryCreateForUser, TimeEntryDto, TimeEntryUpdate, TimeEntryUpdateForUser,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::time_entry;
use crate::utils::validation::{MAX_COMMENT_LEN, validate_optional_text};
use crate::utils::{AppResult, ok};

#[derive(Deserialize)]
pub struct WeekQuery {
    /// Any date inside the week of interest
    pub date: NaiveDate,
}

/// GET /api/time-entries?date=YYYY-MM-DD - caller's entries for that week
pub async fn list_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<ApiResponse<Vec<TimeEntryDto>>>> {
    let entries = time_entry::list_week(&state.pool, user.id, query.date).await?;
    Ok(ok("Time entries retrieved successfully.", entries))
}

/// GET /api/time-entries/employee/{user_id}?date=YYYY-MM-DD - any user's week (admin)
pub async fn list_for_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i64>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<ApiResponse<Vec<TimeEntryDto>>>> {
    let entries = time_entry::list_week(&state.pool, user_id, query.date).await?;
    Ok(ok("Time entries retrieved successfully.", entries))
}

/// POST /api/time-entries - log hours for the caller
pub async fn create_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TimeEntryCreate>,
) -> AppResult<Json<ApiResponse<TimeEntryDto>>> {
    validate_optional_text(&payload.comment, "comment", MAX_COMMENT_LEN)?;
    let entry = time_entry::create(
        &state.pool,
        user.id,
        payload.task_id,
        payload.date,
        payload.hours,
        payload.comment,
    )
    .await?;
    Ok(ok("Time entry added successfully.", entry))
}

/// POST /api/time-entries/employee - log hours on an employee's behalf (admin)
pub async fn create_for_user(
    State(state): State<ServerState>,
    Json(payload): Json<TimeEntryCreateForUser>,
) -> AppResult<Json<ApiResponse<TimeEntryDto>>> {
    validate_optional_text(&payload.comment, "comment", MAX_COMMENT_LEN)?;
    let entry = time_entry::create(
        &state.pool,
        payload.user_id,
        payload.task_id,
        payload.date,
        payload.hours,
        payload.comment,
    )
    .await?;
    Ok(ok("Time entry added successfully.", entry))
}

/// PUT /api/time-entries/{id} - update one of the caller's entries
pub async fn update_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<TimeEntryUpdate>,
) -> AppResult<Json<ApiResponse<TimeEntryDto>>> {
    validate_optional_text(&payload.comment, "comment", MAX_COMMENT_LEN)?;
    let entry = time_entry::update(
        &state.pool,
        id,
        user.id,
        payload.task_id,
        payload.date,
        payload.hours,
        payload.comment,
    )
    .await?;
    Ok(ok("Time entry updated successfully.", entry))
}

/// PUT /api/time-entries/{id}/admin - update any user's entry (admin)
///
/// The payload asserts the owning user; the stored owner is never changed.
pub async fn update_for_user(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TimeEntryUpdateForUser>,
) -> AppResult<Json<ApiResponse<TimeEntryDto>>> {
    validate_optional_text(&payload.comment, "comment", MAX_COMMENT_LEN)?;
    let entry = time_entry::update(
        &state.pool,
        id,
        payload.user_id,
        payload.task_id,
        payload.date,
        payload.hours,
        payload.comment,
    )
    .await?;
    Ok(ok("Time entry updated successfully.", entry))
}

/// DELETE /api/time-entries/{id} - delete one of the caller's entries
pub async fn delete_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<i64>>> {
    time_entry::delete(&state.pool, id, user.id, false).await?;
    Ok(ok("Time entry deleted successfully.", id))
}

/// DELETE /api/time-entries/{id}/any - delete any user's entry (admin)
pub async fn delete_any(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<i64>>> {
    time_entry::delete(&state.pool, id, user.id, true).await?;
    Ok(ok("Time entry deleted successfully.", id))
}
