//! Time Off API Handlers
//!
//! Approve/reject commit their status change first and only then enqueue
//! the notification; a dropped or failed email never undoes a decision.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::ApiResponse;
use shared::models::{DeleteTimeOff, RejectTimeOff, TimeEntryDto, TimeOffFilter};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::time_off_request;
use crate::notify::{approval_notification, extract_admin_comment, rejection_notification};
use crate::utils::validation::{MAX_COMMENT_LEN, validate_optional_text};
use crate::utils::{AppResult, ok};

/// GET /api/time-off/mine - caller's time-off requests, newest first
///
/// An empty result is reported as an unsuccessful envelope rather than an
/// empty list.
pub async fn list_mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<TimeEntryDto>>>> {
    let requests = time_off_request::list_for_user(&state.pool, user.id).await?;
    if requests.is_empty() {
        return Ok(Json(ApiResponse::fail(
            "No time off requests found for this user.",
        )));
    }
    Ok(ok("Time off requests retrieved successfully.", requests))
}

/// POST /api/time-off/filter - browse requests across users (admin)
pub async fn filter(
    State(state): State<ServerState>,
    Json(payload): Json<TimeOffFilter>,
) -> AppResult<Json<ApiResponse<Vec<TimeEntryDto>>>> {
    let requests = time_off_request::filter(&state.pool, &payload).await?;
    Ok(ok("See the results.", requests))
}

/// POST /api/time-off/{id}/approve - approve a request (admin)
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<i64>>> {
    let decision = time_off_request::approve(&state.pool, id).await?;

    state.notify.enqueue(approval_notification(&decision));

    Ok(ok(
        "Time off request status approved successfully and User notified",
        id,
    ))
}

/// POST /api/time-off/{id}/reject - reject a request (admin)
///
/// A non-empty comment replaces the linked entry's comment.
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RejectTimeOff>,
) -> AppResult<Json<ApiResponse<i64>>> {
    validate_optional_text(&payload.comment, "comment", MAX_COMMENT_LEN)?;
    let admin_comment = extract_admin_comment(payload.comment.as_deref());

    let decision = time_off_request::reject(&state.pool, id, payload.comment.as_deref()).await?;

    state
        .notify
        .enqueue(rejection_notification(&decision, &admin_comment));

    Ok(ok(
        "Time off request rejected successfully and User notified",
        id,
    ))
}

/// DELETE /api/time-off/{id} - withdraw one's own future request
pub async fn delete_own(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<DeleteTimeOff>,
) -> AppResult<Json<ApiResponse<i64>>> {
    let deleted =
        time_off_request::delete_own(&state.pool, id, payload.requested_date, user.id).await?;
    Ok(ok("Time off request deleted successfully.", deleted))
}
