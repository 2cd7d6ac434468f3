//! Calendar API Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::CalendarEntryDto;

use crate::core::ServerState;
use crate::db::repository::time_off_request;
use crate::utils::{AppResult, ok};

/// GET /api/calendar/time-off - every user's time-off entries for the
/// company calendar
pub async fn time_off_feed(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<CalendarEntryDto>>>> {
    let entries = time_off_request::calendar_feed(&state.pool).await?;
    let message = if entries.is_empty() {
        "No time off requests available."
    } else {
        "Time off requests retrieved successfully"
    };
    Ok(ok(message, entries))
}
